use async_trait::async_trait;
use kokoro::{DiaryAnalyzer, HistoryRecord, InMemoryHistory, ERROR_IDIOM};
use llm::{ChatClient, LlmError};
use nikki::{app, AppState};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Replies with a fixed string and counts invocations.
struct Canned {
    reply: &'static str,
    calls: AtomicUsize,
}

impl Canned {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChatClient for Canned {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct Failing;

#[async_trait]
impl ChatClient for Failing {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Transport("connection refused".into()))
    }
}

async fn spawn_app(client: Arc<dyn ChatClient>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState {
        analyzer: Arc::new(DiaryAnalyzer::new(client)),
        history: Arc::new(InMemoryHistory::new()),
    };
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn index_serves_empty_form() {
    let addr = spawn_app(Arc::new(Canned::new("unused"))).await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("name=\"diary_text\""));
    assert!(!body.contains("これまでの日記"));
}

#[tokio::test]
async fn submission_renders_result_and_records_history() {
    let addr = spawn_app(Arc::new(Canned::new(
        "感情: やる気に満ちている時\nアドバイス: 散歩しましょう。\n四字熟語: 晴耕雨読",
    )))
    .await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("http://{addr}/"))
        .form(&[("diary_text", "今日はよく眠れた。")])
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("散歩しましょう。"));
    assert!(body.contains("晴耕雨読"));
    assert!(body.contains("今日はよく眠れた。"));

    let records: Vec<HistoryRecord> = client
        .get(format!("http://{addr}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "今日はよく眠れた。");
    assert_eq!(records[0].result.idiom, "晴耕雨読");
}

#[tokio::test]
async fn history_lists_most_recent_first() {
    let addr = spawn_app(Arc::new(Canned::new(
        "アドバイス: いいですね。\n四字熟語: 一日一善",
    )))
    .await;
    let client = reqwest::Client::new();

    for text in ["一件目", "二件目"] {
        client
            .post(format!("http://{addr}/"))
            .form(&[("diary_text", text)])
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    let records: Vec<HistoryRecord> = client
        .get(format!("http://{addr}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let texts: Vec<_> = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["二件目", "一件目"]);
}

#[tokio::test]
async fn empty_submission_never_reaches_the_pipeline() {
    let canned = Arc::new(Canned::new("unused"));
    let addr = spawn_app(canned.clone()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{addr}/"))
        .form(&[("diary_text", "")])
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    assert_eq!(canned.calls.load(Ordering::SeqCst), 0);
    let records: Vec<HistoryRecord> = client
        .get(format!("http://{addr}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn remote_failure_still_renders_and_records() {
    let addr = spawn_app(Arc::new(Failing)).await;
    let client = reqwest::Client::new();

    let body = client
        .post(format!("http://{addr}/"))
        .form(&[("diary_text", "今日は雨だった。")])
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("分析中にエラーが発生しました"));
    assert!(body.contains(ERROR_IDIOM));

    let records: Vec<HistoryRecord> = client
        .get(format!("http://{addr}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result.idiom, ERROR_IDIOM);
}
