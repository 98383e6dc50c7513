//! Server-side rendering of the diary page.

use kokoro::{AnalysisResult, HistoryRecord};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>心の日記</title>
<style>
  body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; height: 8rem; }
  .result, .entry { border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem 1rem; margin: 1rem 0; }
  .idiom { font-weight: bold; }
  .timestamp { color: #666; font-size: 0.85rem; }
  .diary-text { white-space: pre-wrap; }
</style>
</head>
<body>
<h1>心の日記</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Replace the characters HTML treats specially.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole page: the form, the fresh result when one exists, and the
/// history most recent first.
pub fn page(
    result: Option<&AnalysisResult>,
    diary_text: &str,
    history: &[HistoryRecord],
) -> String {
    let mut out = String::from(PAGE_HEAD);

    out.push_str("<form method=\"post\" action=\"/\">\n");
    out.push_str(&format!(
        "<textarea name=\"diary_text\" placeholder=\"今日の出来事を書いてください\">{}</textarea>\n",
        escape(diary_text)
    ));
    out.push_str("<p><button type=\"submit\">分析する</button></p>\n</form>\n");

    if let Some(result) = result {
        out.push_str("<h2>今回の分析</h2>\n<div class=\"result\">\n");
        out.push_str(&format!("<p>{}</p>\n", escape(&result.advice)));
        out.push_str(&format!(
            "<p class=\"idiom\">{}</p>\n",
            escape(&result.idiom)
        ));
        out.push_str("</div>\n");
    }

    if !history.is_empty() {
        out.push_str("<h2>これまでの日記</h2>\n");
        for record in history {
            out.push_str("<div class=\"entry\">\n");
            out.push_str(&format!(
                "<p class=\"timestamp\">{}</p>\n",
                escape(&record.timestamp)
            ));
            out.push_str(&format!(
                "<p class=\"diary-text\">{}</p>\n",
                escape(&record.text)
            ));
            out.push_str(&format!("<p>{}</p>\n", escape(&record.result.advice)));
            out.push_str(&format!(
                "<p class=\"idiom\">{}</p>\n",
                escape(&record.result.idiom)
            ));
            out.push_str("</div>\n");
        }
    }

    out.push_str(PAGE_TAIL);
    out
}
