use clap::Parser;
use kokoro::{DiaryAnalyzer, InMemoryHistory};
use llm::OpenAiClient;
use nikki::{app, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY must be set"))?;
    let base_url =
        std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| llm::DEFAULT_BASE_URL.to_string());

    let state = AppState {
        analyzer: Arc::new(DiaryAnalyzer::new(Arc::new(OpenAiClient::new(
            base_url, api_key,
        )))),
        history: Arc::new(InMemoryHistory::new()),
    };

    let addr: SocketAddr = cli.addr.parse()?;
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
