use anyhow::Result;
use castmark_error::{ServerError, ServerErrorKind};
use castmark_history::FileHistory;
use castmark_interface::ContentDriver;
use castmark_models::AnthropicClient;
use castmark_server::{AppState, app};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Castmark content generation server", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "CASTMARK_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// Path of the history file
    #[arg(long, env = "CASTMARK_HISTORY_PATH", default_value = "castmark_history.json")]
    history_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("castmark=info")),
        )
        .init();

    let args = Args::parse();

    let driver = AnthropicClient::from_env()?;
    info!(
        provider = "anthropic",
        model = driver.model_name(),
        "Generation client ready"
    );

    let history = FileHistory::new(&args.history_file)?;
    let state = AppState::new(Arc::new(driver), Arc::new(history));

    let listener = tokio::net::TcpListener::bind(&args.addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: args.addr.clone(),
            message: e.to_string(),
        })
    })?;
    info!(addr = %args.addr, "Castmark server listening");

    axum::serve(listener, app(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;
    Ok(())
}
