use clap::Parser;
use photo_classifier_rs::app_state::{
    AppConfig, AppState, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use photo_classifier_rs::server;

#[derive(Parser, Debug)]
#[command(about = "Photo classification service backed by a vision model")]
struct Cli {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,

    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the chat-completions provider.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Outbound request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The credential is captured once here; handlers never touch the
    // environment. A missing key is reported per request, not at startup.
    let api_key = std::env::var("OPENAI_API_KEY").ok();

    let config = AppConfig {
        host: cli.host,
        port: cli.port,
        model: cli.model,
        api_base: cli.api_base,
        api_key,
        timeout_secs: cli.timeout_secs,
    };
    let app_state = AppState::new(config.clone())?;

    actix_web::rt::System::new()
        .block_on(async move { server::startup(config, app_state).await })?;
    Ok(())
}
