use clap::Parser;
use prompt_studio::cli::Cli;
use prompt_studio::commands;
use prompt_studio::core::storage::AppCtx;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init(cli.server, cli.library)?;
    commands::dispatch(cli.command, &ctx).await
}
