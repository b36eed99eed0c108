use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the environment is ready to drive an agent
    Check,
    /// Chat with the weather/time demo agent
    Chat {
        /// Model route to use instead of the configured one
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Ok(path) = dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check => commands::check::run(),
        Command::Chat { model } => commands::chat::run(model).await,
    }
}
