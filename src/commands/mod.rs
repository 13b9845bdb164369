pub mod doctor;
pub mod heartbeat;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Diagnose potential Hackatime issues")]
    Doctor,
    #[command(about = "Send a test heartbeat")]
    Heartbeat(heartbeat::HeartbeatArgs),
    #[command(about = "Show your coding statistics")]
    Status,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Doctor => doctor::cmd().await,
            Commands::Heartbeat(args) => heartbeat::cmd(args).await,
            Commands::Status => status::cmd().await,
        }
    }
}
