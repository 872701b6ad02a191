use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod health;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat {},
    /// Ask a single question and print the answer
    Ask {
        #[arg(long)]
        question: String,
    },
    /// Check that the backend service is reachable
    Health {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command, defaulting to an interactive session
    match args.command {
        Some(Command::Chat {}) | None => {
            chat::run().await?;
        }
        Some(Command::Ask { question }) => {
            ask::run(&question).await?;
        }
        Some(Command::Health {}) => {
            health::run().await?;
        }
    }

    Ok(())
}
