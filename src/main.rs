use anyhow::Result;
use compass::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
