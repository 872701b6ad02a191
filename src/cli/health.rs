use anyhow::Result;

use crate::backend::BackendClient;
use crate::chat::render::render_status;
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let client = BackendClient::new(&config.base_url);

    println!("{}", render_status(&client.health().await, &config.port));

    Ok(())
}
