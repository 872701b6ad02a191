use anyhow::{Result, bail};

use crate::backend::BackendClient;
use crate::chat::render::{render_query_error, render_turn};
use crate::chat::session::Session;
use crate::core::AppConfig;

pub async fn run(question: &str) -> Result<()> {
    // The interactive session drops empty lines at the prompt; the
    // one-shot path has to enforce the same precondition itself
    let question = question.trim();
    if question.is_empty() {
        bail!("Question must not be empty");
    }

    let config = AppConfig::default();
    let mut session = Session::new(BackendClient::new(&config.base_url));

    let exchange = session.submit(question).await;
    if let Some(error) = &exchange.error {
        eprintln!("{}", render_query_error(error));
    }
    println!("{}", render_turn(&exchange.turn));

    Ok(())
}
