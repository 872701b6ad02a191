use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::BackendClient;
use crate::chat::render::{render_query_error, render_status, render_turn};
use crate::chat::session::Session;
use crate::core::AppConfig;

const HELP: &str = "\
Compass is a knowledge assistant backed by an external retrieval
service. Type a question at the prompt and the backend will answer it
using the documents it has indexed, with the retrieved excerpts shown
under \"View Sources\".

Commands:
  /clear    Clear the chat history
  /status   Re-check the connection to the backend
  /help     Show this message
  /quit     End the session (Ctrl-C and Ctrl-D also work)

Troubleshooting:
  1. Check that the backend server is running: npm start
  2. Set PORT if the backend is not on the default port 5050
  3. Check the backend logs for detailed error information
";

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    let mut session = Session::new(BackendClient::new(&config.base_url));

    println!("Compass");
    println!("Ask a question about the knowledge base. Type /help for commands.\n");
    println!("{}\n", render_status(&session.health().await, &config.port));

    let mut rl = DefaultEditor::new().expect("Editor failed");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    "/quit" => break,
                    "/clear" => {
                        session.clear();
                        println!("Chat history cleared.\n");
                    }
                    "/status" => {
                        println!("{}\n", render_status(&session.health().await, &config.port));
                    }
                    "/help" => {
                        println!("{}", HELP);
                    }
                    question => {
                        println!("Thinking...");
                        let exchange = session.submit(question).await;
                        if let Some(error) = &exchange.error {
                            eprintln!("{}", render_query_error(error));
                        }
                        println!("{}\n", render_turn(&exchange.turn));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
