//! Minimal chat walkthrough against the real OpenAI API.
//!
//! ```bash
//! export OPENAI_API_KEY=your_api_key_here
//! cargo run --example basic_chat
//! ```

use llm_adapter::{Error, Message, ModelProvider, ProviderFactory};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let provider = ProviderFactory::from_env()?;

    let check = provider.validate_credential().await;
    if !check.is_success() {
        println!(
            "Credential rejected: {}",
            check.error_message().unwrap_or_default()
        );
        return Ok(());
    }

    let conversation = vec![
        Message::system("You are a helpful assistant that responds concisely."),
        Message::user("What is the capital of France?"),
    ];

    let result = provider
        .chat_completion(&conversation, "gpt-3.5-turbo")
        .await;

    match result.into_payload() {
        Ok(payload) => {
            let answer = payload["choices"][0]["message"]["content"]
                .as_str()
                .unwrap_or("<no content>");
            println!("Assistant: {answer}");
        }
        Err(message) => println!("Request failed: {message}"),
    }

    Ok(())
}
