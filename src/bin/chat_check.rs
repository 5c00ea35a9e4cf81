use anyhow::Context;
use clap::Parser;
use prime_check::utils::logger;
use prime_check::{ChatCliConfig, ChatClient, ChatConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ChatCliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let loaded = match &cli.env_file {
        Some(path) => ChatConfig::from_env_file(path),
        None => {
            // a missing ./.env is fine; the key may come from the environment
            dotenv::dotenv().ok();
            ChatConfig::from_env()
        }
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };
    tracing::debug!("Chat config: {:?}", config);

    println!("Connecting to {}...", config.base_url);
    let client = ChatClient::new(config);
    let reply = client
        .check_connection()
        .await
        .context("chat API connection check failed")?;

    println!("✅ Connection successful!");
    println!("Response: {}", reply);
    println!("\nChat client is ready to use!");
    Ok(())
}
