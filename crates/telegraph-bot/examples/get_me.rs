use telegraph_bot::error::{BotError, Result};
use telegraph_bot::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().map_err(|e| BotError::Config(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    info!("Starting...");
    let bot = Bot::from_env()?;
    let me = bot.get_me().commit().await?;
    info!("Bot info ({}):", me.status());
    info!("  id: {}", me.result.id);
    info!("  first_name: {}", me.result.first_name);
    match me.result.username {
        Some(username) => info!("  username: @{}", username),
        None => info!("  username: <none>"),
    }
    Ok(())
}
