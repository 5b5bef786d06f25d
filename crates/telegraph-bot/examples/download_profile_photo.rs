use telegraph_bot::error::{BotError, Result};
use telegraph_bot::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const TELEGRAPH_BOT_USER_ID: &str = "TELEGRAPH_BOT_USER_ID";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().map_err(|e| BotError::Config(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let bot = Bot::from_env()?;
    let user_id = std::env::var(TELEGRAPH_BOT_USER_ID)?
        .parse::<i64>()
        .map_err(|e| BotError::Config(e.to_string()))?;
    // Only the latest photo is needed
    let result = bot
        .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(user_id)))
        .offset(0)
        .limit(1)
        .download()
        .await;
    match result {
        Ok(content) => {
            let target = std::env::temp_dir().join(format!("profile_{user_id}.jpg"));
            tokio::fs::write(&target, &content.result).await?;
            info!("Saved {} bytes to {}", content.result.len(), target.display());
        }
        Err(BotError::NotFound(reason)) => warn!("Nothing to download: {}", reason),
        Err(e) => return Err(e),
    }
    Ok(())
}
