use telegraph_bot::error::{BotError, Result};
use telegraph_bot::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TELEGRAPH_BOT_CHAT_ID: &str = "TELEGRAPH_BOT_CHAT_ID";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().map_err(|e| BotError::Config(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let bot = Bot::from_env()?;
    let chat_id = ChatId::from(std::env::var(TELEGRAPH_BOT_CHAT_ID)?);
    // Build formatted text
    let parser = MessageTextParser::new(ParseMode::HTML)
        .add(MessageTextFormat::Bold("Question".to_string()))
        .next_line()
        .add(MessageTextFormat::Plain("What is your name?".to_string()));
    let request = RequestSendMessage::new((chat_id.clone(), String::new()))
        .set_text(parser)?
        .with_disable_notification(true)
        .set_force_reply(None);
    info!("Sending message...");
    let sent = bot.send_message(request).commit().await?;
    info!("Message {} sent ({})", sent.result.message_id, sent.status());

    bot.send_chat_action(RequestSendChatAction::new((chat_id, ChatAction::Typing)))
        .commit()
        .await?;
    Ok(())
}
