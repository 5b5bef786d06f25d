//! Send text messages method `sendMessage`
//! [More info](https://core.telegram.org/bots/api#sendmessage)
use crate::prelude::*;
bot_api_method! {
    method = SendMessage,
    request = RequestSendMessage {
        required {
            chat_id: ChatId,
            text: String,
        },
        optional {
            parse_mode: ParseMode,
            disable_web_page_preview: bool,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl MessageTextSetters for RequestSendMessage {
    /// Set text and parse_mode
    /// ## Parameters
    /// - `parser`: [`MessageTextParser`]
    fn set_text(mut self, parser: MessageTextParser) -> Result<Self> {
        let (text, parse_mode) = parser.parse()?;
        self.text = text;
        Ok(self.with_parse_mode(parse_mode))
    }
}

impl ReplyMarkupSetters for RequestSendMessage {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
