//! Send voice messages method `sendVoice`
//! [More info](https://core.telegram.org/bots/api#sendvoice)
use crate::prelude::*;
bot_api_method! {
    method = SendVoice,
    request = RequestSendVoice {
        required {
            chat_id: ChatId,
            voice: InputFile,
        },
        optional {
            caption: String,
            parse_mode: ParseMode,
            duration: i64,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl MessageTextSetters for RequestSendVoice {
    /// Set caption and parse_mode
    fn set_text(self, parser: MessageTextParser) -> Result<Self> {
        let (caption, parse_mode) = parser.parse()?;
        Ok(self.with_caption(caption).with_parse_mode(parse_mode))
    }
}

impl ReplyMarkupSetters for RequestSendVoice {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
