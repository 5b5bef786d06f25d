//! Send general files method `sendDocument`
//! [More info](https://core.telegram.org/bots/api#senddocument)
use crate::prelude::*;
bot_api_method! {
    method = SendDocument,
    request = RequestSendDocument {
        required {
            chat_id: ChatId,
            document: InputFile,
        },
        optional {
            caption: String,
            parse_mode: ParseMode,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl MessageTextSetters for RequestSendDocument {
    /// Set caption and parse_mode
    fn set_text(self, parser: MessageTextParser) -> Result<Self> {
        let (caption, parse_mode) = parser.parse()?;
        Ok(self.with_caption(caption).with_parse_mode(parse_mode))
    }
}

impl ReplyMarkupSetters for RequestSendDocument {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
