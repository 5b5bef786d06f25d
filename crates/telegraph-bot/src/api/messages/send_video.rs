//! Send video files method `sendVideo`
//! [More info](https://core.telegram.org/bots/api#sendvideo)
use crate::prelude::*;
bot_api_method! {
    method = SendVideo,
    request = RequestSendVideo {
        required {
            chat_id: ChatId,
            video: InputFile,
        },
        optional {
            duration: i64,
            width: i32,
            height: i32,
            caption: String,
            parse_mode: ParseMode,
            supports_streaming: bool,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl MessageTextSetters for RequestSendVideo {
    /// Set caption and parse_mode
    fn set_text(self, parser: MessageTextParser) -> Result<Self> {
        let (caption, parse_mode) = parser.parse()?;
        Ok(self.with_caption(caption).with_parse_mode(parse_mode))
    }
}

impl ReplyMarkupSetters for RequestSendVideo {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
