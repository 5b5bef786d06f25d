//! Send audio files to be displayed in the music player, method `sendAudio`
//! [More info](https://core.telegram.org/bots/api#sendaudio)
use crate::prelude::*;
bot_api_method! {
    method = SendAudio,
    request = RequestSendAudio {
        required {
            chat_id: ChatId,
            audio: InputFile,
        },
        optional {
            caption: String,
            parse_mode: ParseMode,
            duration: i64,
            performer: String,
            title: String,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl MessageTextSetters for RequestSendAudio {
    /// Set caption and parse_mode
    fn set_text(self, parser: MessageTextParser) -> Result<Self> {
        let (caption, parse_mode) = parser.parse()?;
        Ok(self.with_caption(caption).with_parse_mode(parse_mode))
    }
}

impl ReplyMarkupSetters for RequestSendAudio {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
