//! Send rounded square video messages method `sendVideoNote`
//! [More info](https://core.telegram.org/bots/api#sendvideonote)
use crate::prelude::*;
bot_api_method! {
    method = SendVideoNote,
    request = RequestSendVideoNote {
        required {
            chat_id: ChatId,
            video_note: InputFile,
        },
        optional {
            duration: i64,
            length: i32,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl ReplyMarkupSetters for RequestSendVideoNote {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
