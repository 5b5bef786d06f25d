//! Edit live location messages method `editMessageLiveLocation`
//! [More info](https://core.telegram.org/bots/api#editmessagelivelocation)
//!
//! Target either `chat_id` + `message_id`, or `inline_message_id`.
use crate::prelude::*;
bot_api_method! {
    method = EditMessageLiveLocation,
    request = RequestEditMessageLiveLocation {
        required {
            latitude: f64,
            longitude: f64,
        },
        optional {
            chat_id: ChatId,
            message_id: MessageId,
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
    },
    response = Message,
}
