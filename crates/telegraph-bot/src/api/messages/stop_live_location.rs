//! Stop updating live location messages method `stopMessageLiveLocation`
//! [More info](https://core.telegram.org/bots/api#stopmessagelivelocation)
use crate::prelude::*;
bot_api_method! {
    method = StopMessageLiveLocation,
    request = RequestStopMessageLiveLocation {
        required {},
        optional {
            chat_id: ChatId,
            message_id: MessageId,
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
    },
    response = Message,
}
