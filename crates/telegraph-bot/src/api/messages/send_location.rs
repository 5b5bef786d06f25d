//! Send a point on the map method `sendLocation`
//! [More info](https://core.telegram.org/bots/api#sendlocation)
use crate::prelude::*;
bot_api_method! {
    method = SendLocation,
    request = RequestSendLocation {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
        },
        optional {
            /// Seconds the location is updated for, 60..=86400
            live_period: i32,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl ReplyMarkupSetters for RequestSendLocation {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
