//! Send information about a venue method `sendVenue`
//! [More info](https://core.telegram.org/bots/api#sendvenue)
use crate::prelude::*;
bot_api_method! {
    method = SendVenue,
    request = RequestSendVenue {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
            title: String,
            address: String,
        },
        optional {
            foursquare_id: String,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl ReplyMarkupSetters for RequestSendVenue {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
