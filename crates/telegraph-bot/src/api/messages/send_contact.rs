//! Send phone contacts method `sendContact`
//! [More info](https://core.telegram.org/bots/api#sendcontact)
use crate::prelude::*;
bot_api_method! {
    method = SendContact,
    request = RequestSendContact {
        required {
            chat_id: ChatId,
            phone_number: String,
            first_name: String,
        },
        optional {
            last_name: String,
            disable_notification: bool,
            reply_to_message_id: MessageId,
            reply_markup: ReplyMarkup,
        }
    },
    response = Message,
}

impl ReplyMarkupSetters for RequestSendContact {
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self {
        self.with_reply_markup(markup)
    }
}
