//! Forward messages of any kind method `forwardMessage`
//! [More info](https://core.telegram.org/bots/api#forwardmessage)
use crate::prelude::*;
bot_api_method! {
    method = ForwardMessage,
    request = RequestForwardMessage {
        required {
            chat_id: ChatId,
            from_chat_id: ChatId,
            message_id: MessageId,
        },
        optional {
            disable_notification: bool,
        }
    },
    response = Message,
}
