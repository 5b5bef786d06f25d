//! Tell the user that something is happening on the bot's side, method `sendChatAction`
//! [More info](https://core.telegram.org/bots/api#sendchataction)
use crate::api::types::*;
bot_api_method! {
    method   = SendChatAction,
    request  = RequestSendChatAction {
        required {
            chat_id: ChatId,
            action: ChatAction,
        },
        optional {}
    },
    response = bool,
}
