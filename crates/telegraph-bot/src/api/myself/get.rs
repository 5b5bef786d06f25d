//! Get basic information about the bot method `getMe`
//! [More info](https://core.telegram.org/bots/api#getme)
use crate::api::types::*;
bot_api_method! {
    method = GetMe,
    http_method = HTTPMethod::GET,
    request = RequestGetMe {
        required {},
        optional {}
    },
    response = User,
}
