#![allow(unused_parens)]
//! Specify a url to receive incoming updates, method `setWebhook`
//! [More info](https://core.telegram.org/bots/api#setwebhook)
use crate::api::types::*;
bot_api_method! {
    method = SetWebhook,
    request = RequestSetWebhook {
        required {
            url: String,
        },
        optional {
            /// Public key certificate, uploaded
            certificate: InputFile,
            max_connections: i32,
            allowed_updates: Vec<String>,
        }
    },
    response = bool,
}
