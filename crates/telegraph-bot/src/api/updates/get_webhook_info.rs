//! Get current webhook status method `getWebhookInfo`
//! [More info](https://core.telegram.org/bots/api#getwebhookinfo)
use crate::api::types::*;
bot_api_method! {
    method = GetWebhookInfo,
    http_method = HTTPMethod::GET,
    request = RequestGetWebhookInfo {
        required {},
        optional {}
    },
    response = WebhookInfo,
}
