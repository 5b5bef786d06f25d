//! Remove webhook integration method `deleteWebhook`
//! [More info](https://core.telegram.org/bots/api#deletewebhook)
bot_api_method! {
    method = DeleteWebhook,
    request = RequestDeleteWebhook {
        required {},
        optional {}
    },
    response = bool,
}
