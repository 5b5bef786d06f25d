//! Receive incoming updates using long polling, method `getUpdates`
//! [More info](https://core.telegram.org/bots/api#getupdates)
use crate::api::types::*;
bot_api_method! {
    method = GetUpdates,
    request = RequestGetUpdates {
        required {},
        optional {
            /// Identifier of the first update to be returned
            offset: i64,
            /// 1..=100, defaults to 100
            limit: i32,
            /// Long polling timeout in seconds
            timeout: i32,
            allowed_updates: Vec<String>,
        }
    },
    response = Vec<Update>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_get_updates_serialize() {
        let req = RequestGetUpdates::new(())
            .with_offset(10)
            .with_allowed_updates(vec!["message".to_string()]);
        let val = serde_json::to_value(&req).unwrap();
        assert_eq!(val, json!({"offset": 10, "allowed_updates": ["message"]}));
    }
}
