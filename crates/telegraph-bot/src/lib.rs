#![forbid(unsafe_code)]
//! # Telegram Bot API client
//! This crate provides a typed client for the [Telegram Bot API].
//! Asynchronous request is based on [`reqwest`] and [`tokio`].
//! JSON Serialization and Deserialization [`serde_json`].
//! Serialization Url query is based on [`serde_url_params`].
//!
//! Every operation is a request struct with fluent `with_*` setters. A request
//! is bound to a [`Bot`] with [`Bot::call`] (or a named helper) and sent with
//! [`bot::Call::commit`], which returns the decoded model together with the
//! raw response, or a classified [`error::BotError`].
//!
//! ```toml
//! [dependencies]
//! telegraph-bot = "0.1"
//! tracing = "0.1"
//! ```
//!
//! ```no_run
//! use telegraph_bot::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let bot = Bot::from_env()?;
//!     let request = RequestSendMessage::new((ChatId::from(42), "hi".to_string()))
//!         .with_disable_notification(true)
//!         .set_force_reply(None);
//!     let sent = bot.send_message(request).commit().await?;
//!     println!("message {} ({})", sent.result.message_id, sent.status());
//!     Ok(())
//! }
//! ```
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api
//! [`reqwest`]: https://docs.rs/reqwest
//! [`tokio`]: https://docs.rs/tokio
//! [`serde_json`]: https://docs.rs/serde_json
//! [`serde_url_params`]: https://docs.rs/serde_url_params

#[macro_export]
macro_rules! bot_api_method {
    (
        $(#[$req_attr:meta])*
        method = $method:ident,
        $(http_method = $http_method:expr,)?
        request = $Req:ident {
            required {
                $( $req_f:ident : $ReqT:ty ),* $(,)?
            },
            optional {
                $( $(#[$opt_attr:meta])* $opt_f:ident : $OptT:ty ),* $(,)?
            }
        },
        response = $Res:ty,
    ) => {
        use serde::Serialize;
        use telegraph_bot_macros::InputFiles;
        #[derive(Serialize, Clone, Debug, InputFiles)]
        #[non_exhaustive]
        $(#[$req_attr])*
        pub struct $Req {
            $( pub $req_f : $ReqT, )*
            $( $(#[$opt_attr])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $opt_f : Option<$OptT>, )*
        }

        impl $crate::api::types::BotRequest for $Req {
            type Args = ($($ReqT),*);
            const METHOD: $crate::api::types::Endpoint = $crate::api::types::Endpoint::$method;
            $(const HTTP_METHOD: $crate::api::types::HTTPMethod = $http_method;)?
            type ResponseType = $Res;

            fn new(($($req_f),*): ($($ReqT),*)) -> Self {
                Self {
                    $( $req_f, )*
                    $( $opt_f: None, )*
                }
            }

            fn payload(&self) -> $crate::error::Result<$crate::api::types::Payload> {
                $crate::bot::net::encode_payload(self, Self::HTTP_METHOD, self._input_files())
            }

            fn decode(
                response: $crate::bot::net::RawResponse,
            ) -> $crate::error::Result<$crate::api::types::ApiResponse<$Res>> {
                $crate::bot::decode_envelope(response)
            }
        }

        impl $Req {
            paste::paste! {
                $(
                    #[doc = concat!("Sets the field `", stringify!($opt_f), "`")]
                    pub fn [<with_ $opt_f>](mut self, value: $OptT) -> Self {
                        self.$opt_f = Some(value);
                        self
                    }
                )*
            }
        }
    };
}

pub mod bot;
pub mod config;
pub mod error;
pub mod prelude;
/// API methods
mod api {
    pub mod endpoint;
    pub mod types;
    pub mod utils;
    /// Chat status methods
    pub mod chats {
        pub mod send_action;
    }
    /// File metadata and content methods
    pub mod files {
        pub mod get_content;
        pub mod get_file;
    }
    /// Outgoing message methods
    pub mod messages;
    /// Bot self-info methods
    pub mod myself {
        pub mod get;
    }
    /// Update delivery methods
    pub mod updates {
        pub mod delete_webhook;
        pub mod get;
        pub mod get_webhook_info;
        pub mod set_webhook;
    }
    /// User info methods
    pub mod users {
        pub mod get_profile_photos;
    }
}

pub use self::bot::Bot;
