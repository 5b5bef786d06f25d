//! Commonly used imports and re-exports.
pub use crate::api::chats::send_action::*;
pub use crate::api::endpoint::format_endpoint;
pub use crate::api::files::get_content::*;
pub use crate::api::files::get_file::*;
pub use crate::api::messages::*;
pub use crate::api::myself::get::*;
pub use crate::api::types::*;
pub use crate::api::updates::delete_webhook::*;
pub use crate::api::updates::get::*;
pub use crate::api::updates::get_webhook_info::*;
pub use crate::api::updates::set_webhook::*;
pub use crate::api::users::get_profile_photos::*;
pub use crate::api::utils::*;
pub use crate::bot::net::{ConnectionPool, HttpRequest, RawResponse, RequestBody, Transport};
pub use crate::bot::*;
pub use crate::bot_api_method;
pub use crate::error::*;
