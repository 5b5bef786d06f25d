//! API types
pub use crate::api::endpoint::Endpoint;
use crate::bot::net::{FormPart, RawResponse};
use crate::error::{ApiError, ResponseParameters, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::*;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable name for bot API URL
pub const TELEGRAPH_BOT_API_URL: &str = "TELEGRAPH_BOT_API_URL";
/// Environment variable name for bot API token
pub const TELEGRAPH_BOT_API_TOKEN: &str = "TELEGRAPH_BOT_API_TOKEN";
/// Client name sent in the `User-Agent` header
pub const CLIENT_NAME: &str = env!("CARGO_PKG_NAME");
/// Client version sent in the `User-Agent` header
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Bot API protocol version the request types follow
pub const BOT_API_VERSION: &str = "3.5";

/// `User-Agent` header value: client name, client version, protocol version
pub fn user_agent() -> String {
    format!("{CLIENT_NAME}/{CLIENT_VERSION} (Bot API {BOT_API_VERSION})")
}

/// Supported API HTTP methods
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HTTPMethod {
    GET,
    #[default]
    POST,
}

impl HTTPMethod {
    pub fn as_http(self) -> http::Method {
        match self {
            HTTPMethod::GET => http::Method::GET,
            HTTPMethod::POST => http::Method::POST,
        }
    }
}

/// Encoded request parameters, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No parameters at all
    Empty,
    /// URL query string (GET operations)
    Query(String),
    /// `application/json` body
    Json(Bytes),
    /// `multipart/form-data` body, used when a file is uploaded
    Multipart(Vec<FormPart>),
}

/// Bot request trait
pub trait BotRequest: Sized {
    type Args;

    const METHOD: Endpoint;
    const HTTP_METHOD: HTTPMethod = HTTPMethod::POST;
    type ResponseType;
    fn new(args: Self::Args) -> Self;
    /// Positional values for the endpoint template, after the token
    fn path_args(&self) -> Vec<&str> {
        Vec::new()
    }
    fn payload(&self) -> Result<Payload>;
    fn decode(response: RawResponse) -> Result<ApiResponse<Self::ResponseType>>;
}

/// Decoded model together with the raw transport response
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub result: T,
    pub response: RawResponse,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> http::StatusCode {
        self.response.status
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

/// Response envelope shared by every operation
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
    pub parameters: Option<ResponseParameters>,
}

impl<T> Envelope<T> {
    /// `Ok(result)` for `ok=true`, the envelope error otherwise
    ///
    /// `result` is `None` only when an `ok=true` envelope omitted it.
    pub fn into_result(self) -> std::result::Result<Option<T>, ApiError> {
        if self.ok {
            debug!("Answer is ok, payload received");
            return Ok(self.result);
        }
        Err(self.into_api_error())
    }

    /// Error part of the envelope, whatever `ok` says
    pub fn into_api_error(self) -> ApiError {
        let description = self.description.unwrap_or_else(|| {
            debug!("Answer is not ok, but description is not provided");
            "Unspecified error".to_string()
        });
        ApiError {
            error_code: self.error_code,
            description,
            parameters: self.parameters,
        }
    }
}

/// Chat id: numeric id or `@channelusername`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Hash, Eq)]
pub struct ChatId(pub String);
/// Message id struct
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Hash, Eq)]
pub struct MessageId(pub i64);
/// User id struct
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Hash, Eq)]
pub struct UserId(pub i64);
/// File id struct
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Hash, Eq)]
pub struct FileId(pub String);

impl std::convert::From<&str> for ChatId {
    fn from(id: &str) -> Self {
        ChatId(id.to_string())
    }
}
impl std::convert::From<String> for ChatId {
    fn from(id: String) -> Self {
        ChatId(id)
    }
}
impl std::convert::From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id.to_string())
    }
}
impl std::convert::From<&str> for FileId {
    fn from(id: &str) -> Self {
        FileId(id.to_string())
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Display for MessageId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Display for UserId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Display for FileId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File to send: reference an existing one or upload new content
#[derive(Clone, Debug, PartialEq)]
pub enum InputFile {
    /// File already stored on the server
    FileId(FileId),
    /// HTTP URL the server downloads itself
    Url(String),
    /// Local file, streamed as multipart upload
    Path(PathBuf),
    /// In-memory content, sent as multipart upload
    Memory { filename: String, content: Bytes },
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(FileId(id.into()))
    }
    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }
    pub fn path(path: impl Into<PathBuf>) -> Self {
        InputFile::Path(path.into())
    }
    pub fn memory(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        InputFile::Memory {
            filename: filename.into(),
            content: content.into(),
        }
    }
    /// Whether the content travels in the request body
    pub fn needs_upload(&self) -> bool {
        matches!(self, InputFile::Path(_) | InputFile::Memory { .. })
    }
}

/// References serialize as plain strings; uploads are replaced by a form part
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            InputFile::FileId(id) => serializer.serialize_str(&id.0),
            InputFile::Url(url) => serializer.serialize_str(url),
            InputFile::Path(path) => serializer.serialize_str(&path.to_string_lossy()),
            InputFile::Memory { filename, .. } => serializer.serialize_str(filename),
        }
    }
}

/// Message text format parse mode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[default]
    HTML,
}

/// Message text struct
#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum MessageTextFormat {
    /// Plain text
    Plain(String),
    /// Bold text
    Bold(String),
    /// Italic text
    Italic(String),
    /// Inline URL: (url, text)
    Link(String, String),
    /// Inline mention of a user: (user, visible name)
    Mention(UserId, String),
    /// Code formatted text
    Code(String),
    /// Pre-formatted fixed-width text block with optional language
    Pre(String, Option<String>),
}

/// Message text parse struct
#[derive(Default, Clone, Debug)]
pub struct MessageTextParser {
    /// Array of text formats
    pub text: Vec<MessageTextFormat>,
    /// Target rendering of [`MessageTextParser::parse`]
    pub parse_mode: ParseMode,
}

/// Chat actions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    #[default]
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

/// Chat types
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Reply behaviour attached to an outgoing message; exactly one per message
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    RemoveKeyboard(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

/// Keyboard shown right under the message
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}
/// Button of an inline keyboard; exactly one optional field must be set
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
}
/// Custom keyboard replacing the user's one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}
/// Button of a custom keyboard
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
}
/// Hide the custom keyboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}
/// Show the reply interface, as if the user tapped 'Reply'
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForceReply {
    pub force_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self {
            force_reply: true,
            selective: None,
        }
    }
}

/// User or bot
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}
/// Chat struct
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
/// Message struct
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Message {
    pub message_id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from_chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
}
/// One size of a photo or thumbnail
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhotoSize {
    pub file_id: FileId,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
/// Audio file to be treated as music
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Audio {
    pub file_id: FileId,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
/// General file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub file_id: FileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
/// Video file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Video {
    pub file_id: FileId,
    pub width: i32,
    pub height: i32,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
/// Voice note
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Voice {
    pub file_id: FileId,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
/// Rounded square video message
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VideoNote {
    pub file_id: FileId,
    pub length: i32,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
/// Phone contact
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}
/// Point on the map
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}
/// Venue struct
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}
/// File ready to be downloaded; `file_path` is set once resolved server-side
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct File {
    pub file_id: FileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
/// Profile pictures of a user: outer index = photo, inner index = size
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UserProfilePhotos {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub photos: Vec<Vec<PhotoSize>>,
}
/// Current webhook status
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WebhookInfo {
    pub url: String,
    #[serde(default)]
    pub has_custom_certificate: bool,
    #[serde(default)]
    pub pending_update_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}
/// Incoming update. At most one of the optional fields is present.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,
}
/// Incoming inline query
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub query: String,
    pub offset: String,
}
/// Inline result chosen by a user
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub query: String,
}
/// Callback from an inline keyboard button
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}
/// Incoming shipping query
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}
/// Shipping address
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShippingAddress {
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}
