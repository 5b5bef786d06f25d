//! Download file content by server-side path, `GET /file/bot<token>/<file_path>`
//! [More info](https://core.telegram.org/bots/api#file)
use crate::api::types::*;
use crate::bot::check_status;
use crate::bot::net::RawResponse;
use crate::error::{BotError, Result};
use bytes::Bytes;

/// Content request; the body is returned as is, without an envelope
#[derive(Clone, Debug, PartialEq)]
pub struct RequestGetContent {
    pub file_path: String,
}

impl BotRequest for RequestGetContent {
    type Args = String;
    const METHOD: Endpoint = Endpoint::GetContent;
    const HTTP_METHOD: HTTPMethod = HTTPMethod::GET;
    type ResponseType = Bytes;

    fn new(file_path: String) -> Self {
        Self { file_path }
    }

    fn path_args(&self) -> Vec<&str> {
        vec![self.file_path.trim_start_matches('/')]
    }

    fn payload(&self) -> Result<Payload> {
        if self.file_path.trim_start_matches('/').is_empty() {
            return Err(BotError::Validation("File path is empty".to_string()));
        }
        Ok(Payload::Empty)
    }

    /// 2xx body is the content; anything else is `BotError::HttpStatus`
    fn decode(response: RawResponse) -> Result<ApiResponse<Bytes>> {
        let response = check_status(response)?;
        Ok(ApiResponse {
            result: response.body.clone(),
            response,
        })
    }
}
