//! Network module
use crate::api::types::{HTTPMethod, InputFile, Payload};
use crate::config::CONFIG;
use crate::error::{BotError, Result, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use reqwest::{
    Body, Client, ClientBuilder, Url,
    multipart::{Form, Part},
};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{debug, trace, warn};

/// One field of a `multipart/form-data` body
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// Content of a form field
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File { filename: String, content: Bytes },
    /// Local file, streamed when the request is sent
    Path(PathBuf),
}

/// Request body handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Bytes),
    Multipart(Vec<FormPart>),
}

/// Transport-ready request description
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Status, headers and body exactly as the server sent them
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Send one HTTP request and return the response, whatever its status
///
/// Implementations must not interpret the status or the body.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> std::result::Result<RawResponse, TransportError>;
}

/// Connection pool for managing HTTP connections
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    client: Client,
}

impl Default for ConnectionPool {
    fn default() -> Self {
        Self::optimized()
    }
}

impl ConnectionPool {
    /// Create a new connection pool around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a connection pool with the settings from [`CONFIG`]
    pub fn optimized() -> Self {
        let client = build_optimized_client().unwrap_or_else(|e| {
            warn!(
                "Failed to build optimized client. Use default instead: {}",
                e
            );
            Client::new()
        });
        Self { client }
    }
}

#[async_trait]
impl Transport for ConnectionPool {
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    async fn execute(&self, request: HttpRequest) -> std::result::Result<RawResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let builder = self.client.request(method, url).headers(headers);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(json) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(json),
            RequestBody::Multipart(parts) => builder.multipart(parts_to_form(parts).await?),
        };

        let response = builder.send().await?;
        let status = response.status();
        trace!("Response status: {}", status);
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        trace!("Response body size: {} bytes", body.len());

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build a client with optimized settings for the API
fn build_optimized_client() -> std::result::Result<Client, TransportError> {
    let cfg = &CONFIG.network;
    let builder = ClientBuilder::new()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(cfg.pool_idle_timeout_secs))
        .tcp_nodelay(true)
        .pool_max_idle_per_host(cfg.max_idle_connections)
        .use_rustls_tls();

    Ok(builder.build()?)
}

/// Encode request parameters for the given HTTP method
///
/// - GET: URL query string
/// - POST with an upload among `files`: multipart form
/// - POST otherwise: JSON body
///
/// ## Errors
/// - `BotError::UrlParams` - query serialization error
/// - `BotError::Serialization` - JSON serialization error
/// - `BotError::Validation` - request does not serialize to an object
pub fn encode_payload<T: Serialize>(
    request: &T,
    http_method: HTTPMethod,
    files: Vec<(&'static str, &InputFile)>,
) -> Result<Payload> {
    if http_method == HTTPMethod::GET {
        let query = serde_url_params::to_string(request)?;
        trace!("Query string length: {} bytes", query.len());
        return Ok(if query.is_empty() {
            Payload::Empty
        } else {
            Payload::Query(query)
        });
    }

    let uploads: Vec<_> = files.into_iter().filter(|(_, f)| f.needs_upload()).collect();
    if uploads.is_empty() {
        let json = serde_json::to_vec(request)?;
        trace!("JSON body size: {} bytes", json.len());
        return Ok(Payload::Json(Bytes::from(json)));
    }

    let Value::Object(fields) = serde_json::to_value(request)? else {
        return Err(BotError::Validation(
            "Multipart request must serialize to an object".to_string(),
        ));
    };
    let mut parts = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        if let Some((_, file)) = uploads.iter().find(|(field, _)| *field == name) {
            parts.push(file_part(name, file));
            continue;
        }
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        parts.push(FormPart {
            name,
            value: FormValue::Text(text),
        });
    }
    debug!("Multipart body with {} parts", parts.len());
    Ok(Payload::Multipart(parts))
}

fn file_part(name: String, file: &InputFile) -> FormPart {
    let value = match file {
        InputFile::Path(path) => FormValue::Path(path.clone()),
        InputFile::Memory { filename, content } => FormValue::File {
            filename: filename.clone(),
            content: content.clone(),
        },
        InputFile::FileId(id) => FormValue::Text(id.0.clone()),
        InputFile::Url(url) => FormValue::Text(url.clone()),
    };
    FormPart { name, value }
}

/// Convert form parts to a [`Form`], streaming local files
///
/// ## Errors
/// - `TransportError::Io` - error opening a file
#[tracing::instrument(skip(parts))]
async fn parts_to_form(parts: Vec<FormPart>) -> std::result::Result<Form, TransportError> {
    let mut form = Form::new();
    for FormPart { name, value } in parts {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File { filename, content } => {
                form.part(name, Part::bytes(content.to_vec()).file_name(filename))
            }
            FormValue::Path(path) => {
                let file_stream = make_stream(&path).await?;
                let part = Part::stream(file_stream).file_name(file_name(&path));
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Create stream from file
/// - `path` - file path
///
/// ## Errors
/// - `std::io::Error` - error opening file
#[tracing::instrument(skip(path))]
async fn make_stream(path: &Path) -> std::io::Result<Body> {
    //Open file and check if it exists
    let file = File::open(path).await?;
    //Create stream from file
    let file_stream = Body::wrap_stream(FramedRead::new(file, BytesCodec::new()));
    Ok(file_stream)
}
