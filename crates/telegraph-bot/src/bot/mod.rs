pub mod net;

use crate::config::CONFIG;
use crate::error::{BotError, Result};
use crate::prelude::*;
use http::header::USER_AGENT;
use http::{HeaderMap, HeaderValue};
use net::*;
use reqwest::Url;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
/// Bot class with attributes
/// - `token`: [`str`] - Bot API token, never logged
/// - `base_api_url`: [`reqwest::Url`] - Base API URL
/// - `user_agent`: [`str`] - `User-Agent` header sent with every request
/// - `transport`: [`Transport`] - shared HTTP transport, [`ConnectionPool`] by default
///
/// Immutable after construction; clones share the transport.
///
/// [`reqwest::Url`]: https://docs.rs/reqwest/latest/reqwest/struct.Url.html
pub struct Bot {
    pub(crate) token: Arc<str>,
    pub(crate) base_api_url: Url,
    pub(crate) user_agent: Arc<str>,
    pub(crate) transport: Arc<dyn Transport>,
}

impl Bot {
    /// Creates a new `Bot` against the base URL from [`CONFIG`]
    ///
    /// ## Errors
    /// - `BotError::Config` - empty token
    /// - `BotError::Url` - URL parsing error
    pub fn new(token: &str) -> Result<Self> {
        Self::with_params(token, &CONFIG.api.base_url)
    }

    /// Creates a new `Bot` with direct parameters instead of environment variables
    ///
    /// ## Parameters
    /// - `token`: [`str`] - Bot API token
    /// - `api_url`: [`str`] - Base API URL
    ///
    /// ## Errors
    /// - `BotError::Config` - empty token
    /// - `BotError::Url` - URL parsing error
    ///
    /// ## Example
    /// ```no_run
    /// use telegraph_bot::prelude::*;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<()> {
    ///     let bot = Bot::with_params("123456:ABC-DEF", "https://api.telegram.org")?;
    ///     let me = bot.get_me().commit().await?;
    ///     println!("{}", me.result.first_name);
    ///     Ok(())
    /// }
    /// ```
    pub fn with_params(token: &str, api_url: &str) -> Result<Self> {
        Self::with_transport(token, api_url, Arc::new(ConnectionPool::optimized()))
    }

    /// Creates a new `Bot` with a custom transport
    ///
    /// Useful for testing or specific connection requirements
    ///
    /// ## Errors
    /// - `BotError::Config` - empty token
    /// - `BotError::Url` - URL parsing error
    pub fn with_transport(
        token: &str,
        api_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        if token.is_empty() {
            return Err(BotError::Config("Bot token is empty".to_string()));
        }
        let base_api_url = Url::parse(api_url)?;
        debug!("API URL successfully parsed");

        Ok(Self {
            token: Arc::<str>::from(token),
            base_api_url,
            user_agent: Arc::<str>::from(user_agent()),
            transport,
        })
    }

    /// Creates a new `Bot` from the environment
    ///
    /// Get token from variable `TELEGRAPH_BOT_API_TOKEN`
    ///
    /// Get base url from variable `TELEGRAPH_BOT_API_URL`, falling back to [`CONFIG`]
    ///
    /// ## Errors
    /// - `BotError::Config` - token variable missing or empty
    /// - `BotError::Url` - URL parsing error
    pub fn from_env() -> Result<Self> {
        let token = get_env_token()?;
        debug!("Token successfully obtained from environment");
        match get_env_url() {
            Some(url) => Self::with_params(&token, &url),
            None => Self::new(&token),
        }
    }

    pub fn base_api_url(&self) -> &Url {
        &self.base_api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build the absolute URL of an endpoint
    /// - `endpoint`: [`Endpoint`] - operation
    /// - `args`: positional path values after the token
    /// - `query`: optional encoded query string
    ///
    /// ## Errors
    /// - `BotError::Url` - URL parsing error
    pub fn get_parsed_url(
        &self,
        endpoint: Endpoint,
        args: &[&str],
        query: Option<&str>,
    ) -> Result<Url> {
        let base = self.base_api_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", endpoint.path(&self.token, args)))?;
        if let Some(query) = query {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Wrap a request into a [`Call`] bound to this bot
    pub fn call<Rq: BotRequest>(&self, request: Rq) -> Call<'_, Rq> {
        Call::new(self, request)
    }

    /// Encode the request and send it, returning the raw response
    ///
    /// Nothing is decoded here; the status is not checked.
    ///
    /// ## Errors
    /// - `BotError::UrlParams` - URL parameters serialization error
    /// - `BotError::Serialization` - JSON serialization error
    /// - `BotError::Io` - upload file is missing or unreadable
    /// - `BotError::Url` - URL parsing error
    /// - `BotError::Transport` - no response was received
    #[tracing::instrument(skip(self, request))]
    pub async fn dispatch<Rq: BotRequest>(&self, request: &Rq) -> Result<RawResponse> {
        debug!(endpoint = %Rq::METHOD, "Encoding request");
        let (query, body) = match request.payload()? {
            Payload::Empty => (None, RequestBody::Empty),
            Payload::Query(query) => (Some(query), RequestBody::Empty),
            Payload::Json(json) => (None, RequestBody::Json(json)),
            Payload::Multipart(parts) => {
                check_uploads(&parts).await?;
                (None, RequestBody::Multipart(parts))
            }
        };
        let url = self.get_parsed_url(Rq::METHOD, &request.path_args(), query.as_deref())?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|e| BotError::Config(e.to_string()))?,
        );

        debug!(endpoint = %Rq::METHOD, "Sending {:?} request", Rq::HTTP_METHOD);
        let response = self
            .transport
            .execute(HttpRequest {
                method: Rq::HTTP_METHOD.as_http(),
                url,
                headers,
                body,
            })
            .await?;
        trace!(endpoint = %Rq::METHOD, "Response status: {}", response.status);
        Ok(response)
    }

    /// Bot info request
    pub fn get_me(&self) -> Call<'_, RequestGetMe> {
        self.call(RequestGetMe::new(()))
    }

    /// Content download by server-side file path
    pub fn get_content(&self, file_path: &str) -> Call<'_, RequestGetContent> {
        self.call(RequestGetContent::new(file_path.to_string()))
    }
}

macro_rules! call_helpers {
    ($( $(#[$attr:meta])* $name:ident => $Req:ty ),* $(,)?) => {
        impl Bot {
            $(
                $(#[$attr])*
                pub fn $name(&self, request: $Req) -> Call<'_, $Req> {
                    self.call(request)
                }
            )*
        }
    };
}

call_helpers! {
    /// `getUpdates`
    get_updates => RequestGetUpdates,
    /// `setWebhook`
    set_webhook => RequestSetWebhook,
    /// `deleteWebhook`
    delete_webhook => RequestDeleteWebhook,
    /// `getWebhookInfo`
    get_webhook_info => RequestGetWebhookInfo,
    /// `sendMessage`
    send_message => RequestSendMessage,
    /// `forwardMessage`
    forward_message => RequestForwardMessage,
    /// `sendPhoto`
    send_photo => RequestSendPhoto,
    /// `sendAudio`
    send_audio => RequestSendAudio,
    /// `sendDocument`
    send_document => RequestSendDocument,
    /// `sendVideo`
    send_video => RequestSendVideo,
    /// `sendVoice`
    send_voice => RequestSendVoice,
    /// `sendVideoNote`
    send_video_note => RequestSendVideoNote,
    /// `sendLocation`
    send_location => RequestSendLocation,
    /// `editMessageLiveLocation`
    edit_live_location => RequestEditMessageLiveLocation,
    /// `stopMessageLiveLocation`
    stop_live_location => RequestStopMessageLiveLocation,
    /// `sendVenue`
    send_venue => RequestSendVenue,
    /// `sendContact`
    send_contact => RequestSendContact,
    /// `sendChatAction`
    send_chat_action => RequestSendChatAction,
    /// `getFile`; chain `download()` to fetch the content
    get_file => RequestGetFile,
    /// `getUserProfilePhotos`; chain `download()` to fetch the best photo
    get_user_profile_photos => RequestGetUserProfilePhotos,
}

/// One pending API call: a request bound to a [`Bot`]
///
/// Consumed by [`Call::commit`]; a committed call cannot be committed again.
/// Clone the request to send it twice.
#[must_use = "a call does nothing until committed"]
#[derive(Debug)]
pub struct Call<'a, Rq> {
    bot: &'a Bot,
    request: Rq,
}

impl<'a, Rq: BotRequest> Call<'a, Rq> {
    pub fn new(bot: &'a Bot, request: Rq) -> Self {
        Self { bot, request }
    }

    /// Apply request setters without leaving the call chain
    ///
    /// ```no_run
    /// # use telegraph_bot::prelude::*;
    /// # async fn run(bot: &Bot) -> Result<()> {
    /// bot.send_message(RequestSendMessage::new((ChatId::from(42), "hi".to_string())))
    ///     .with(|rq| rq.with_disable_notification(true))
    ///     .commit()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with(self, f: impl FnOnce(Rq) -> Rq) -> Self {
        Self {
            bot: self.bot,
            request: f(self.request),
        }
    }

    pub fn bot(&self) -> &'a Bot {
        self.bot
    }

    pub fn request(&self) -> &Rq {
        &self.request
    }

    pub fn into_request(self) -> Rq {
        self.request
    }

    /// Send the request and decode the response
    ///
    /// ## Errors
    /// - `BotError::Transport` - no response was received
    /// - `BotError::HttpStatus` - status is not 2xx
    /// - `BotError::Decode` - body does not match the expected envelope
    /// - `BotError::Api` - envelope reports `ok=false`
    /// - request-side errors of [`Bot::dispatch`]
    pub async fn commit(self) -> Result<ApiResponse<Rq::ResponseType>> {
        let response = self.bot.dispatch(&self.request).await?;
        Rq::decode(response)
    }
}

/// Decode a response into `Envelope<T>` and classify failures
///
/// ## Errors
/// - `BotError::HttpStatus` - status is not 2xx, whatever the body
/// - `BotError::Decode` - body is not a valid envelope, or `ok=true` without result
/// - `BotError::Api` - `ok=false`
pub fn decode_envelope<T: DeserializeOwned>(response: RawResponse) -> Result<ApiResponse<T>> {
    let response = check_status(response)?;
    let envelope = match serde_json::from_slice::<Envelope<T>>(&response.body) {
        Ok(envelope) => envelope,
        Err(source) => {
            debug!("Response body does not match the envelope: {}", source);
            return Err(BotError::Decode { source, response });
        }
    };
    match envelope.into_result() {
        Ok(Some(result)) => Ok(ApiResponse { result, response }),
        Ok(None) => Err(BotError::Decode {
            source: <serde_json::Error as serde::de::Error>::missing_field("result"),
            response,
        }),
        Err(error) => {
            debug!("API error: {}", error);
            Err(BotError::Api { error, response })
        }
    }
}

/// Pass 2xx responses through, turn anything else into `BotError::HttpStatus`
///
/// The envelope error is attached when the body still decodes.
pub fn check_status(response: RawResponse) -> Result<RawResponse> {
    if response.status.is_success() {
        return Ok(response);
    }
    debug!("Unsuccessful status: {}", response.status);
    let api = serde_json::from_slice::<Envelope<IgnoredAny>>(&response.body)
        .ok()
        .filter(|envelope| !envelope.ok)
        .map(Envelope::into_api_error);
    Err(BotError::HttpStatus {
        status: response.status,
        api,
        response,
    })
}

/// Local uploads must exist before anything goes on the wire
async fn check_uploads(parts: &[FormPart]) -> Result<()> {
    for part in parts {
        if let FormValue::Path(path) = &part.value {
            let meta = tokio::fs::metadata(path).await?;
            if !meta.is_file() {
                return Err(BotError::Validation(format!(
                    "Upload `{}` is not a regular file",
                    part.name
                )));
            }
        }
    }
    Ok(())
}

fn get_env_token() -> Result<String> {
    let token = std::env::var(TELEGRAPH_BOT_API_TOKEN)?;
    if token.is_empty() {
        return Err(BotError::Config(format!("{TELEGRAPH_BOT_API_TOKEN} is empty")));
    }
    Ok(token)
}

fn get_env_url() -> Option<String> {
    std::env::var(TELEGRAPH_BOT_API_URL)
        .ok()
        .filter(|url| !url.is_empty())
}
