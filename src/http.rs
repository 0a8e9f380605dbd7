//! Transport-abstracted client for the Bot API.
//!
//! The crate has no HTTP stack of its own. Callers implement [`Transport`]
//! on top of whatever client they already use, and [`Bot`] turns every
//! [`Method`] into a future of its typed result. Encoding arguments,
//! building multipart bodies and decoding the response envelope live here.

use serde_json::{Map, Value};
use std::{
    error::Error,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    future::Future,
    io,
    sync::Arc,
};
use tracing::{debug, warn};

use crate::events::Update;
use crate::methods::{
    bot::{AnswerCallbackQuery, GetMe},
    messages::{GetFile, SendMessage},
    updates::GetUpdates,
    Method, Ret,
};
use crate::types::{
    id::ChatId,
    input::{InputFileUpload, UploadData},
    media::File,
    message::Message,
    response::{ApiError, ApiResponse},
    user::User,
    util::True,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Longest response excerpt included in decode error logs.
const LOG_EXCERPT: usize = 200;

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Sends a POST request and returns the raw response body.
///
/// Telegram answers failed calls with a non-2xx status *and* a JSON error
/// envelope. Implementations should return the body regardless of status
/// so the envelope can be decoded into an [`ApiError`].
pub trait Transport {
    type Error: Error + Send + Sync + 'static;

    fn post(
        &self,
        url: &str,
        body: RequestBody,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>>;
}

/// The body of a call.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// `application/json`, used when nothing is uploaded.
    Json(Value),
    /// `multipart/form-data`, used when the call carries uploads.
    Multipart(Form),
}

impl RequestBody {
    /// Value of the `Content-Type` header.
    pub fn content_type(&self) -> String {
        match self {
            RequestBody::Json(_) => "application/json".to_owned(),
            RequestBody::Multipart(form) => form.content_type(),
        }
    }

    /// Render the body to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            RequestBody::Json(value) => serde_json::to_vec(value),
            RequestBody::Multipart(form) => Ok(form.to_bytes()),
        }
    }

    /// Encode the arguments of a method.
    ///
    /// Files read from disk are loaded here.
    pub fn from_method<M: Method>(method: &M) -> Result<Self, RequestError> {
        let value = serde_json::to_value(method).map_err(RequestError::Encode)?;
        let uploads = method.uploads();
        if uploads.is_empty() {
            return Ok(RequestBody::Json(value));
        }

        let mut form = Form::new();
        if let Value::Object(arguments) = value {
            form.append_arguments(arguments);
        }
        for upload in uploads {
            form.append_upload(upload)?;
        }
        Ok(RequestBody::Multipart(form))
    }
}

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

/// A `multipart/form-data` body.
#[derive(Clone, PartialEq)]
pub struct Form {
    boundary: String,
    parts: Vec<Part>,
}

/// One part of a [`Form`].
#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        data: Vec<u8>,
    },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

impl Form {
    /// An empty form with a random boundary.
    pub fn new() -> Self {
        Self {
            boundary: format!("botgram{:016x}", rand::random::<u64>()),
            parts: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Look up a part by name.
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name() == name)
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        self.parts.push(Part::File {
            name: name.into(),
            file_name: file_name.into(),
            data: data.into(),
        });
        self
    }

    /// Add the method arguments as text parts.
    ///
    /// Strings are sent as-is, everything else JSON-encoded.
    fn append_arguments(&mut self, arguments: Map<String, Value>) {
        for (name, value) in arguments {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.parts.push(Part::Text { name, value });
        }
    }

    fn append_upload(&mut self, upload: &InputFileUpload) -> Result<(), RequestError> {
        let data = match &upload.data {
            UploadData::Bytes(bytes) => bytes.clone(),
            UploadData::Path(path) => std::fs::read(path).map_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to read upload");
                RequestError::Io(e)
            })?,
        };
        self.parts.push(Part::File {
            name: upload.name().to_owned(),
            file_name: upload.file_name.clone(),
            data,
        });
        Ok(())
    }

    /// Render the form as raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf: Vec<u8> = Vec::new();

        for part in &self.parts {
            buf.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            match part {
                Part::Text { name, value } => {
                    buf.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                            escape_quoted(name)
                        )
                        .as_bytes(),
                    );
                    buf.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    data,
                } => {
                    buf.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; \
                             filename=\"{}\"\r\n",
                            escape_quoted(name),
                            escape_quoted(file_name)
                        )
                        .as_bytes(),
                    );
                    buf.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                    buf.extend_from_slice(data);
                }
            }
            buf.extend_from_slice(b"\r\n");
        }

        // Closing boundary.
        buf.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        buf
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Form {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let names: Vec<_> = self.parts.iter().map(Part::name).collect();
        f.debug_struct("Form")
            .field("boundary", &self.boundary)
            .field("parts", &names)
            .finish()
    }
}

fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum RequestError {
    /// Telegram answered with `ok: false`.
    Api(ApiError),
    /// The transport failed to deliver the request or read the response.
    Transport(Box<dyn Error + Send + Sync>),
    /// The response was not a valid envelope for the expected result.
    Decode(serde_json::Error),
    /// The arguments could not be serialised.
    Encode(serde_json::Error),
    /// An upload could not be read from disk.
    Io(io::Error),
}

impl RequestError {
    /// The error Telegram reported, if the call got that far.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            RequestError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RequestError::Api(e) => Display::fmt(e, f),
            RequestError::Transport(e) => write!(f, "transport error: {e}"),
            RequestError::Decode(e) => write!(f, "failed to decode response: {e}"),
            RequestError::Encode(e) => write!(f, "failed to encode arguments: {e}"),
            RequestError::Io(e) => write!(f, "failed to read upload: {e}"),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RequestError::Api(e) => Some(e),
            RequestError::Transport(e) => Some(e.as_ref()),
            RequestError::Decode(e) | RequestError::Encode(e) => Some(e),
            RequestError::Io(e) => Some(e),
        }
    }
}

impl From<ApiError> for RequestError {
    fn from(e: ApiError) -> Self {
        RequestError::Api(e)
    }
}

impl From<io::Error> for RequestError {
    fn from(e: io::Error) -> Self {
        RequestError::Io(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `TELEGRAM_BOT_TOKEN` is unset or empty.
    MissingToken,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigError::MissingToken => {
                f.write_str("TELEGRAM_BOT_TOKEN environment variable not set")
            }
        }
    }
}

impl Error for ConfigError {}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Where and as whom to call the Bot API.
#[derive(Clone, Eq, PartialEq)]
pub struct BotConfig {
    token: String,
    api_url: String,
}

impl BotConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }

    /// Use a local Bot API server instead of the cloud one.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Read `TELEGRAM_BOT_TOKEN` and the optional `TELEGRAM_API_URL`,
    /// after loading a `.env` file if there is one.
    #[cfg(feature = "io")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let config = Self::new(token);
        Ok(match std::env::var("TELEGRAM_API_URL") {
            Ok(url) if !url.is_empty() => config.with_api_url(url),
            _ => config,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Debug for BotConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Bot
// ---------------------------------------------------------------------------

/// A Bot API client over a caller-provided [`Transport`].
///
/// Cheap to clone when the transport is (the config is behind `Arc`).
#[derive(Clone)]
pub struct Bot<T> {
    transport: T,
    config: Arc<BotConfig>,
}

impl<T: Transport> Bot<T> {
    pub fn new(transport: T, config: BotConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn with_token(transport: T, token: impl Into<String>) -> Self {
        Self::new(transport, BotConfig::new(token))
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn method_url(&self, name: &str) -> String {
        format!("{}/bot{}/{}", self.config.api_url, self.config.token, name)
    }

    /// Download link for a [`File`] returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.config.api_url,
            self.config.token,
            file_path.trim_start_matches('/')
        )
    }

    // ------------------------------------------------------------------
    // Low-level: the single call everything funnels through
    // ------------------------------------------------------------------

    /// Call a method and decode its result.
    pub async fn execute<M: Method>(&self, method: &M) -> Result<Ret<M>, RequestError> {
        let body = RequestBody::from_method(method)?;
        debug!(
            method = M::NAME,
            multipart = matches!(body, RequestBody::Multipart(_)),
            "calling bot api"
        );

        let bytes = self
            .transport
            .post(&self.method_url(M::NAME), body)
            .await
            .map_err(|e| {
                warn!(method = M::NAME, error = %e, "transport failed");
                RequestError::Transport(Box::new(e))
            })?;

        let response: ApiResponse<Ret<M>> = serde_json::from_slice(&bytes).map_err(|e| {
            let raw = String::from_utf8_lossy(&bytes);
            let excerpt: String = raw.chars().take(LOG_EXCERPT).collect();
            warn!(method = M::NAME, error = %e, body = %excerpt, "failed to decode response");
            RequestError::Decode(e)
        })?;

        response.into_result().map_err(|e| {
            warn!(
                method = M::NAME,
                code = e.error_code,
                description = %e.description,
                retry_after = ?e.retry_after(),
                "telegram returned an error"
            );
            RequestError::Api(e)
        })
    }

    // ------------------------------------------------------------------
    // Convenience
    // ------------------------------------------------------------------

    pub async fn get_me(&self) -> Result<User, RequestError> {
        self.execute(&GetMe::new()).await
    }

    /// Long-poll for updates after `offset`, waiting up to `timeout`
    /// seconds.
    pub async fn get_updates(&self, offset: i64, timeout: u32) -> Result<Vec<Update>, RequestError> {
        self.execute(&GetUpdates::new().offset(offset).timeout(timeout))
            .await
    }

    /// Send a plain text message.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<Message, RequestError> {
        self.execute(&SendMessage::new(chat_id, text)).await
    }

    /// Stop the loading indicator of a callback query without a
    /// notification.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: impl Into<String>,
    ) -> Result<True, RequestError> {
        self.execute(&AnswerCallbackQuery::new(callback_query_id))
            .await
    }

    pub async fn get_file(&self, file_id: impl Into<String>) -> Result<File, RequestError> {
        self.execute(&GetFile::new(file_id)).await
    }
}

impl<T> Debug for Bot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Bot").field("config", &self.config).finish()
    }
}
