//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AccountConfig, AccountInfo, ApiErrorCode, ApiKey, Cancel, CountOutbox, LatestOutbox,
    LocalStatusQuery, MakeTts, MessageReport, Select, SelectOutbox, SendArray, SendMessage,
    SenderLine, StatusByReceptor, StatusQuery, StatusReport, ValidationError, VerifyLookup,
};
use crate::transport::{self, TransportError, ENVELOPE_SUCCESS};

const DEFAULT_BASE_URL: &str = "https://api.kavenegar.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&query).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`KavenegarClient`].
///
/// The kinds are mutually exclusive and checked in order: transport failures
/// first, then the HTTP status, then the envelope shape, then the envelope
/// status code.
pub enum KavenegarError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Kavenegar answered 2xx but the envelope `return.status` is not 200.
    ///
    /// `raw_code` preserves the original value even when it falls outside the
    /// documented table and `code` degrades to [`ApiErrorCode::OperationFailed`].
    #[error("API error {raw_code}: {message}")]
    Api {
        code: ApiErrorCode,
        raw_code: i64,
        message: String,
        body: String,
    },

    /// Response body could not be decoded as the expected envelope/DTO shape.
    #[error("response format error: {0}")]
    ResponseFormat(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`KavenegarClient`].
///
/// Use this to override the base URL (tests), the default sender line, the
/// timeout, or the user-agent.
pub struct KavenegarClientBuilder {
    api_key: ApiKey,
    base_url: String,
    default_sender: Option<SenderLine>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl KavenegarClientBuilder {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            default_sender: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.kavenegar.com/v1`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sender line substituted into send requests that carry none.
    pub fn default_sender(mut self, sender: SenderLine) -> Self {
        self.default_sender = Some(sender);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`KavenegarClient`].
    pub fn build(self) -> Result<KavenegarClient, KavenegarError> {
        let base_url = Url::parse(&self.base_url).map_err(KavenegarError::InvalidBaseUrl)?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| KavenegarError::Transport(Box::new(err)))?;

        Ok(KavenegarClient {
            api_key: self.api_key,
            base_url,
            default_sender: self.default_sender,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

enum Verb {
    Get,
    PostForm,
}

#[derive(Clone)]
/// High-level Kavenegar client.
///
/// Each operation builds `{base}/{apiKey}/{method}.json`, performs exactly one
/// HTTP call (GET with query parameters, except the bulk `sms/sendarray` which
/// POSTs a form body), checks the envelope, and maps `entries` through the
/// matching DTO decoder. No retries, no caching.
pub struct KavenegarClient {
    api_key: ApiKey,
    base_url: Url,
    default_sender: Option<SenderLine>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for KavenegarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KavenegarClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("default_sender", &self.default_sender)
            .finish_non_exhaustive()
    }
}

impl KavenegarClient {
    /// Create a client with the default endpoint and a 30 second timeout.
    ///
    /// For more customization, use [`KavenegarClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, KavenegarError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> KavenegarClientBuilder {
        KavenegarClientBuilder::new(api_key)
    }

    fn endpoint(&self, method: &str) -> Result<Url, KavenegarError> {
        let raw = format!(
            "{}/{}/{method}.json",
            self.base_url.as_str().trim_end_matches('/'),
            self.api_key.as_str()
        );
        Url::parse(&raw).map_err(KavenegarError::InvalidBaseUrl)
    }

    /// Uniform request pipeline: one call, HTTP check, envelope check, then
    /// the raw `entries` array (absent means empty).
    async fn execute(
        &self,
        method: &str,
        verb: Verb,
        params: Vec<(String, String)>,
    ) -> Result<Vec<serde_json::Value>, KavenegarError> {
        let url = self.endpoint(method)?;

        let response = match verb {
            Verb::Get => self.http.get(url.as_str(), params).await,
            Verb::PostForm => self.http.post_form(url.as_str(), params).await,
        }
        .map_err(KavenegarError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(KavenegarError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let envelope = transport::decode_envelope(&response.body)
            .map_err(|err| KavenegarError::ResponseFormat(Box::new(err)))?;

        if envelope.ret.status != ENVELOPE_SUCCESS {
            let raw_code = envelope.ret.status;
            let code =
                ApiErrorCode::from_code(raw_code).unwrap_or(ApiErrorCode::OperationFailed);
            let message = envelope
                .ret
                .message
                .unwrap_or_else(|| code.message().to_owned());
            return Err(KavenegarError::Api {
                code,
                raw_code,
                message,
                body: response.body,
            });
        }

        Ok(envelope.entries.unwrap_or_default())
    }

    fn map_entries<T>(
        entries: Vec<serde_json::Value>,
        decode: impl Fn(serde_json::Value) -> Result<T, TransportError>,
    ) -> Result<Vec<T>, KavenegarError> {
        entries
            .into_iter()
            .map(|entry| decode(entry).map_err(|err| KavenegarError::ResponseFormat(Box::new(err))))
            .collect()
    }

    fn single_entry(
        method: &'static str,
        entries: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, KavenegarError> {
        entries.into_iter().next().ok_or_else(|| {
            KavenegarError::ResponseFormat(Box::new(TransportError::MissingEntry { method }))
        })
    }

    /// Send one message body to up to 200 receptors (`sms/send`).
    ///
    /// When the request carries no sender, the client's configured default
    /// sender is substituted.
    pub async fn send(&self, request: SendMessage) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_send_params(&request, self.default_sender.as_ref());
        let entries = self.execute("sms/send", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Send different messages from different senders in one call
    /// (`sms/sendarray`, POST form-encoded).
    pub async fn send_array(
        &self,
        request: SendArray,
    ) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_send_array_form(&request);
        let entries = self.execute("sms/sendarray", Verb::PostForm, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Delivery status for up to 500 message ids (`sms/status`).
    ///
    /// Only answers for messages sent within the provider's retention window.
    pub async fn status(&self, request: StatusQuery) -> Result<Vec<StatusReport>, KavenegarError> {
        let params = transport::encode_status_params(&request);
        let entries = self.execute("sms/status", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_status_entry)
    }

    /// Delivery status looked up by caller-supplied local ids
    /// (`sms/statuslocalmessageid`).
    pub async fn status_local_message_id(
        &self,
        request: LocalStatusQuery,
    ) -> Result<Vec<StatusReport>, KavenegarError> {
        let params = transport::encode_local_status_params(&request);
        let entries = self
            .execute("sms/statuslocalmessageid", Verb::Get, params)
            .await?;
        Self::map_entries(entries, transport::decode_status_entry)
    }

    /// Messages sent to one receptor within a date range of at most one day
    /// (`sms/statusbyreceptor`).
    pub async fn status_by_receptor(
        &self,
        request: StatusByReceptor,
    ) -> Result<Vec<StatusReport>, KavenegarError> {
        let params = transport::encode_status_by_receptor_params(&request);
        let entries = self
            .execute("sms/statusbyreceptor", Verb::Get, params)
            .await?;
        Self::map_entries(entries, transport::decode_status_entry)
    }

    /// Full details of sent messages by id (`sms/select`).
    pub async fn select(&self, request: Select) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_select_params(&request);
        let entries = self.execute("sms/select", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Sent messages within a date range of at most one day
    /// (`sms/selectoutbox`).
    pub async fn select_outbox(
        &self,
        request: SelectOutbox,
    ) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_select_outbox_params(&request);
        let entries = self.execute("sms/selectoutbox", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// The most recent sent messages (`sms/latestoutbox`).
    pub async fn latest_outbox(
        &self,
        request: LatestOutbox,
    ) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_latest_outbox_params(&request);
        let entries = self.execute("sms/latestoutbox", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Count of sent messages within a date range (`sms/countoutbox`).
    pub async fn count_outbox(&self, request: CountOutbox) -> Result<i64, KavenegarError> {
        let params = transport::encode_count_outbox_params(&request);
        let entries = self.execute("sms/countoutbox", Verb::Get, params).await?;
        match entries.into_iter().next() {
            Some(entry) => transport::decode_count_entry(entry)
                .map_err(|err| KavenegarError::ResponseFormat(Box::new(err))),
            None => Ok(0),
        }
    }

    /// Cancel scheduled messages before dispatch (`sms/cancel`).
    pub async fn cancel(&self, request: Cancel) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_cancel_params(&request);
        let entries = self.execute("sms/cancel", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Template-based verification send (`verify/lookup`).
    pub async fn verify_lookup(
        &self,
        request: VerifyLookup,
    ) -> Result<MessageReport, KavenegarError> {
        let params = transport::encode_verify_lookup_params(&request);
        let entries = self.execute("verify/lookup", Verb::Get, params).await?;
        let entry = Self::single_entry("verify/lookup", entries)?;
        transport::decode_message_entry(entry)
            .map_err(|err| KavenegarError::ResponseFormat(Box::new(err)))
    }

    /// Text-to-speech voice call (`call/maketts`).
    pub async fn make_tts(&self, request: MakeTts) -> Result<Vec<MessageReport>, KavenegarError> {
        let params = transport::encode_make_tts_params(&request);
        let entries = self.execute("call/maketts", Verb::Get, params).await?;
        Self::map_entries(entries, transport::decode_message_entry)
    }

    /// Account credit and expiry (`account/info`).
    pub async fn info(&self) -> Result<AccountInfo, KavenegarError> {
        let entries = self.execute("account/info", Verb::Get, Vec::new()).await?;
        let entry = Self::single_entry("account/info", entries)?;
        transport::decode_account_info_entry(entry)
            .map_err(|err| KavenegarError::ResponseFormat(Box::new(err)))
    }

    /// Account configuration settings (`account/config`).
    pub async fn config(&self) -> Result<AccountConfig, KavenegarError> {
        let entries = self
            .execute("account/config", Verb::Get, Vec::new())
            .await?;
        let entry = Self::single_entry("account/config", entries)?;
        transport::decode_account_config_entry(entry)
            .map_err(|err| KavenegarError::ResponseFormat(Box::new(err)))
    }
}
