//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ConfigurationError, Environment, PostEncoding, ServiceResponse, Token};
use crate::transport::{
    DATA_FIELD, Decoded, FILE_FIELD, Parameters, RequestBody, authenticated_url, decode_response,
    encode_post_body, encode_upload_body,
};

mod endpoints;
#[cfg(test)]
mod fake;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    body: RequestBody,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
            };
            let builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(json) => builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(json),
                RequestBody::Form(params) => builder.form(&params),
                RequestBody::Multipart {
                    file_name,
                    content,
                    data,
                } => {
                    let file = reqwest::multipart::Part::bytes(content).file_name(file_name);
                    let form = reqwest::multipart::Form::new()
                        .part(FILE_FIELD, file)
                        .text(DATA_FIELD, data);
                    builder.multipart(form)
                }
            };

            // reqwest errors carry the URL, which embeds the access token.
            let response = builder.send().await.map_err(|err| err.without_url())?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| err.without_url())?
                .to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PingenClient`].
///
/// This error preserves:
/// - configuration failures (invalid token, environment or base URL),
/// - transport failures (DNS, TLS, timeouts),
/// - API-level failures (the service answered with `error: true`),
/// - encoding/decoding failures.
///
/// Responses are classified by their body alone; the HTTP status is only reported alongside
/// a body that could not be decoded.
pub enum PingenError {
    /// One of the constructors rejected an invalid value.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Pingen reported a failure (`error: true`) with its code and message.
    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },

    /// Response body is neither PDF/PNG nor a JSON object.
    #[error("decoding error (HTTP {status}): {source}")]
    Decoding {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Body parameters could not be encoded as a JSON object.
    #[error("encoding error: {0}")]
    Encoding(#[source] Box<dyn StdError + Send + Sync>),

    /// The file to upload could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
/// Builder for [`PingenClient`].
///
/// Use this when you need the staging environment, a custom base URL, a timeout, a user-agent
/// or the legacy form-field POST encoding.
pub struct PingenClientBuilder {
    token: Token,
    environment: Environment,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    post_encoding: PostEncoding,
}

impl PingenClientBuilder {
    /// Create a builder targeting production with no timeout/user-agent override.
    pub fn new(token: Token) -> Self {
        Self {
            token,
            environment: Environment::default(),
            base_url: None,
            timeout: None,
            user_agent: None,
            post_encoding: PostEncoding::default(),
        }
    }

    /// Select the production or staging API.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL (takes precedence over [`Self::environment`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Choose how body parameters of non-upload POST requests are encoded.
    pub fn post_encoding(mut self, post_encoding: PostEncoding) -> Self {
        self.post_encoding = post_encoding;
        self
    }

    /// Build a [`PingenClient`].
    pub fn build(self) -> Result<PingenClient, PingenError> {
        let base_url = match self.base_url {
            Some(base_url) => validate_base_url(&base_url)?,
            None => self.environment.base_url().to_owned(),
        };

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PingenError::Transport(Box::new(err)))?;

        Ok(PingenClient {
            token: self.token,
            base_url,
            post_encoding: self.post_encoding,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn validate_base_url(input: &str) -> Result<String, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let parsed = url::Url::parse(input.trim()).map_err(|_| invalid())?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level Pingen client.
///
/// Every endpoint method issues exactly one request to
/// `{base_url}/{operation path}/token/{token}` and returns either a JSON object or the raw
/// PDF/PNG payload as a [`ServiceResponse`]. By default it targets `https://api.pingen.com`.
pub struct PingenClient {
    token: Token,
    base_url: String,
    post_encoding: PostEncoding,
    http: Arc<dyn HttpTransport>,
}

/// What to send along with a request.
enum Payload<'a> {
    None,
    Parameters(Parameters),
    UploadFile { path: &'a Path, params: Parameters },
    UploadBytes {
        file_name: String,
        content: Vec<u8>,
        params: Parameters,
    },
}

impl PingenClient {
    /// Create a production client.
    ///
    /// For more customization, use [`PingenClient::builder`].
    pub fn new(token: Token) -> Self {
        Self {
            token,
            base_url: Environment::Production.base_url().to_owned(),
            post_encoding: PostEncoding::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: Token) -> PingenClientBuilder {
        PingenClientBuilder::new(token)
    }

    /// Base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: String,
        payload: Payload<'_>,
    ) -> Result<ServiceResponse, PingenError> {
        let (method, body) = match payload {
            Payload::None => (method, RequestBody::Empty),
            Payload::Parameters(params) => {
                debug_assert_eq!(method, HttpMethod::Post, "body parameters require POST");
                (
                    HttpMethod::Post,
                    encode_post_body(&params, self.post_encoding),
                )
            }
            Payload::UploadFile { path: file, params } => {
                let content = tokio::fs::read(file)
                    .await
                    .map_err(|source| PingenError::File {
                        path: file.to_path_buf(),
                        source,
                    })?;
                let file_name = file
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (
                    HttpMethod::Post,
                    encode_upload_body(file_name, content, &params),
                )
            }
            Payload::UploadBytes {
                file_name,
                content,
                params,
            } => (
                HttpMethod::Post,
                encode_upload_body(file_name, content, &params),
            ),
        };

        tracing::debug!(method = method.as_str(), path = %path, "sending Pingen request");

        let request = HttpRequest {
            method,
            url: authenticated_url(&self.base_url, &path, &self.token),
            body,
        };
        let response = self
            .http
            .send(request)
            .await
            .map_err(PingenError::Transport)?;

        interpret_response(response)
    }
}

fn interpret_response(response: HttpResponse) -> Result<ServiceResponse, PingenError> {
    let status = response.status;
    match decode_response(response.body) {
        Ok(Decoded::ServiceError { code, message }) => {
            tracing::debug!(status, code, "Pingen reported an error");
            Err(PingenError::Service { code, message })
        }
        Ok(Decoded::Response(parsed)) => {
            tracing::debug!(
                status,
                kind = response_kind(&parsed),
                "received Pingen response"
            );
            Ok(parsed)
        }
        Err(err) => Err(PingenError::Decoding {
            status,
            source: Box::new(err),
        }),
    }
}

fn response_kind(response: &ServiceResponse) -> &'static str {
    match response {
        ServiceResponse::Json(_) => "json",
        ServiceResponse::Binary { kind, .. } => kind.mime_type(),
    }
}
