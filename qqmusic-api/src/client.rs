//! HTTP client for the QQ Music proxy server.
//!
//! All requests are plain GETs against `{base_url}{path}?{params}`; the
//! server wraps every payload in the [`ApiResponse`] envelope (`code` 200
//! = success). Two rules govern failure handling:
//!
//! 1. The envelope is decoded before any success/failure decision, even
//!    on non-2xx HTTP statuses. Error envelopes are routinely served
//!    with HTTP 200, so the HTTP status alone decides nothing.
//! 2. Only transport-class failures ([`QQMusicError::is_transient`]) are
//!    retried, with `2^attempt`-second backoff. Server-side rejections
//!    and malformed-envelope errors propagate on first occurrence.
//!
//! API methods are implemented in separate modules (`auth`, `search`,
//! `song`, ...) as `impl QQMusicClient` blocks.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{QQMusicError, Result};
use crate::json::Json;
use crate::transport::{HttpTransport, Transport};
use crate::types::ApiResponse;

/// Upper bound on a single inter-attempt backoff delay.
const BACKOFF_CAP: Duration = Duration::from_secs(60);

/// Client configuration.
///
/// An explicit value instead of a configure-once process global: build
/// one, hand it to [`QQMusicClient::new`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Proxy server base URL, e.g. `http://192.168.1.10:8000`.
    pub base_url: Url,
    /// Per-request timeout. Default 30 seconds.
    pub timeout: Duration,
    /// Transport attempts beyond the first. Default 1.
    pub max_retries: u32,
}

impl ClientConfig {
    /// Configuration with the default timeout and retry count.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            max_retries: 1,
        }
    }
}

/// Async client for the QQ Music proxy API.
///
/// Cheap to clone. Concurrent calls through one instance are independent:
/// retry and polling state is stack-local to each call, the configuration
/// is immutable, and the transport is shared behind an [`Arc`].
#[derive(Clone)]
pub struct QQMusicClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl QQMusicClient {
    /// Create a client with the default reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create a client over a custom [`Transport`] (fakes in tests,
    /// instrumented transports in applications).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET request and unwrap the envelope into typed data.
    ///
    /// # Errors
    ///
    /// - [`QQMusicError::Api`] — envelope `code` other than 200
    /// - [`QQMusicError::NotLoggedIn`] — envelope code 401
    /// - [`QQMusicError::EmptyData`] — success code without a payload
    /// - [`QQMusicError::InvalidResponse`] — body or `data` undecodable
    /// - transport errors, once retries are exhausted
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let resp = self.execute(path, params).await?;
        if resp.code == 401 {
            return Err(QQMusicError::NotLoggedIn);
        }
        if resp.code != 200 {
            return Err(QQMusicError::Api {
                code: resp.code,
                message: resp.message,
                errors: resp.errors,
            });
        }
        match resp.data {
            Some(data) => data.decode(),
            None => Err(QQMusicError::EmptyData),
        }
    }

    /// Send a GET request and return the raw envelope, for callers that
    /// inspect `code`/`errors` directly (e.g. logout).
    pub async fn request_raw(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse<Json>> {
        self.execute(path, params).await
    }

    /// Transport loop: bounded retries with exponential backoff.
    ///
    /// The URL is built once up front; a malformed URL is fatal and
    /// consumes no attempts. Classified errors return on first
    /// occurrence; transient errors sleep `2^attempt` seconds (capped)
    /// unless the budget is spent, in which case the last error surfaces.
    async fn execute(&self, path: &str, params: &[(&str, String)]) -> Result<ApiResponse<Json>> {
        let url = self.endpoint_url(path, params)?;
        let mut attempt: u32 = 0;
        loop {
            match self.attempt(&url).await {
                Ok(envelope) => return Ok(envelope),
                Err(err) if err.is_transient() && attempt < self.config.max_retries => {
                    let delay = backoff_delay(attempt);
                    attempt += 1;
                    tracing::debug!(
                        attempt,
                        max_retries = self.config.max_retries,
                        path,
                        error = %err,
                        delay_secs = delay.as_secs(),
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One transport attempt plus envelope classification.
    async fn attempt(&self, url: &Url) -> Result<ApiResponse<Json>> {
        let reply = self.transport.send(url).await?;
        match serde_json::from_slice(&reply.body) {
            Ok(envelope) => Ok(envelope),
            // Not an envelope: an HTTP error status classifies as a
            // transport failure, a 2xx body that isn't an envelope as a
            // protocol one.
            Err(_) if !(200..300).contains(&reply.status) => {
                Err(QQMusicError::HttpStatus(reply.status))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let joined = format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        );
        let mut url =
            Url::parse(&joined).map_err(|_| QQMusicError::InvalidUrl(path.to_owned()))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// `2^attempt` seconds, clamped to [`BACKOFF_CAP`].
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1_u64 << attempt.min(6)).min(BACKOFF_CAP)
}
