//! HTTP transport seam.
//!
//! Every request goes through the [`Transport`] trait so tests can
//! substitute a fake without touching the network. The default
//! implementation wraps a shared [`reqwest::Client`] configured with the
//! per-request timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::Result;

const USER_AGENT: &str = concat!("qqmusic-api/", env!("CARGO_PKG_VERSION"));

/// One HTTP exchange: status code plus raw body bytes.
///
/// The body is handed to envelope classification undecoded; the status is
/// only consulted when the body fails to decode.
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Minimal GET capability consumed by the client.
///
/// Implementations return the status and body for any completed exchange,
/// regardless of status class, and fail only on transport-level problems
/// (connection failure, timeout).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the raw reply.
    async fn send(&self, url: &Url) -> Result<HttpReply>;
}

/// Default transport over [`reqwest::Client`].
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &Url) -> Result<HttpReply> {
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(HttpReply { status, body })
    }
}
