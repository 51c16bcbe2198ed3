//! Authentication and login APIs.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | [`auth_status`](QQMusicClient::auth_status) | `/auth/status` | Server-side login state |
//! | [`create_qr_code`](QQMusicClient::create_qr_code) | `/login/qrcode/create` | New login QR code |
//! | [`check_qr_code`](QQMusicClient::check_qr_code) | `/login/qrcode/check` | One scan-status check |
//! | [`send_phone_code`](QQMusicClient::send_phone_code) | `/login/phone/send` | Request an SMS code |
//! | [`phone_login`](QQMusicClient::phone_login) | `/login/phone/verify` | Log in with an SMS code |
//! | [`logout`](QQMusicClient::logout) | `/login/logout` | Clear the server-side credential |
//!
//! QR login is a three-step flow: create a code, show it to the user,
//! poll `check_qr_code` until a terminal [`QrState`]. The poll loop is
//! packaged as [`poll_qr_code`](QQMusicClient::poll_qr_code).

use std::time::Duration;

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;
use crate::poll::Poller;
use crate::types::{
    ApiResponse, AuthStatus, PhoneSendStatus, QrCode, QrLoginType, QrState, QrStatus,
};

/// Default interval between QR status checks.
const QR_POLL_INTERVAL: Duration = Duration::from_secs(3);
/// Default deadline for a whole QR polling run.
const QR_POLL_TIMEOUT: Duration = Duration::from_secs(300);

impl QQMusicClient {
    /// Get the server-side login state.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        self.request("/auth/status", &[]).await
    }

    /// Create a login QR code.
    ///
    /// Returns the image to display plus the `qr_id` used to poll the
    /// scan status.
    pub async fn create_qr_code(&self, login_type: QrLoginType) -> Result<QrCode> {
        self.request(
            "/login/qrcode/create",
            &[("type", login_type.as_str().to_owned())],
        )
        .await
    }

    /// Check the current scan status of a QR code.
    pub async fn check_qr_code(&self, qr_id: &str) -> Result<QrStatus> {
        self.request("/login/qrcode/check", &[("qr_id", qr_id.to_owned())])
            .await
    }

    /// Poll a QR code with the default interval (3 s) and deadline
    /// (300 s) until a terminal state.
    ///
    /// ```no_run
    /// # use qqmusic_api::{ClientConfig, QQMusicClient};
    /// # use qqmusic_api::types::{QrLoginType, QrState};
    /// # async fn run() -> qqmusic_api::Result<()> {
    /// # let client = QQMusicClient::new(ClientConfig::new("http://localhost:8000".parse().unwrap()))?;
    /// let qr = client.create_qr_code(QrLoginType::Qq).await?;
    /// // display qr.image_data() to the user...
    /// let outcome = client.poll_qr_code(&qr.qr_id).await?;
    /// if outcome.state == QrState::Confirmed {
    ///     println!("logged in as {:?}", outcome.musicid);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn poll_qr_code(&self, qr_id: &str) -> Result<QrStatus> {
        self.poll_qr_code_with(qr_id, QR_POLL_INTERVAL, QR_POLL_TIMEOUT, |_| {})
            .await
    }

    /// Poll a QR code until the user confirms or refuses, the code
    /// expires, or `timeout` passes. The latter yields the synthetic
    /// [`QrState::TimedOut`]; the server is never told that polling
    /// stopped.
    ///
    /// `on_status` observes every freshly fetched status; it cannot
    /// influence the loop. An error from a status check aborts polling
    /// immediately rather than being absorbed into further waiting.
    pub async fn poll_qr_code_with<F>(
        &self,
        qr_id: &str,
        interval: Duration,
        timeout: Duration,
        on_status: F,
    ) -> Result<QrStatus>
    where
        F: FnMut(&QrStatus),
    {
        let outcome = Poller::new(interval, timeout)
            .run(
                || self.check_qr_code(qr_id),
                |status| status.state.is_terminal(),
                on_status,
            )
            .await?;
        Ok(outcome.unwrap_or(QrStatus {
            state: QrState::TimedOut,
            musicid: None,
        }))
    }

    /// Request an SMS login code.
    ///
    /// When the result is [`PhoneSendState::Captcha`](crate::types::PhoneSendState::Captcha),
    /// the user must complete the slider captcha at the returned URL and
    /// the code must be requested again.
    pub async fn send_phone_code(&self, phone: u64, country_code: u32) -> Result<PhoneSendStatus> {
        self.request(
            "/login/phone/send",
            &[
                ("phone", phone.to_string()),
                ("country_code", country_code.to_string()),
            ],
        )
        .await
    }

    /// Log in with an SMS code.
    pub async fn phone_login(&self, phone: u64, code: u32, country_code: u32) -> Result<Json> {
        self.request(
            "/login/phone/verify",
            &[
                ("phone", phone.to_string()),
                ("code", code.to_string()),
                ("country_code", country_code.to_string()),
            ],
        )
        .await
    }

    /// Log out, clearing the server-side credential.
    ///
    /// Returns the raw envelope so callers can inspect `code` directly.
    pub async fn logout(&self) -> Result<ApiResponse<Json>> {
        self.request_raw("/login/logout", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use reqwest::Url;
    use tokio::time::Instant;

    use super::*;
    use crate::client::ClientConfig;
    use crate::error::QQMusicError;
    use crate::transport::{HttpReply, Transport};

    /// Transport replaying scripted QR status envelopes.
    struct QrStatusTransport {
        bodies: Mutex<VecDeque<&'static str>>,
    }

    #[async_trait]
    impl Transport for QrStatusTransport {
        async fn send(&self, url: &Url) -> Result<HttpReply> {
            assert_eq!(url.path(), "/login/qrcode/check");
            assert!(url.query().unwrap().contains("qr_id=qr-123"));
            let body = self
                .bodies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected extra status check");
            Ok(HttpReply {
                status: 200,
                body: body.as_bytes().to_vec(),
            })
        }
    }

    fn client(bodies: Vec<&'static str>) -> QQMusicClient {
        QQMusicClient::with_transport(
            ClientConfig::new(Url::parse("http://localhost:8000").unwrap()),
            Arc::new(QrStatusTransport {
                bodies: Mutex::new(bodies.into()),
            }),
        )
    }

    const PENDING: &str =
        r#"{"code":200,"message":"OK","data":{"status":"SCAN","musicid":null}}"#;
    const SCANNED: &str =
        r#"{"code":200,"message":"OK","data":{"status":"CONF","musicid":null}}"#;
    const CONFIRMED: &str =
        r#"{"code":200,"message":"OK","data":{"status":"DONE","musicid":10001}}"#;

    #[tokio::test(start_paused = true)]
    async fn poll_returns_confirmed_as_soon_as_observed() {
        let start = Instant::now();
        let client = client(vec![PENDING, PENDING, CONFIRMED]);
        let outcome = client
            .poll_qr_code_with(
                "qr-123",
                Duration::from_secs(3),
                Duration::from_secs(10),
                |_| {},
            )
            .await
            .unwrap();

        assert_eq!(outcome.state, QrState::Confirmed);
        assert_eq!(outcome.musicid, Some(10001));
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn poll_deadline_yields_synthetic_timed_out() {
        let client = client(vec![PENDING; 4]);
        let outcome = client
            .poll_qr_code_with(
                "qr-123",
                Duration::from_secs(3),
                Duration::from_secs(10),
                |_| {},
            )
            .await
            .unwrap();

        assert_eq!(outcome.state, QrState::TimedOut);
        assert_eq!(outcome.musicid, None);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_reports_every_observed_status() {
        let mut seen = Vec::new();
        let client = client(vec![PENDING, SCANNED, CONFIRMED]);
        client
            .poll_qr_code_with(
                "qr-123",
                Duration::from_secs(1),
                Duration::from_secs(30),
                |status| seen.push(status.state),
            )
            .await
            .unwrap();

        assert_eq!(
            seen,
            vec![QrState::Pending, QrState::Scanned, QrState::Confirmed]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn poll_aborts_on_a_classified_error() {
        const EXPIRED_SESSION: &str = r#"{"code":500,"message":"qr session not found"}"#;
        let client = client(vec![PENDING, EXPIRED_SESSION]);
        let err = client
            .poll_qr_code_with(
                "qr-123",
                Duration::from_secs(3),
                Duration::from_secs(30),
                |_| {},
            )
            .await
            .unwrap_err();

        assert!(matches!(err, QQMusicError::Api { code: 500, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn server_reported_expiry_is_terminal() {
        const EXPIRED: &str =
            r#"{"code":200,"message":"OK","data":{"status":"TIMEOUT","musicid":null}}"#;
        let client = client(vec![EXPIRED]);
        let outcome = client
            .poll_qr_code_with(
                "qr-123",
                Duration::from_secs(3),
                Duration::from_secs(30),
                |_| {},
            )
            .await
            .unwrap();

        assert_eq!(outcome.state, QrState::Expired);
    }
}
