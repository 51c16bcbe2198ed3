//! Album APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`album_detail`](QQMusicClient::album_detail) | `/album/get_detail` |
//! | [`album_songs`](QQMusicClient::album_songs) | `/album/get_song` |
//!
//! Cover artwork does not go through the proxy; see
//! [`album_cover_url`](QQMusicClient::album_cover_url).

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get album detail by id or mid.
    pub async fn album_detail(&self, value: &str) -> Result<Json> {
        self.request("/album/get_detail", &[("value", value.to_owned())])
            .await
    }

    /// Get the songs of an album (id or mid), paginated.
    pub async fn album_songs(&self, value: &str, num: u32, page: u32) -> Result<Vec<Json>> {
        self.request(
            "/album/get_song",
            &[
                ("value", value.to_owned()),
                ("num", num.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }
}
