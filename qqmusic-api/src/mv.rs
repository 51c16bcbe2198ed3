//! MV APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`mv_detail`](QQMusicClient::mv_detail) | `/mv/get_detail` |
//! | [`mv_urls`](QQMusicClient::mv_urls) | `/mv/get_mv_urls` |

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get MV detail for a comma-separated vid list.
    pub async fn mv_detail(&self, vids: &str) -> Result<Json> {
        self.request("/mv/get_detail", &[("vids", vids.to_owned())])
            .await
    }

    /// Get MV playback URLs for a comma-separated vid list.
    ///
    /// Returns a vid → `{mp4: .., hls: ..}` map.
    pub async fn mv_urls(&self, vids: &str) -> Result<Json> {
        self.request("/mv/get_mv_urls", &[("vids", vids.to_owned())])
            .await
    }
}
