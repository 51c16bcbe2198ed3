//! Chart (toplist) APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`top_category`](QQMusicClient::top_category) | `/top/get_top_category` |
//! | [`top_detail`](QQMusicClient::top_detail) | `/top/get_detail` |

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get all chart categories.
    pub async fn top_category(&self) -> Result<Vec<Json>> {
        self.request("/top/get_top_category", &[]).await
    }

    /// Get one chart with its entries, paginated. With `tag` the entries
    /// carry song labels.
    pub async fn top_detail(&self, top_id: u64, num: u32, page: u32, tag: bool) -> Result<Json> {
        self.request(
            "/top/get_detail",
            &[
                ("top_id", top_id.to_string()),
                ("num", num.to_string()),
                ("page", page.to_string()),
                ("tag", tag.to_string()),
            ],
        )
        .await
    }
}
