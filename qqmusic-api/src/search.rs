//! Search APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`hotkey`](QQMusicClient::hotkey) | `/search/hotkey` |
//! | [`search_complete`](QQMusicClient::search_complete) | `/search/complete` |
//! | [`quick_search`](QQMusicClient::quick_search) | `/search/quick_search` |
//! | [`general_search`](QQMusicClient::general_search) | `/search/general_search` |
//! | [`search`](QQMusicClient::search) | `/search/search_by_type` |
//!
//! Typed search (`search_by_type`) returns an array of result objects
//! whose shape depends on the [`SearchType`]; see
//! [`helpers::songs_from_search`](crate::helpers::songs_from_search) for
//! extracting common song fields.

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;
use crate::types::SearchType;

impl QQMusicClient {
    /// Get trending search keywords.
    pub async fn hotkey(&self) -> Result<Json> {
        self.request("/search/hotkey", &[]).await
    }

    /// Get search completions for a partial keyword.
    pub async fn search_complete(&self, keyword: &str) -> Result<Json> {
        self.request("/search/complete", &[("keyword", keyword.to_owned())])
            .await
    }

    /// Quick search across all result types.
    pub async fn quick_search(&self, keyword: &str) -> Result<Json> {
        self.request("/search/quick_search", &[("keyword", keyword.to_owned())])
            .await
    }

    /// Combined search returning mixed result sections.
    pub async fn general_search(&self, keyword: &str, page: u32, highlight: bool) -> Result<Json> {
        self.request(
            "/search/general_search",
            &[
                ("keyword", keyword.to_owned()),
                ("page", page.to_string()),
                ("highlight", highlight.to_string()),
            ],
        )
        .await
    }

    /// Search within one result type.
    ///
    /// `num` results per page, `page` starting at 1. With `highlight`
    /// the keyword is wrapped in `<em>` tags inside result titles.
    pub async fn search(
        &self,
        keyword: &str,
        search_type: SearchType,
        num: u32,
        page: u32,
        highlight: bool,
    ) -> Result<Vec<Json>> {
        self.request(
            "/search/search_by_type",
            &[
                ("keyword", keyword.to_owned()),
                ("search_type", search_type.as_str().to_owned()),
                ("num", num.to_string()),
                ("page", page.to_string()),
                ("highlight", highlight.to_string()),
            ],
        )
        .await
    }
}
