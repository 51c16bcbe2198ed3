//! Comment APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`comment_count`](QQMusicClient::comment_count) | `/comment/get_comment_count` |
//! | [`hot_comments`](QQMusicClient::hot_comments) | `/comment/get_hot_comments` |
//! | [`new_comments`](QQMusicClient::new_comments) | `/comment/get_new_comments` |
//! | [`recommend_comments`](QQMusicClient::recommend_comments) | `/comment/get_recommend_comments` |
//! | [`moment_comments`](QQMusicClient::moment_comments) | `/comment/get_moment_comments` |
//!
//! Comment feeds paginate with a sequence cursor: pass the last
//! comment's sequence number from the previous page as `last_seq_no`
//! (empty string for the first page).

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get the comment count for a song.
    pub async fn comment_count(&self, biz_id: &str) -> Result<Json> {
        self.request(
            "/comment/get_comment_count",
            &[("biz_id", biz_id.to_owned())],
        )
        .await
    }

    /// Get a song's hot comments.
    pub async fn hot_comments(
        &self,
        biz_id: &str,
        page_num: u32,
        page_size: u32,
        last_seq_no: &str,
    ) -> Result<Json> {
        self.request(
            "/comment/get_hot_comments",
            &[
                ("biz_id", biz_id.to_owned()),
                ("page_num", page_num.to_string()),
                ("page_size", page_size.to_string()),
                ("last_comment_seq_no", last_seq_no.to_owned()),
            ],
        )
        .await
    }

    /// Get a song's newest comments.
    pub async fn new_comments(
        &self,
        biz_id: &str,
        page_num: u32,
        page_size: u32,
        last_seq_no: &str,
    ) -> Result<Json> {
        self.request(
            "/comment/get_new_comments",
            &[
                ("biz_id", biz_id.to_owned()),
                ("page_num", page_num.to_string()),
                ("page_size", page_size.to_string()),
                ("last_comment_seq_no", last_seq_no.to_owned()),
            ],
        )
        .await
    }

    /// Get a song's recommended comments.
    pub async fn recommend_comments(
        &self,
        biz_id: &str,
        page_num: u32,
        page_size: u32,
        last_seq_no: &str,
    ) -> Result<Json> {
        self.request(
            "/comment/get_recommend_comments",
            &[
                ("biz_id", biz_id.to_owned()),
                ("page_num", page_num.to_string()),
                ("page_size", page_size.to_string()),
                ("last_comment_seq_no", last_seq_no.to_owned()),
            ],
        )
        .await
    }

    /// Get a song's moment comments.
    pub async fn moment_comments(
        &self,
        biz_id: &str,
        page_size: u32,
        last_seq_no: &str,
    ) -> Result<Json> {
        self.request(
            "/comment/get_moment_comments",
            &[
                ("biz_id", biz_id.to_owned()),
                ("page_size", page_size.to_string()),
                ("last_comment_seq_no", last_seq_no.to_owned()),
            ],
        )
        .await
    }
}
