//! Playlist (songlist) APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`songlist_detail`](QQMusicClient::songlist_detail) | `/songlist/get_detail` |
//! | [`songlist_all_songs`](QQMusicClient::songlist_all_songs) | `/songlist/get_songlist` |
//! | [`create_songlist`](QQMusicClient::create_songlist) | `/songlist/create` |
//! | [`delete_songlist`](QQMusicClient::delete_songlist) | `/songlist/delete` |
//! | [`add_songs_to_songlist`](QQMusicClient::add_songs_to_songlist) | `/songlist/add_songs` |
//! | [`delete_songs_from_songlist`](QQMusicClient::delete_songs_from_songlist) | `/songlist/del_songs` |
//!
//! The mutating endpoints (create/delete/add/remove) require a logged-in
//! session and fail with
//! [`QQMusicError::NotLoggedIn`](crate::QQMusicError::NotLoggedIn)
//! otherwise.

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get playlist detail with its songs, paginated.
    pub async fn songlist_detail(
        &self,
        songlist_id: u64,
        dirid: u32,
        num: u32,
        page: u32,
        only_song: bool,
        tag: bool,
    ) -> Result<Json> {
        self.request(
            "/songlist/get_detail",
            &[
                ("songlist_id", songlist_id.to_string()),
                ("dirid", dirid.to_string()),
                ("num", num.to_string()),
                ("page", page.to_string()),
                ("onlysong", only_song.to_string()),
                ("tag", tag.to_string()),
            ],
        )
        .await
    }

    /// Get every song of a playlist.
    pub async fn songlist_all_songs(&self, songlist_id: u64, dirid: u32) -> Result<Json> {
        self.request(
            "/songlist/get_songlist",
            &[
                ("songlist_id", songlist_id.to_string()),
                ("dirid", dirid.to_string()),
            ],
        )
        .await
    }

    /// Create a playlist owned by the logged-in account.
    pub async fn create_songlist(&self, name: &str) -> Result<Json> {
        self.request("/songlist/create", &[("dirname", name.to_owned())])
            .await
    }

    /// Delete a playlist owned by the logged-in account.
    pub async fn delete_songlist(&self, dirid: u32) -> Result<Json> {
        self.request("/songlist/delete", &[("dirid", dirid.to_string())])
            .await
    }

    /// Add songs (comma-separated id list) to a playlist.
    pub async fn add_songs_to_songlist(&self, dirid: u32, song_ids: &str) -> Result<Json> {
        self.request(
            "/songlist/add_songs",
            &[
                ("dirid", dirid.to_string()),
                ("song_ids", song_ids.to_owned()),
            ],
        )
        .await
    }

    /// Remove songs (comma-separated id list) from a playlist.
    pub async fn delete_songs_from_songlist(&self, dirid: u32, song_ids: &str) -> Result<Json> {
        self.request(
            "/songlist/del_songs",
            &[
                ("dirid", dirid.to_string()),
                ("song_ids", song_ids.to_owned()),
            ],
        )
        .await
    }
}
