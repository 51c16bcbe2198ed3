//! Recommendation APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`home_feed`](QQMusicClient::home_feed) | `/recommend/get_home_feed` |
//! | [`guess_like`](QQMusicClient::guess_like) | `/recommend/get_guess_recommend` |
//! | [`radar_recommend`](QQMusicClient::radar_recommend) | `/recommend/get_radar_recommend` |
//! | [`recommend_songlist`](QQMusicClient::recommend_songlist) | `/recommend/get_recommend_songlist` |
//! | [`recommend_new_song`](QQMusicClient::recommend_new_song) | `/recommend/get_recommend_newsong` |
//!
//! Recommendations are personalized when a session is logged in.

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get the home-page feed.
    pub async fn home_feed(&self) -> Result<Json> {
        self.request("/recommend/get_home_feed", &[]).await
    }

    /// Get "guess you like" recommendations.
    pub async fn guess_like(&self) -> Result<Json> {
        self.request("/recommend/get_guess_recommend", &[]).await
    }

    /// Get radar recommendations.
    pub async fn radar_recommend(&self) -> Result<Json> {
        self.request("/recommend/get_radar_recommend", &[]).await
    }

    /// Get recommended playlists.
    pub async fn recommend_songlist(&self) -> Result<Json> {
        self.request("/recommend/get_recommend_songlist", &[]).await
    }

    /// Get recommended new releases.
    pub async fn recommend_new_song(&self) -> Result<Json> {
        self.request("/recommend/get_recommend_newsong", &[]).await
    }
}
