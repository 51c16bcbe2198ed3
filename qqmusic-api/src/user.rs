//! User profile and library APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`get_euin`](QQMusicClient::get_euin) | `/user/get_euin` |
//! | [`get_musicid`](QQMusicClient::get_musicid) | `/user/get_musicid` |
//! | [`user_homepage`](QQMusicClient::user_homepage) | `/user/get_homepage` |
//! | [`vip_info`](QQMusicClient::vip_info) | `/user/get_vip_info` |
//! | [`follow_singers`](QQMusicClient::follow_singers) | `/user/get_follow_singers` |
//! | [`fans`](QQMusicClient::fans) | `/user/get_fans` |
//! | [`friends`](QQMusicClient::friends) | `/user/get_friend` |
//! | [`follow_users`](QQMusicClient::follow_users) | `/user/get_follow_user` |
//! | [`created_songlist`](QQMusicClient::created_songlist) | `/user/get_created_songlist` |
//! | [`fav_songs`](QQMusicClient::fav_songs) | `/user/get_fav_song` |
//! | [`fav_songlists`](QQMusicClient::fav_songlists) | `/user/get_fav_songlist` |
//! | [`fav_albums`](QQMusicClient::fav_albums) | `/user/get_fav_album` |
//! | [`fav_mvs`](QQMusicClient::fav_mvs) | `/user/get_fav_mv` |
//! | [`music_gene`](QQMusicClient::music_gene) | `/user/get_music_gene` |
//!
//! Users are addressed by `musicid` (numeric account ID) or `euin` (an
//! encrypted string form of it); the two lookup endpoints convert
//! between them. Most endpoints here require a logged-in session.

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;

impl QQMusicClient {
    /// Get the encrypted uin for a musicid.
    pub async fn get_euin(&self, musicid: i64) -> Result<Json> {
        self.request("/user/get_euin", &[("musicid", musicid.to_string())])
            .await
    }

    /// Reverse-look-up the musicid behind an encrypted uin.
    pub async fn get_musicid(&self, euin: &str) -> Result<Json> {
        self.request("/user/get_musicid", &[("euin", euin.to_owned())])
            .await
    }

    /// Get a user's homepage info.
    pub async fn user_homepage(&self, euin: &str) -> Result<Json> {
        self.request("/user/get_homepage", &[("euin", euin.to_owned())])
            .await
    }

    /// Get the logged-in account's VIP status.
    pub async fn vip_info(&self) -> Result<Json> {
        self.request("/user/get_vip_info", &[]).await
    }

    /// Get the artists a user follows, paginated.
    pub async fn follow_singers(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_follow_singers",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get a user's followers, paginated.
    pub async fn fans(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_fans",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get the logged-in account's friends, paginated.
    pub async fn friends(&self, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_friend",
            &[("page", page.to_string()), ("num", num.to_string())],
        )
        .await
    }

    /// Get the users a user follows, paginated.
    pub async fn follow_users(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_follow_user",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get the playlists created by a user (by musicid).
    pub async fn created_songlist(&self, uin: &str) -> Result<Vec<Json>> {
        self.request("/user/get_created_songlist", &[("uin", uin.to_owned())])
            .await
    }

    /// Get a user's favorite songs, paginated.
    pub async fn fav_songs(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_fav_song",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get a user's favorite playlists, paginated.
    pub async fn fav_songlists(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_fav_songlist",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get a user's favorite albums, paginated.
    pub async fn fav_albums(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_fav_album",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get a user's favorite MVs, paginated.
    pub async fn fav_mvs(&self, euin: &str, page: u32, num: u32) -> Result<Json> {
        self.request(
            "/user/get_fav_mv",
            &[
                ("euin", euin.to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }

    /// Get a user's music-gene (listening profile) data.
    pub async fn music_gene(&self, euin: &str) -> Result<Json> {
        self.request("/user/get_music_gene", &[("euin", euin.to_owned())])
            .await
    }
}
