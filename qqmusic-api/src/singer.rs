//! Artist (singer) APIs.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`singer_list`](QQMusicClient::singer_list) | `/singer/get_singer_list` |
//! | [`singer_list_index`](QQMusicClient::singer_list_index) | `/singer/get_singer_list_index` |
//! | [`singer_info`](QQMusicClient::singer_info) | `/singer/get_info` |
//! | [`singer_desc`](QQMusicClient::singer_desc) | `/singer/get_desc` |
//! | [`singer_songs`](QQMusicClient::singer_songs) | `/singer/get_songs` |
//! | [`singer_songs_list`](QQMusicClient::singer_songs_list) | `/singer/get_songs_list` |
//! | [`singer_all_songs`](QQMusicClient::singer_all_songs) | `/singer/get_songs_list_all` |
//! | [`singer_albums`](QQMusicClient::singer_albums) | `/singer/get_album_list` |
//! | [`singer_all_albums`](QQMusicClient::singer_all_albums) | `/singer/get_album_list_all` |
//! | [`singer_mvs`](QQMusicClient::singer_mvs) | `/singer/get_mv_list` |
//! | [`singer_all_mvs`](QQMusicClient::singer_all_mvs) | `/singer/get_mv_list_all` |
//! | [`similar_singers`](QQMusicClient::similar_singers) | `/singer/get_similar` |
//! | [`singer_tab_detail`](QQMusicClient::singer_tab_detail) | `/singer/get_tab_detail` |
//!
//! Avatar artwork does not go through the proxy; see
//! [`singer_avatar_url`](QQMusicClient::singer_avatar_url).

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;
use crate::types::{AreaType, GenreType, SexType, SingerTabType};

impl QQMusicClient {
    /// List artists filtered by region, gender, and genre.
    pub async fn singer_list(
        &self,
        area: AreaType,
        sex: SexType,
        genre: GenreType,
    ) -> Result<Vec<Json>> {
        self.request(
            "/singer/get_singer_list",
            &[
                ("area", area.as_str().to_owned()),
                ("sex", sex.as_str().to_owned()),
                ("genre", genre.as_str().to_owned()),
            ],
        )
        .await
    }

    /// List artists filtered additionally by name index.
    ///
    /// `index`: 1–26 for A–Z, 27 for `#`, -100 for all.
    pub async fn singer_list_index(
        &self,
        area: AreaType,
        sex: SexType,
        genre: GenreType,
        index: i32,
        sin: u32,
        cur_page: u32,
    ) -> Result<Json> {
        self.request(
            "/singer/get_singer_list_index",
            &[
                ("area", area.as_str().to_owned()),
                ("sex", sex.as_str().to_owned()),
                ("genre", genre.as_str().to_owned()),
                ("index", index.to_string()),
                ("sin", sin.to_string()),
                ("cur_page", cur_page.to_string()),
            ],
        )
        .await
    }

    /// Get basic artist info.
    pub async fn singer_info(&self, mid: &str) -> Result<Json> {
        self.request("/singer/get_info", &[("mid", mid.to_owned())])
            .await
    }

    /// Get biographies for a comma-separated mid list.
    pub async fn singer_desc(&self, mids: &str) -> Result<Vec<Json>> {
        self.request("/singer/get_desc", &[("mids", mids.to_owned())])
            .await
    }

    /// Get an artist's songs, paginated.
    pub async fn singer_songs(&self, mid: &str, num: u32, page: u32) -> Result<Vec<Json>> {
        self.request(
            "/singer/get_songs",
            &[
                ("mid", mid.to_owned()),
                ("num", num.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Get an artist's song list (raw form), windowed by offset.
    pub async fn singer_songs_list(&self, mid: &str, number: u32, begin: u32) -> Result<Json> {
        self.request(
            "/singer/get_songs_list",
            &[
                ("mid", mid.to_owned()),
                ("number", number.to_string()),
                ("begin", begin.to_string()),
            ],
        )
        .await
    }

    /// Get an artist's complete song list.
    pub async fn singer_all_songs(&self, mid: &str) -> Result<Vec<Json>> {
        self.request("/singer/get_songs_list_all", &[("mid", mid.to_owned())])
            .await
    }

    /// Get an artist's albums, windowed by offset.
    pub async fn singer_albums(&self, mid: &str, number: u32, begin: u32) -> Result<Json> {
        self.request(
            "/singer/get_album_list",
            &[
                ("mid", mid.to_owned()),
                ("number", number.to_string()),
                ("begin", begin.to_string()),
            ],
        )
        .await
    }

    /// Get an artist's complete album list.
    pub async fn singer_all_albums(&self, mid: &str) -> Result<Vec<Json>> {
        self.request("/singer/get_album_list_all", &[("mid", mid.to_owned())])
            .await
    }

    /// Get an artist's MVs, windowed by offset.
    pub async fn singer_mvs(&self, mid: &str, number: u32, begin: u32) -> Result<Json> {
        self.request(
            "/singer/get_mv_list",
            &[
                ("mid", mid.to_owned()),
                ("number", number.to_string()),
                ("begin", begin.to_string()),
            ],
        )
        .await
    }

    /// Get an artist's complete MV list.
    pub async fn singer_all_mvs(&self, mid: &str) -> Result<Vec<Json>> {
        self.request("/singer/get_mv_list_all", &[("mid", mid.to_owned())])
            .await
    }

    /// Get artists similar to the given one.
    pub async fn similar_singers(&self, mid: &str, number: u32) -> Result<Vec<Json>> {
        self.request(
            "/singer/get_similar",
            &[("mid", mid.to_owned()), ("number", number.to_string())],
        )
        .await
    }

    /// Get one tab of an artist profile (wiki, songs, albums, ...).
    pub async fn singer_tab_detail(
        &self,
        mid: &str,
        tab: SingerTabType,
        page: u32,
        num: u32,
    ) -> Result<Vec<Json>> {
        self.request(
            "/singer/get_tab_detail",
            &[
                ("mid", mid.to_owned()),
                ("tab_type", tab.as_str().to_owned()),
                ("page", page.to_string()),
                ("num", num.to_string()),
            ],
        )
        .await
    }
}
