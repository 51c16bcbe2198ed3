//! Song APIs: metadata, playback URLs, and related content.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |---|---|
//! | [`query_song`](QQMusicClient::query_song) | `/song/query_song` |
//! | [`song_detail`](QQMusicClient::song_detail) | `/song/get_detail` |
//! | [`song_urls`](QQMusicClient::song_urls) | `/song/get_song_urls` |
//! | [`encrypted_song_urls`](QQMusicClient::encrypted_song_urls) | `/song/get_song_urls` |
//! | [`try_url`](QQMusicClient::try_url) | `/song/get_try_url` |
//! | [`similar_songs`](QQMusicClient::similar_songs) | `/song/get_similar_song` |
//! | [`song_labels`](QQMusicClient::song_labels) | `/song/get_lables` |
//! | [`related_songlist`](QQMusicClient::related_songlist) | `/song/get_related_songlist` |
//! | [`related_mv`](QQMusicClient::related_mv) | `/song/get_related_mv` |
//! | [`other_versions`](QQMusicClient::other_versions) | `/song/get_other_version` |
//! | [`song_producer`](QQMusicClient::song_producer) | `/song/get_producer` |
//! | [`song_sheet`](QQMusicClient::song_sheet) | `/song/get_sheet` |
//! | [`song_fav_count`](QQMusicClient::song_fav_count) | `/song/get_fav_num` |
//!
//! Songs are addressed either by numeric `id` or by `mid` (a string
//! key); endpoints taking `value` accept both. Batch parameters are
//! comma-separated lists.

use std::collections::BTreeMap;

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::json::Json;
use crate::types::{EncryptedSongFileType, EncryptedSongUrl, SongFileType};

impl QQMusicClient {
    /// Look up songs by id or mid (comma-separated list).
    pub async fn query_song(&self, value: &str) -> Result<Vec<Json>> {
        self.request("/song/query_song", &[("value", value.to_owned())])
            .await
    }

    /// Get full song detail by id or mid.
    pub async fn song_detail(&self, value: &str) -> Result<Json> {
        self.request("/song/get_detail", &[("value", value.to_owned())])
            .await
    }

    /// Get playback URLs for a comma-separated mid list.
    ///
    /// Returns a mid → URL map. A mid maps to an empty value when the
    /// requested quality is not available for the account.
    pub async fn song_urls(
        &self,
        mids: &str,
        file_type: SongFileType,
    ) -> Result<BTreeMap<String, Json>> {
        self.request(
            "/song/get_song_urls",
            &[
                ("mid", mids.to_owned()),
                ("file_type", file_type.as_str().to_owned()),
            ],
        )
        .await
    }

    /// Get a single song's playback URL; `None` when unavailable.
    pub async fn song_url(&self, mid: &str, file_type: SongFileType) -> Result<Option<String>> {
        let urls = self.song_urls(mid, file_type).await?;
        Ok(urls.get(mid).and_then(Json::as_string))
    }

    /// Get download URLs plus decryption keys for encrypted files
    /// (`.mflac` / `.mgg`) for a comma-separated mid list.
    ///
    /// Entries whose `[url, ekey]` pair is missing or incomplete are
    /// dropped from the result.
    pub async fn encrypted_song_urls(
        &self,
        mids: &str,
        file_type: EncryptedSongFileType,
    ) -> Result<BTreeMap<String, EncryptedSongUrl>> {
        let raw: BTreeMap<String, Json> = self
            .request(
                "/song/get_song_urls",
                &[
                    ("mid", mids.to_owned()),
                    (
                        "file_type",
                        format!("EncryptedSongFileType.{}", file_type.as_str()),
                    ),
                ],
            )
            .await?;

        let mut result = BTreeMap::new();
        for (mid, value) in raw {
            // The server returns a [url, ekey] pair per mid.
            let Some(pair) = value.as_array() else { continue };
            let url = pair.first().and_then(Json::as_string);
            let ekey = pair.get(1).and_then(Json::as_string);
            if let (Some(url), Some(ekey)) = (url, ekey) {
                result.insert(mid, EncryptedSongUrl { url, ekey });
            }
        }
        Ok(result)
    }

    /// Get a single encrypted download; `None` when unavailable.
    pub async fn encrypted_song_url(
        &self,
        mid: &str,
        file_type: EncryptedSongFileType,
    ) -> Result<Option<EncryptedSongUrl>> {
        let mut urls = self.encrypted_song_urls(mid, file_type).await?;
        Ok(urls.remove(mid))
    }

    /// Get a preview (trial) playback URL.
    ///
    /// `vs` comes from the song detail's `vs` field.
    pub async fn try_url(&self, mid: &str, vs: &str) -> Result<Json> {
        self.request(
            "/song/get_try_url",
            &[("mid", mid.to_owned()), ("vs", vs.to_owned())],
        )
        .await
    }

    /// Get songs similar to the given song id.
    pub async fn similar_songs(&self, song_id: u64) -> Result<Vec<Json>> {
        self.request("/song/get_similar_song", &[("songid", song_id.to_string())])
            .await
    }

    /// Get label/tag info for a song id.
    pub async fn song_labels(&self, song_id: u64) -> Result<Vec<Json>> {
        self.request("/song/get_lables", &[("songid", song_id.to_string())])
            .await
    }

    /// Get playlists featuring the song.
    pub async fn related_songlist(&self, song_id: u64) -> Result<Vec<Json>> {
        self.request(
            "/song/get_related_songlist",
            &[("songid", song_id.to_string())],
        )
        .await
    }

    /// Get MVs related to the song.
    pub async fn related_mv(&self, song_id: u64) -> Result<Vec<Json>> {
        self.request("/song/get_related_mv", &[("songid", song_id.to_string())])
            .await
    }

    /// Get other released versions of a song (id or mid).
    pub async fn other_versions(&self, value: &str) -> Result<Vec<Json>> {
        self.request("/song/get_other_version", &[("value", value.to_owned())])
            .await
    }

    /// Get production credits for a song (id or mid).
    pub async fn song_producer(&self, value: &str) -> Result<Vec<Json>> {
        self.request("/song/get_producer", &[("value", value.to_owned())])
            .await
    }

    /// Get sheet-music images for a song mid.
    pub async fn song_sheet(&self, mid: &str) -> Result<Vec<Json>> {
        self.request("/song/get_sheet", &[("mid", mid.to_owned())])
            .await
    }

    /// Get favorite counts for a comma-separated song-id list.
    pub async fn song_fav_count(&self, song_ids: &str) -> Result<Json> {
        self.request("/song/get_fav_num", &[("songid", song_ids.to_owned())])
            .await
    }
}
