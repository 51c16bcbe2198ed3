//! Convenience helpers: artwork URL templates and search-result parsing.
//!
//! Cover and avatar images are served from a CDN, not the proxy; their
//! URLs are derived from an album or artist mid. Search results come back
//! as loosely shaped [`Json`] objects whose field names vary with server
//! version, so [`SongInfo`] extracts the common fields defensively.

use reqwest::Url;

use crate::client::QQMusicClient;
use crate::json::Json;

const ARTWORK_BASE: &str = "https://y.gtimg.cn/music/photo_new";

impl QQMusicClient {
    /// Album cover URL for `mid` at `size` pixels (150/300/500/800).
    pub fn album_cover_url(mid: &str, size: u32) -> Option<Url> {
        Url::parse(&format!("{ARTWORK_BASE}/T002R{size}x{size}M000{mid}.jpg")).ok()
    }

    /// Artist avatar URL for `mid` at `size` pixels (150/300/500/800).
    pub fn singer_avatar_url(mid: &str, size: u32) -> Option<Url> {
        Url::parse(&format!("{ARTWORK_BASE}/T001R{size}x{size}M000{mid}.jpg")).ok()
    }
}

/// Common song fields extracted from one search-result object.
///
/// Extraction tolerates the known field-name variants (`mid`/`songmid`,
/// `title`/`name`, `album.mid`/`album.pmid`) and fails only when no
/// usable song mid is present.
#[derive(Debug, Clone)]
pub struct SongInfo {
    /// Song mid.
    pub mid: String,
    /// Song title.
    pub title: String,
    /// Artist names, joined with ` / `.
    pub artist: String,
    /// Album title.
    pub album_name: String,
    /// Album mid, for cover artwork.
    pub album_mid: String,
}

impl SongInfo {
    /// Extract from one search-result object; `None` when no song mid is
    /// present.
    pub fn from_json(json: &Json) -> Option<Self> {
        let mid = json["mid"]
            .as_string()
            .or_else(|| json["songmid"].as_string())
            .unwrap_or_default();
        if mid.is_empty() {
            return None;
        }

        let title = json["title"]
            .as_string()
            .or_else(|| json["name"].as_string())
            .unwrap_or_default();

        let artist = json["singer"].as_array().map_or_else(String::new, |singers| {
            singers
                .iter()
                .filter_map(|s| s["name"].as_string().or_else(|| s["title"].as_string()))
                .collect::<Vec<_>>()
                .join(" / ")
        });

        let album = &json["album"];
        let album_name = album["name"]
            .as_string()
            .or_else(|| album["title"].as_string())
            .unwrap_or_default();
        let album_mid = album["mid"]
            .as_string()
            .or_else(|| album["pmid"].as_string())
            .unwrap_or_default();

        Some(Self {
            mid,
            title,
            artist,
            album_name,
            album_mid,
        })
    }

    /// Cover artwork URL at the default size.
    pub fn cover_url(&self) -> Option<Url> {
        QQMusicClient::album_cover_url(&self.album_mid, 300)
    }
}

/// Convert raw search results into [`SongInfo`] entries, skipping
/// elements without a usable mid.
pub fn songs_from_search(results: &[Json]) -> Vec<SongInfo> {
    results.iter().filter_map(SongInfo::from_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_urls_embed_mid_and_size() {
        let url = QQMusicClient::album_cover_url("003rytri2FHG3V", 500).unwrap();
        assert_eq!(
            url.as_str(),
            "https://y.gtimg.cn/music/photo_new/T002R500x500M000003rytri2FHG3V.jpg"
        );
        let url = QQMusicClient::singer_avatar_url("0025NhlN2yWrP4", 300).unwrap();
        assert!(url.as_str().contains("T001R300x300M0000025NhlN2yWrP4"));
    }

    #[test]
    fn song_info_reads_the_primary_field_names() {
        let json = Json::parse(
            r#"{
                "mid": "001yS0N31jFfpK",
                "title": "晴天",
                "singer": [{"name": "周杰伦"}],
                "album": {"name": "叶惠美", "mid": "000MkMni19ClKG"}
            }"#
            .as_bytes(),
        )
        .unwrap();
        let info = SongInfo::from_json(&json).unwrap();
        assert_eq!(info.mid, "001yS0N31jFfpK");
        assert_eq!(info.title, "晴天");
        assert_eq!(info.artist, "周杰伦");
        assert_eq!(info.album_name, "叶惠美");
        assert!(
            info.cover_url()
                .unwrap()
                .as_str()
                .contains("000MkMni19ClKG")
        );
    }

    #[test]
    fn song_info_falls_back_to_variant_field_names() {
        let json = Json::parse(
            r#"{
                "songmid": "002xyz",
                "name": "歌名",
                "singer": [{"title": "歌手A"}, {"title": "歌手B"}],
                "album": {"title": "专辑", "pmid": "003abc"}
            }"#
            .as_bytes(),
        )
        .unwrap();
        let info = SongInfo::from_json(&json).unwrap();
        assert_eq!(info.mid, "002xyz");
        assert_eq!(info.title, "歌名");
        assert_eq!(info.artist, "歌手A / 歌手B");
        assert_eq!(info.album_mid, "003abc");
    }

    #[test]
    fn song_info_requires_a_mid() {
        let no_mid = Json::parse(br#"{"title": "x"}"#).unwrap();
        assert!(SongInfo::from_json(&no_mid).is_none());
        assert!(SongInfo::from_json(&Json::Null).is_none());
    }

    #[test]
    fn songs_from_search_skips_unusable_entries() {
        let results = Json::parse(
            br#"[
                {"mid": "aaa", "title": "one"},
                {"title": "no mid"},
                {"mid": "bbb", "title": "two"}
            ]"#,
        )
        .unwrap();
        let songs = songs_from_search(results.as_array().unwrap());
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].mid, "aaa");
        assert_eq!(songs[1].mid, "bbb");
    }
}
