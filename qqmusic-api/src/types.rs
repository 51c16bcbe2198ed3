//! Data types for QQ Music proxy API responses.
//!
//! Every endpoint wraps its payload in the same [`ApiResponse`] envelope;
//! the typed models here are deserialized from the `data` field. Field
//! names follow Rust conventions (`snake_case`), matching the proxy's
//! wire naming where they coincide and renamed where they do not.

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use serde::Deserialize;

/// Unified response envelope returned by every proxy endpoint.
///
/// ```json
/// {
///   "code": 200,
///   "message": "OK",
///   "data": { ...endpoint-specific... },
///   "errors": null,
///   "timestamp": 1754500000
/// }
/// ```
///
/// `code == 200` is the sole success signal. The HTTP status is not
/// authoritative: error envelopes are routinely served with HTTP 200, so
/// classification always decodes the envelope first.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Envelope status code (200 = success).
    pub code: i64,
    /// Human-readable status message.
    pub message: String,
    /// Endpoint-specific payload; absent on failure.
    pub data: Option<T>,
    /// Additional error diagnostics supplied by the server.
    pub errors: Option<Vec<String>>,
    /// Server-side UNIX timestamp of the response.
    pub timestamp: Option<i64>,
}

// ---------------------------------------------------------------------------
// Authentication

/// Server-side login state.
///
/// API JSON fields: `logged_in`, `musicid`, `login_type`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    /// Whether the proxy holds a valid login session.
    pub logged_in: bool,
    /// QQ Music account ID, when logged in.
    pub musicid: Option<i64>,
    /// Login type reported by the server.
    pub login_type: Option<i64>,
}

/// Login QR code handed out by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct QrCode {
    /// Opaque ID used to poll the scan status.
    pub qr_id: String,
    /// QR image as a data URL (`data:image/png;base64,...`).
    pub image: String,
}

impl QrCode {
    /// Decode the embedded image into raw PNG bytes.
    ///
    /// Returns `None` if the data-URL payload is not valid base64.
    pub fn image_data(&self) -> Option<Vec<u8>> {
        let encoded = self.image.rsplit(',').next()?;
        B64.decode(encoded).ok()
    }
}

/// QR scan lifecycle state.
///
/// Wire tokens: `SCAN`, `CONF`, `DONE`, `TIMEOUT`, `REFUSE`.
/// [`TimedOut`](QrState::TimedOut) is produced client-side when polling
/// hits its deadline; it never appears on the wire. An unrecognized token
/// is a decode error, not a silent non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QrState {
    /// Waiting to be scanned.
    #[serde(rename = "SCAN")]
    Pending,
    /// Scanned, waiting for in-app confirmation.
    #[serde(rename = "CONF")]
    Scanned,
    /// Login confirmed.
    #[serde(rename = "DONE")]
    Confirmed,
    /// The QR code expired server-side.
    #[serde(rename = "TIMEOUT")]
    Expired,
    /// The user refused the login.
    #[serde(rename = "REFUSE")]
    Refused,
    /// Polling gave up before the server reported a terminal state.
    #[serde(skip)]
    TimedOut,
}

impl QrState {
    /// Whether polling can stop at this state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Confirmed | Self::Expired | Self::Refused | Self::TimedOut
        )
    }
}

/// Result of one QR status check.
#[derive(Debug, Clone, Deserialize)]
pub struct QrStatus {
    /// Current scan state.
    #[serde(rename = "status")]
    pub state: QrState,
    /// Account ID, present once login is confirmed.
    pub musicid: Option<i64>,
}

/// QR login flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrLoginType {
    /// Log in with a QQ account.
    Qq,
    /// Log in with a WeChat account.
    Wx,
}

impl QrLoginType {
    /// Wire token for the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qq => "qq",
            Self::Wx => "wx",
        }
    }
}

/// SMS send outcome (`SEND` or `CAPTCHA` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PhoneSendState {
    /// Verification code sent.
    #[serde(rename = "SEND")]
    Sent,
    /// A slider captcha must be completed before the code can be sent.
    #[serde(rename = "CAPTCHA")]
    Captcha,
}

/// Result of requesting an SMS verification code.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneSendStatus {
    /// Send outcome.
    #[serde(rename = "status")]
    pub state: PhoneSendState,
    /// Captcha URL the user must visit first, when required.
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Lyrics

/// Lyrics for one track.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricResult {
    /// Original lyrics (LRC, or QRC when word-level timing was requested).
    pub lyric: Option<String>,
    /// Translated lyrics.
    pub trans: Option<String>,
    /// Romanized lyrics.
    pub roma: Option<String>,
}

impl LyricResult {
    /// Whether any original lyric text is present.
    pub fn has_lyric(&self) -> bool {
        self.lyric.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Whether a translation is present.
    pub fn has_translation(&self) -> bool {
        self.trans.as_ref().is_some_and(|v| !v.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Songs

/// Playback URL plus decryption key for an encrypted download.
///
/// Encrypted files (`.mflac` / `.mgg`) must be decrypted with `ekey`
/// before playback.
#[derive(Debug, Clone)]
pub struct EncryptedSongUrl {
    /// Download URL.
    pub url: String,
    /// Decryption key for the payload.
    pub ekey: String,
}

/// Audio file type / quality tier, mapped to the API `file_type` parameter.
///
/// The server returns the best available quality up to the requested
/// tier, subject to the account's VIP level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongFileType {
    /// 臻品母带 24Bit 192kHz.
    Master,
    /// 臻品全景声 16Bit 44.1kHz.
    Atmos2,
    /// 臻品音质 16Bit 44.1kHz.
    Atmos51,
    /// FLAC 无损 16Bit~24Bit.
    Flac,
    /// OGG 640kbps.
    Ogg640,
    /// OGG 320kbps.
    Ogg320,
    /// OGG 192kbps.
    Ogg192,
    /// OGG 96kbps.
    Ogg96,
    /// MP3 320kbps.
    Mp3_320,
    /// MP3 128kbps.
    Mp3_128,
    /// AAC 192kbps.
    Aac192,
    /// AAC 96kbps.
    Aac96,
    /// AAC 48kbps.
    Aac48,
}

impl SongFileType {
    /// Wire token for the `file_type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Atmos2 => "ATMOS_2",
            Self::Atmos51 => "ATMOS_51",
            Self::Flac => "FLAC",
            Self::Ogg640 => "OGG_640",
            Self::Ogg320 => "OGG_320",
            Self::Ogg192 => "OGG_192",
            Self::Ogg96 => "OGG_96",
            Self::Mp3_320 => "MP3_320",
            Self::Mp3_128 => "MP3_128",
            // The server really spells these ACC.
            Self::Aac192 => "ACC_192",
            Self::Aac96 => "ACC_96",
            Self::Aac48 => "ACC_48",
        }
    }

    /// Display label for quality pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Master => "臻品母带 (24Bit 192kHz)",
            Self::Atmos2 => "臻品全景声",
            Self::Atmos51 => "臻品音质",
            Self::Flac => "FLAC 无损",
            Self::Ogg640 => "OGG 640kbps",
            Self::Ogg320 => "OGG 320kbps",
            Self::Ogg192 => "OGG 192kbps",
            Self::Ogg96 => "OGG 96kbps",
            Self::Mp3_320 => "MP3 320kbps",
            Self::Mp3_128 => "MP3 128kbps",
            Self::Aac192 => "AAC 192kbps",
            Self::Aac96 => "AAC 96kbps",
            Self::Aac48 => "AAC 48kbps",
        }
    }

    /// Common tiers, best first (for UI pickers).
    pub fn common_options() -> [Self; 6] {
        [
            Self::Master,
            Self::Flac,
            Self::Ogg320,
            Self::Mp3_320,
            Self::Mp3_128,
            Self::Aac96,
        ]
    }
}

/// Encrypted audio file type (`.mflac` / `.mgg` downloads).
///
/// Sent on the wire with an `EncryptedSongFileType.` prefix, matching the
/// server's parameter convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptedSongFileType {
    /// 臻品母带 24Bit 192kHz.
    Master,
    /// 臻品全景声 16Bit 44.1kHz.
    Atmos2,
    /// 臻品音质 16Bit 44.1kHz.
    Atmos51,
    /// FLAC 无损 16Bit~24Bit.
    Flac,
    /// OGG 640kbps.
    Ogg640,
    /// OGG 320kbps.
    Ogg320,
    /// OGG 192kbps.
    Ogg192,
    /// OGG 96kbps.
    Ogg96,
}

impl EncryptedSongFileType {
    /// Wire token, without the `EncryptedSongFileType.` prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Atmos2 => "ATMOS_2",
            Self::Atmos51 => "ATMOS_51",
            Self::Flac => "FLAC",
            Self::Ogg640 => "OGG_640",
            Self::Ogg320 => "OGG_320",
            Self::Ogg192 => "OGG_192",
            Self::Ogg96 => "OGG_96",
        }
    }
}

// ---------------------------------------------------------------------------
// Search and browse filters

/// Search target type, mapped to the API `search_type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Songs.
    Song,
    /// Artists.
    Singer,
    /// Albums.
    Album,
    /// Playlists.
    Songlist,
    /// Music videos.
    Mv,
    /// Lyrics.
    Lyric,
    /// Users.
    User,
}

impl SearchType {
    /// Wire token for the `search_type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Song => "SONG",
            Self::Singer => "SINGER",
            Self::Album => "ALBUM",
            Self::Songlist => "SONGLIST",
            Self::Mv => "MV",
            Self::Lyric => "LYRIC",
            Self::User => "USER",
        }
    }
}

/// Artist region filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaType {
    /// No filter.
    All,
    /// 内地.
    China,
    /// 港台.
    Taiwan,
    /// 欧美.
    America,
    /// 日本.
    Japan,
    /// 韩国.
    Korea,
}

impl AreaType {
    /// Wire token for the `area` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::China => "CHINA",
            Self::Taiwan => "TAIWAN",
            Self::America => "AMERICA",
            Self::Japan => "JAPAN",
            Self::Korea => "KOREA",
        }
    }
}

/// Artist gender / lineup filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexType {
    /// No filter.
    All,
    /// 男.
    Male,
    /// 女.
    Female,
    /// 组合.
    Group,
}

impl SexType {
    /// Wire token for the `sex` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Group => "GROUP",
        }
    }
}

/// Artist genre filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreType {
    /// No filter.
    All,
    /// 流行.
    Pop,
    /// 说唱.
    Rap,
    /// 摇滚.
    Rock,
    /// 电子.
    Electronic,
    /// 民谣.
    Folk,
    /// R&B.
    Rnb,
    /// 爵士.
    Jazz,
    /// 古典.
    Classical,
}

impl GenreType {
    /// Wire token for the `genre` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Pop => "POP",
            Self::Rap => "RAP",
            Self::Rock => "ROCK",
            Self::Electronic => "ELECTRONIC",
            Self::Folk => "FOLK",
            Self::Rnb => "R_AND_B",
            Self::Jazz => "JAZZ",
            Self::Classical => "CLASSICAL",
        }
    }
}

/// Artist profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingerTabType {
    /// 百科.
    Wiki,
    /// 演唱歌曲.
    Song,
    /// 专辑.
    Album,
    /// 作曲.
    Composer,
    /// 作词.
    Lyricist,
    /// 制作人.
    Producer,
    /// 编曲.
    Arranger,
    /// 乐手.
    Musician,
    /// 视频.
    Video,
}

impl SingerTabType {
    /// Wire token for the `tab_type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wiki => "wiki",
            Self::Song => "song_sing",
            Self::Album => "album",
            Self::Composer => "song_composing",
            Self::Lyricist => "song_lyric",
            Self::Producer => "producer",
            Self::Arranger => "arranger",
            Self::Musician => "musician",
            Self::Video => "video",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::Json;

    #[test]
    fn envelope_decodes_success_shape() {
        let body = br#"{"code":200,"message":"OK","data":{"x":1},"errors":null,"timestamp":1754500000}"#;
        let resp: ApiResponse<Json> = serde_json::from_slice(body).unwrap();
        assert_eq!(resp.code, 200);
        assert_eq!(resp.message, "OK");
        assert_eq!(resp.data.unwrap()["x"].as_int(), Some(1));
        assert_eq!(resp.timestamp, Some(1_754_500_000));
    }

    #[test]
    fn envelope_decodes_error_shape_without_data() {
        let body = br#"{"code":500,"message":"boom","errors":["bad mid"]}"#;
        let resp: ApiResponse<Json> = serde_json::from_slice(body).unwrap();
        assert_eq!(resp.code, 500);
        assert!(resp.data.is_none());
        assert_eq!(resp.errors.unwrap(), vec!["bad mid".to_owned()]);
    }

    #[test]
    fn qr_state_maps_wire_tokens() {
        let status: QrStatus =
            serde_json::from_str(r#"{"status":"SCAN","musicid":null}"#).unwrap();
        assert_eq!(status.state, QrState::Pending);
        assert!(!status.state.is_terminal());

        let status: QrStatus =
            serde_json::from_str(r#"{"status":"DONE","musicid":10001}"#).unwrap();
        assert_eq!(status.state, QrState::Confirmed);
        assert!(status.state.is_terminal());
        assert_eq!(status.musicid, Some(10001));
    }

    #[test]
    fn unknown_qr_token_is_a_decode_error() {
        let result = serde_json::from_str::<QrStatus>(r#"{"status":"WAT"}"#);
        assert!(result.is_err());
        // The synthetic state is client-only and never decodes.
        assert!(serde_json::from_str::<QrState>(r#""TimedOut""#).is_err());
    }

    #[test]
    fn qr_image_data_strips_the_data_url_header() {
        let qr = QrCode {
            qr_id: "x".into(),
            image: "data:image/png;base64,aGVsbG8=".into(),
        };
        assert_eq!(qr.image_data().unwrap(), b"hello");

        let bare = QrCode {
            qr_id: "x".into(),
            image: "aGVsbG8=".into(),
        };
        assert_eq!(bare.image_data().unwrap(), b"hello");
    }

    #[test]
    fn phone_send_state_maps_wire_tokens() {
        let sent: PhoneSendStatus = serde_json::from_str(r#"{"status":"SEND"}"#).unwrap();
        assert_eq!(sent.state, PhoneSendState::Sent);
        assert!(sent.url.is_none());

        let captcha: PhoneSendStatus =
            serde_json::from_str(r#"{"status":"CAPTCHA","url":"https://c.y.qq.com/v"}"#).unwrap();
        assert_eq!(captcha.state, PhoneSendState::Captcha);
        assert!(captcha.url.is_some());
    }

    #[test]
    fn lyric_presence_ignores_empty_strings() {
        let lyric: LyricResult =
            serde_json::from_str(r#"{"lyric":"[00:01.00]词","trans":""}"#).unwrap();
        assert!(lyric.has_lyric());
        assert!(!lyric.has_translation());
    }

    #[test]
    fn enum_wire_tokens() {
        assert_eq!(SearchType::Songlist.as_str(), "SONGLIST");
        assert_eq!(SongFileType::Aac96.as_str(), "ACC_96");
        assert_eq!(GenreType::Rnb.as_str(), "R_AND_B");
        assert_eq!(SingerTabType::Composer.as_str(), "song_composing");
        assert_eq!(QrLoginType::Wx.as_str(), "wx");
    }
}
