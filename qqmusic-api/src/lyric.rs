//! Lyric API.
//!
//! Endpoint: `GET /lyric/get_lyric`
//!
//! Query parameters:
//! - `value` — song id or mid
//! - `qrc` — word-level-timing (QRC) lyrics instead of line-level LRC
//! - `trans` — include a translation
//! - `roma` — include a romanization
//!
//! Response `data`:
//! ```json
//! {
//!   "lyric": "[00:12.34]歌词...",
//!   "trans": "[00:12.34]translation...",
//!   "roma":  "[00:12.34]ge ci..."
//! }
//! ```
//!
//! Any of the three fields may be absent or empty (instrumental tracks,
//! missing translations).

use crate::client::QQMusicClient;
use crate::error::Result;
use crate::types::LyricResult;

impl QQMusicClient {
    /// Get lyrics for a song (id or mid).
    pub async fn lyric(
        &self,
        value: &str,
        qrc: bool,
        trans: bool,
        roma: bool,
    ) -> Result<LyricResult> {
        self.request(
            "/lyric/get_lyric",
            &[
                ("value", value.to_owned()),
                ("qrc", qrc.to_string()),
                ("trans", trans.to_string()),
                ("roma", roma.to_string()),
            ],
        )
        .await
    }
}
