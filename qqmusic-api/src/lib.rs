//! QQ Music proxy-server API client.
//!
//! Async client for a self-hosted QQ Music proxy server, covering
//! authentication (QR and SMS login), search, songs, lyrics, albums,
//! artists, playlists, charts, MVs, user libraries, recommendations, and
//! comments.
//!
//! # Usage
//!
//! ```no_run
//! use qqmusic_api::types::QrLoginType;
//! use qqmusic_api::{ClientConfig, QQMusicClient};
//!
//! # async fn run() -> qqmusic_api::Result<()> {
//! let config = ClientConfig::new("http://192.168.1.10:8000".parse().unwrap());
//! let client = QQMusicClient::new(config)?;
//!
//! // Scan-to-login, then search.
//! let qr = client.create_qr_code(QrLoginType::Qq).await?;
//! let outcome = client.poll_qr_code(&qr.qr_id).await?;
//! println!("login finished: {:?}", outcome.state);
//!
//! let songs = client
//!     .search("周杰伦", qqmusic_api::types::SearchType::Song, 20, 1, false)
//!     .await?;
//! for song in qqmusic_api::helpers::songs_from_search(&songs) {
//!     println!("{} — {}", song.title, song.artist);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Request handling
//!
//! Every endpoint is a GET against `{base_url}{path}?{params}` whose body
//! is the uniform envelope `{code, message, data, errors, timestamp}`;
//! `code == 200` is the success signal regardless of HTTP status. The
//! client decodes the envelope before any success/failure decision,
//! retries only transport-class failures (with exponential backoff), and
//! propagates server-side rejections verbatim as
//! [`QQMusicError::Api`]. See [`client`] for the details.
//!
//! Endpoints with a stable payload shape decode into typed models
//! ([`types`]); the rest return the dynamic [`Json`] value, which offers
//! widening accessors and `value["key"]` indexing for defensive
//! extraction.

pub mod client;
pub mod error;
pub mod helpers;
pub mod json;
pub mod transport;
pub mod types;

mod album;
mod auth;
mod comment;
mod lyric;
mod mv;
mod poll;
mod recommend;
mod search;
mod song;
mod songlist;
mod top;
mod user;

pub use client::{ClientConfig, QQMusicClient};
pub use error::{QQMusicError, Result};
pub use json::Json;
