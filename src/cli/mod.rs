//! # CLI Module
//!
//! This module implements the user-facing pipeline of the tool: scrape a
//! playlist's track listing from the Spotify Web API, persist it as
//! `tracks.json`, resolve a verified yt-dlp binary, and download audio for
//! every track.
//!
//! ## Pipeline
//!
//! [`run`] executes the stages strictly in sequence:
//!
//! ```text
//! Config (validated intake)
//!     ↓
//! tracks/ directory (keep-or-delete prompt when it already exists)
//!     ↓
//! tracks.json (resume prompt when it already exists)
//!     ↓
//! Playlist scrape (token exchange → track page → normalize → persist)
//!     ↓
//! Download confirmation (decline exits cleanly)
//!     ↓
//! yt-dlp resolution (download + digest verification)
//!     ↓
//! Per-track downloads (failures logged, batch continues)
//! ```
//!
//! The scraped collection is an owned `Vec<Track>` handed from stage to
//! stage; no stage reaches for ambient shared state. All interactive
//! questions go through the [`crate::prompt::UserInput`] port so the whole
//! pipeline can be driven non-interactively.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal configuration and upstream errors** (missing credentials,
//!   invalid client/secret, unknown playlist) terminate through the
//!   `error!` macro with a user-facing message
//! - **Fatal integrity errors** (yt-dlp digest mismatch) terminate with
//!   exit code 1 and manual-remediation instructions
//! - **Recoverable per-track errors** are logged and skipped inside the
//!   download loop

mod run;

pub use run::run;
