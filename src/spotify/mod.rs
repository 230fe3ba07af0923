//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! scraper: an OAuth 2.0 client-credentials token exchange and the
//! playlist-tracks read endpoint. It handles all HTTP communication, typed
//! response decoding, and error classification for the two upstream calls.
//!
//! ## Overview
//!
//! Unlike user-scoped flows, the client-credentials grant needs no browser,
//! no callback server, and no refresh handling: one token is obtained per
//! run and used for the single playlist fetch that follows. The module is
//! therefore deliberately small:
//!
//! ```text
//! Pipeline Layer (cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     └── Playlist Operations (track listing)
//!          ↓
//! HTTP Layer (reqwest, serde_json)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Upstream failures map to the typed [`ScrapeError`]:
//!
//! - **401 on the token endpoint** → [`ScrapeError::InvalidCredentials`],
//!   a fatal user-facing condition (wrong client ID or secret)
//! - **404 on the playlist endpoint** → [`ScrapeError::UnknownPlaylist`],
//!   a fatal user-facing condition (bad playlist ID)
//! - **Shape mismatch in a response body** → [`ScrapeError::Parse`], so a
//!   schema drift surfaces as a decode error instead of a field-access panic
//! - **Transport failures** → [`ScrapeError::Http`]
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - first page of the playlist track listing
//!
//! Pagination past the first page is a known limitation of the tool; the
//! pipeline warns when the page reports a continuation cursor.
//!
//! ## Configuration Integration
//!
//! Endpoint URLs are passed in by the caller (sourced from [`crate::config`]
//! accessors with env overrides), which keeps both functions pointable at a
//! local mock server in tests.

use std::fmt;

pub mod auth;
pub mod playlist;

/// Errors raised while exchanging credentials or fetching the playlist.
#[derive(Debug)]
pub enum ScrapeError {
    Http(reqwest::Error),
    InvalidCredentials,
    UnknownPlaylist(String),
    Parse(serde_json::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Http(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Parse(err)
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Http(err) => write!(f, "HTTP error: {}", err),
            ScrapeError::InvalidCredentials => write!(
                f,
                "The client or secret provided are invalid, please check them and try again."
            ),
            ScrapeError::UnknownPlaylist(id) => {
                write!(f, "The playlist ID provided is invalid: {}", id)
            }
            ScrapeError::Parse(err) => write!(f, "Unexpected response shape: {}", err),
        }
    }
}

impl std::error::Error for ScrapeError {}
