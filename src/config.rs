//! Configuration management for the playlist downloader.
//!
//! This module handles the `key=value` command-line intake and access to
//! configuration values from environment variables and `.env` files. It
//! provides a centralized way to manage application configuration including
//! Spotify API credentials, the playlist identifier, and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line `key=value` tokens (highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (endpoint URLs)

use std::{collections::HashMap, env, path::PathBuf};

/// Runtime configuration assembled from the command line and environment.
///
/// Read-only after intake: every pipeline stage receives a shared reference
/// and no stage mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub playlist: Option<String>,
    pub debug: bool,
}

impl Config {
    /// Builds a `Config` from raw `key=value` command-line tokens.
    ///
    /// Recognized keys are `cid`, `secret`, `playlist` and `log`; unknown
    /// keys are ignored. Missing `cid`/`secret` fall back to the
    /// `SPOTIFY_CLIENT_ID`/`SPOTIFY_CLIENT_SECRET` environment variables.
    /// A missing playlist ID is not an error here; the pipeline prompts for
    /// it interactively. `log=DEBUG` enables verbose subprocess output.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when no client ID or secret can be
    /// found in either the arguments or the environment.
    ///
    /// # Example
    ///
    /// ```
    /// let args = vec!["cid=abc".to_string(), "secret=def".to_string()];
    /// let config = Config::from_args(&args)?;
    /// ```
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut values: HashMap<&str, &str> = HashMap::new();
        for arg in args {
            if let Some((key, value)) = arg.split_once('=') {
                values.insert(key, value);
            }
        }

        let client_id = values
            .get("cid")
            .map(|v| v.to_string())
            .or_else(|| env::var("SPOTIFY_CLIENT_ID").ok());
        let client_secret = values
            .get("secret")
            .map(|v| v.to_string())
            .or_else(|| env::var("SPOTIFY_CLIENT_SECRET").ok());

        let (client_id, client_secret) = match (client_id, client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(
                    "The Spotify client ID and secret are required to run this tool. \
                     Get them from https://developer.spotify.com/dashboard/applications \
                     and run again like this:\nspodl cid=Client_ID secret=Client_Secret playlist=Playlist_ID"
                        .to_string(),
                );
            }
        };

        Ok(Config {
            client_id,
            client_secret,
            playlist: values.get("playlist").map(|v| v.to_string()),
            debug: values.get("log").is_some_and(|v| *v == "DEBUG"),
        })
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spodl/.env`. This allows users to store
/// credentials without passing them on every invocation.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spodl/.env`
/// - macOS: `~/Library/Application Support/spodl/.env`
/// - Windows: `%LOCALAPPDATA%/spodl/.env`
///
/// A missing `.env` file is not an error; credentials may still arrive via
/// the command line.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spodl/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the OAuth token endpoint used for the client-credentials exchange.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, falling back to
/// the production accounts endpoint. The override exists so tests can point
/// the scraper at a local mock server.
///
/// # Example
///
/// ```
/// let url = spotify_token_url(); // "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to the
/// production Web API base.
///
/// # Example
///
/// ```
/// let url = spotify_api_url(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the release channel URL for yt-dlp binaries and their manifest.
///
/// Reads the `YTDLP_RELEASE_URL` environment variable, falling back to the
/// latest-release download channel on GitHub. Both the platform binaries and
/// the `SHA2-256SUMS` digest manifest are fetched from this base.
pub fn ytdlp_release_url() -> String {
    env::var("YTDLP_RELEASE_URL")
        .unwrap_or_else(|_| "https://github.com/yt-dlp/yt-dlp/releases/latest/download".to_string())
}
