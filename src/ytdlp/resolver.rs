use std::{
    collections::HashMap,
    io::Error,
    path::{Path, PathBuf},
};

use reqwest::Client;
use sha2::{Digest, Sha256};

use crate::{info, success, warning};

/// Name of the digest manifest published alongside each yt-dlp release.
pub const MANIFEST_FILE: &str = "SHA2-256SUMS";

/// The three platforms an official standalone yt-dlp binary exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detects the platform the tool is running on.
    pub fn current() -> Result<Self, ResolverError> {
        if cfg!(target_os = "linux") {
            Ok(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Ok(Platform::MacOs)
        } else if cfg!(target_os = "windows") {
            Ok(Platform::Windows)
        } else {
            Err(ResolverError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ))
        }
    }

    /// Release asset name for this platform, also used as the local filename.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Platform::Linux => "yt-dlp_linux",
            Platform::MacOs => "yt-dlp_macos",
            Platform::Windows => "yt-dlp_min.exe",
        }
    }
}

#[derive(Debug)]
pub enum ResolverError {
    IoError(Error),
    Http(reqwest::Error),
    MissingManifestEntry(String),
    DigestMismatch { expected: String, actual: String },
    UnsupportedPlatform(String),
}

impl From<Error> for ResolverError {
    fn from(err: Error) -> Self {
        ResolverError::IoError(err)
    }
}

impl From<reqwest::Error> for ResolverError {
    fn from(err: reqwest::Error) -> Self {
        ResolverError::Http(err)
    }
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolverError::IoError(err) => write!(f, "I/O error: {}", err),
            ResolverError::Http(err) => write!(f, "HTTP error: {}", err),
            ResolverError::MissingManifestEntry(name) => {
                write!(f, "The digest manifest has no entry for {}", name)
            }
            ResolverError::DigestMismatch { expected, actual } => write!(
                f,
                "Digest mismatch: expected {} but computed {}",
                expected, actual
            ),
            ResolverError::UnsupportedPlatform(os) => {
                write!(f, "No official yt-dlp binary exists for {}", os)
            }
        }
    }
}

impl std::error::Error for ResolverError {}

/// Locates, downloads, and verifies the platform-specific yt-dlp binary.
///
/// The binary and the `SHA2-256SUMS` manifest are fetched from the same
/// release channel, so a manifest entry always describes the binary that the
/// channel currently serves.
pub struct Resolver {
    platform: Platform,
    install_dir: PathBuf,
    release_url: String,
}

impl Resolver {
    pub fn new(
        platform: Platform,
        install_dir: impl Into<PathBuf>,
        release_url: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            install_dir: install_dir.into(),
            release_url: release_url.into(),
        }
    }

    /// Path the binary lives at once resolved.
    pub fn binary_path(&self) -> PathBuf {
        self.install_dir.join(self.platform.binary_name())
    }

    /// Ensures a verified yt-dlp binary is present and returns its path.
    ///
    /// State machine per run:
    /// - binary absent: download, mark executable, verify against the
    ///   manifest; a mismatch is returned as
    ///   [`ResolverError::DigestMismatch`] (the CLI layer treats it as fatal
    ///   with exit code 1)
    /// - binary present and digest matches the current manifest:
    ///   short-circuits as already up to date
    /// - binary present but stale: one re-download-and-reverify cycle; a
    ///   mismatch after the fresh download is fatal as above
    pub async fn ensure_ready(&self) -> Result<PathBuf, ResolverError> {
        let manifest = self.fetch_manifest().await?;
        let expected = manifest
            .get(self.platform.binary_name())
            .ok_or_else(|| {
                ResolverError::MissingManifestEntry(self.platform.binary_name().to_string())
            })?
            .clone();

        let path = self.binary_path();
        if path.is_file() {
            let actual = file_digest(&path).await?;
            if actual == expected {
                info!("yt-dlp already exists and is up to date, skipping download..");
                return Ok(path);
            }
            warning!("Local yt-dlp no longer matches the published digest, updating..");
        } else {
            info!("Downloading yt-dlp..");
        }

        self.install(&expected).await?;
        success!("Downloaded and verified yt-dlp");
        Ok(path)
    }

    async fn install(&self, expected: &str) -> Result<(), ResolverError> {
        let url = format!("{}/{}", self.release_url, self.platform.binary_name());
        let bytes = Client::new()
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let path = self.binary_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        async_fs::write(&path, &bytes).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            async_fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).await?;
        }

        let actual = file_digest(&path).await?;
        if actual != expected {
            return Err(ResolverError::DigestMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
        Ok(())
    }

    async fn fetch_manifest(&self) -> Result<HashMap<String, String>, ResolverError> {
        let url = format!("{}/{}", self.release_url, MANIFEST_FILE);
        let body = Client::new()
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(parse_manifest(&body))
    }
}

/// Parses `digest  filename` manifest lines into a filename-keyed map.
///
/// Lines that do not carry both fields are skipped.
pub fn parse_manifest(body: &str) -> HashMap<String, String> {
    body.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let digest = parts.next()?;
            let name = parts.next()?;
            Some((name.to_string(), digest.to_lowercase()))
        })
        .collect()
}

/// Computes the lowercase hex SHA-256 digest of a file on disk.
pub async fn file_digest(path: &Path) -> Result<String, ResolverError> {
    let bytes = async_fs::read(path).await?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
