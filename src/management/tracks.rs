use std::{io::Error, path::PathBuf};

use crate::types::{Track, TrackList};

#[derive(Debug)]
pub enum TrackStoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for TrackStoreError {
    fn from(err: Error) -> Self {
        TrackStoreError::IoError(err)
    }
}

impl std::fmt::Display for TrackStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackStoreError::IoError(err) => write!(f, "I/O error: {}", err),
            TrackStoreError::SerdeError(err) => write!(f, "JSON error: {}", err),
        }
    }
}

/// Persists the scraped track list as `tracks.json` under a root directory.
///
/// The collection is written and read wholesale; there is no partial update
/// and no atomic-write guarantee (a crash mid-write can leave a truncated
/// file, accepted for a best-effort tool).
pub struct TrackManager {
    root: PathBuf,
    tracks: Vec<Track>,
}

impl TrackManager {
    pub fn new(root: impl Into<PathBuf>, tracks: Option<Vec<Track>>) -> Self {
        Self {
            root: root.into(),
            tracks: tracks.unwrap_or_default(),
        }
    }

    pub async fn load(&self) -> Result<Self, TrackStoreError> {
        let path = self.store_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(TrackStoreError::IoError)?;
        let list: TrackList =
            serde_json::from_str(&content).map_err(TrackStoreError::SerdeError)?;
        Ok(Self {
            root: self.root.clone(),
            tracks: list.tracks,
        })
    }

    pub async fn persist(&self) -> Result<(), TrackStoreError> {
        let path = self.store_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(TrackStoreError::IoError)?;
        }

        let list = TrackList {
            tracks: self.tracks.clone(),
        };
        let json = serde_json::to_string_pretty(&list).map_err(TrackStoreError::SerdeError)?;
        async_fs::write(&path, json)
            .await
            .map_err(TrackStoreError::IoError)
    }

    pub fn exists(&self) -> bool {
        self.store_path().is_file()
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join("tracks.json")
    }
}
