use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::process::Command;

use crate::{debug, info, success, types::Track, utils, warning};

// yt-dlp prints this when YouTube wants a signed-in session for the video.
const AGE_RESTRICTION_MARKER: &str = "Sign in to confirm your age";

#[derive(Debug)]
pub enum TrackDownloadError {
    Spawn(std::io::Error),
    AgeRestricted,
    Failed { stderr: String },
}

impl std::fmt::Display for TrackDownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackDownloadError::Spawn(err) => write!(f, "Failed to run yt-dlp: {}", err),
            TrackDownloadError::AgeRestricted => write!(f, "Video is age-restricted"),
            TrackDownloadError::Failed { stderr } => write!(f, "yt-dlp stderr: {}", stderr),
        }
    }
}

/// Per-batch outcome counts reported after the download loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub completed: usize,
    pub failed: usize,
}

/// Downloads audio for every track in the list, one subprocess at a time.
///
/// When the first record lacks a `fileName`, filenames are backfilled for
/// the whole collection before the loop starts, so a resumed `tracks.json`
/// scraped without filenames behaves the same as a fresh scrape.
///
/// Each track becomes one blocking yt-dlp invocation with best-quality
/// audio extraction to `<out_dir>/<fileName>` and a `ytsearch:` pseudo-URL
/// built from artist and title. Per-track failures are logged and counted
/// but never abort the batch; age-restricted videos get a distinguishing
/// message, all other failures a generic one with stderr detail behind
/// `debug_output`.
pub async fn download_tracks(
    tracks: Vec<Track>,
    binary: &Path,
    out_dir: &Path,
    debug_output: bool,
) -> DownloadSummary {
    let tracks = if tracks.first().is_some_and(|t| t.file_name.is_none()) {
        info!("No fileName property found, generating filenames..");
        utils::backfill_file_names(tracks)
    } else {
        tracks
    };

    let pb = ProgressBar::new(tracks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    let mut summary = DownloadSummary::default();
    for track in &tracks {
        pb.set_message(track.name.clone());
        info!("Downloading {}", track.name);

        match download_one(track, binary, out_dir).await {
            Ok(stdout) => {
                if debug_output {
                    debug!("yt-dlp stdout: {}", stdout);
                }
                success!("Downloaded {}", track.name);
                summary.completed += 1;
            }
            Err(TrackDownloadError::AgeRestricted) => {
                warning!("{} is age-restricted, skipping..", track.name);
                summary.failed += 1;
            }
            Err(err) => {
                warning!("Download errored for {}", track.name);
                if debug_output {
                    debug!("{}", err);
                }
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    summary
}

async fn download_one(
    track: &Track,
    binary: &Path,
    out_dir: &Path,
) -> Result<String, TrackDownloadError> {
    let file_name = track
        .file_name
        .clone()
        .unwrap_or_else(|| utils::track_file_name(&track.name));
    let out_path = out_dir.join(file_name);

    let output = Command::new(binary)
        .arg("-x")
        .args(["--audio-format", "mp3"])
        .args(["--audio-quality", "0"])
        .arg("--output")
        .arg(&out_path)
        .arg(utils::search_query(track))
        .output()
        .await
        .map_err(TrackDownloadError::Spawn)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.contains(AGE_RESTRICTION_MARKER) {
            Err(TrackDownloadError::AgeRestricted)
        } else {
            Err(TrackDownloadError::Failed { stderr })
        }
    }
}
