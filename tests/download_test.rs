#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use spodl::types::Track;
use spodl::ytdlp::download::{DownloadSummary, download_tracks};

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("spodl-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}

// Stand-in downloader: fails for any invocation mentioning "Track Two",
// otherwise records the invocation and succeeds.
fn fake_downloader(root: &PathBuf, log: &PathBuf) -> PathBuf {
    let script = root.join("fake-yt-dlp.sh");
    let body = format!(
        "#!/bin/sh\necho \"$@\" >> {}\ncase \"$*\" in\n  *\"Track Two\"*) exit 1 ;;\nesac\nexit 0\n",
        log.display()
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        artist: artist.to_string(),
        url: "u".to_string(),
        file_name: None,
    }
}

#[tokio::test]
async fn test_batch_continues_past_failing_track() {
    let root = temp_root("download-continue");
    let log = root.join("invocations.log");
    let binary = fake_downloader(&root, &log);
    let out_dir = root.join("tracks");
    std::fs::create_dir_all(&out_dir).unwrap();

    let tracks = vec![
        track("Track One", "A"),
        track("Track Two", "B"),
        track("Track Three", "C"),
    ];

    let summary = download_tracks(tracks, &binary, &out_dir, false).await;
    assert_eq!(
        summary,
        DownloadSummary {
            completed: 2,
            failed: 1
        }
    );

    // The failing second track must not stop the third invocation
    let invocations = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = invocations.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("ytsearch:C Track Three"));
}

#[tokio::test]
async fn test_invocation_carries_extraction_flags() {
    let root = temp_root("download-flags");
    let log = root.join("invocations.log");
    let binary = fake_downloader(&root, &log);
    let out_dir = root.join("tracks");
    std::fs::create_dir_all(&out_dir).unwrap();

    let summary = download_tracks(vec![track("Song (Live)", "Band")], &binary, &out_dir, false).await;
    assert_eq!(summary.completed, 1);

    let invocation = std::fs::read_to_string(&log).unwrap();
    assert!(invocation.contains("-x"));
    assert!(invocation.contains("--audio-format mp3"));
    assert!(invocation.contains("--audio-quality 0"));
    // Backfilled filename lands under the output directory
    assert!(invocation.contains(&out_dir.join("SongLive.mp3").display().to_string()));
    assert!(invocation.contains("ytsearch:Band Song (Live)"));
}

#[tokio::test]
async fn test_missing_binary_counts_as_failure() {
    let root = temp_root("download-missing");
    let out_dir = root.join("tracks");
    std::fs::create_dir_all(&out_dir).unwrap();

    let summary = download_tracks(
        vec![track("Anything", "Anyone")],
        &root.join("does-not-exist"),
        &out_dir,
        false,
    )
    .await;
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.completed, 0);
}
