use std::path::PathBuf;

use spodl::management::TrackManager;
use spodl::types::Track;

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("spodl-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    root
}

fn sample_tracks() -> Vec<Track> {
    vec![
        Track {
            name: "Don't Stop (Live)".to_string(),
            artist: "Band/X".to_string(),
            url: "https://open.spotify.com/track/1".to_string(),
            file_name: Some("DontStopLive.mp3".to_string()),
        },
        Track {
            name: "Second".to_string(),
            artist: "Other".to_string(),
            url: "https://open.spotify.com/track/2".to_string(),
            file_name: None,
        },
    ]
}

#[tokio::test]
async fn test_round_trip_preserves_tracks() {
    let root = temp_root("store-roundtrip");
    let tracks = sample_tracks();

    let manager = TrackManager::new(&root, Some(tracks.clone()));
    manager.persist().await.expect("persist should succeed");

    let loaded = TrackManager::new(&root, None)
        .load()
        .await
        .expect("load should succeed");
    assert_eq!(loaded.into_tracks(), tracks);
}

#[tokio::test]
async fn test_persist_overwrites_previous_file() {
    let root = temp_root("store-overwrite");

    let first = sample_tracks();
    TrackManager::new(&root, Some(first))
        .persist()
        .await
        .unwrap();

    let second = vec![Track {
        name: "Only".to_string(),
        artist: "One".to_string(),
        url: "u".to_string(),
        file_name: None,
    }];
    TrackManager::new(&root, Some(second.clone()))
        .persist()
        .await
        .unwrap();

    let loaded = TrackManager::new(&root, None).load().await.unwrap();
    assert_eq!(loaded.into_tracks(), second);
}

#[tokio::test]
async fn test_wire_format_uses_file_name_key() {
    let root = temp_root("store-wire");
    TrackManager::new(&root, Some(sample_tracks()))
        .persist()
        .await
        .unwrap();

    let json = std::fs::read_to_string(root.join("tracks.json")).unwrap();
    assert!(json.contains("\"tracks\""));
    assert!(json.contains("\"fileName\": \"DontStopLive.mp3\""));
    // Absent filenames are omitted, not serialized as null
    assert!(!json.contains("null"));
}

#[tokio::test]
async fn test_exists_reflects_store_file() {
    let root = temp_root("store-exists");
    let manager = TrackManager::new(&root, Some(sample_tracks()));
    assert!(!manager.exists());

    manager.persist().await.unwrap();
    assert!(manager.exists());
}

#[tokio::test]
async fn test_load_missing_file_is_an_error() {
    let root = temp_root("store-missing");
    assert!(TrackManager::new(&root, None).load().await.is_err());
}
