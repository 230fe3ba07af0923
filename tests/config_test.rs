use spodl::config::Config;

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_intake() {
    let config = Config::from_args(&args(&[
        "cid=my-id",
        "secret=my-secret",
        "playlist=1YIe34rcmLjCYpY9wJoM2p",
        "log=DEBUG",
    ]))
    .unwrap();

    assert_eq!(config.client_id, "my-id");
    assert_eq!(config.client_secret, "my-secret");
    assert_eq!(config.playlist.as_deref(), Some("1YIe34rcmLjCYpY9wJoM2p"));
    assert!(config.debug);
}

#[test]
fn test_playlist_is_optional() {
    // The pipeline prompts for a missing playlist ID later
    let config = Config::from_args(&args(&["cid=a", "secret=b"])).unwrap();
    assert_eq!(config.playlist, None);
    assert!(!config.debug);
}

#[test]
fn test_log_gate_requires_debug_value() {
    let config = Config::from_args(&args(&["cid=a", "secret=b", "log=info"])).unwrap();
    assert!(!config.debug);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = Config::from_args(&args(&["cid=a", "secret=b", "bogus=1", "noequals"])).unwrap();
    assert_eq!(config.client_id, "a");
}

#[test]
fn test_value_may_contain_equals() {
    let config = Config::from_args(&args(&["cid=a", "secret=b=c=d"])).unwrap();
    assert_eq!(config.client_secret, "b=c=d");
}

#[test]
fn test_missing_credentials_is_an_error() {
    // Relies on SPOTIFY_CLIENT_ID/SECRET not being set in the test env
    if std::env::var("SPOTIFY_CLIENT_ID").is_ok() {
        return;
    }
    let result = Config::from_args(&args(&["playlist=xyz"]));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("developer.spotify.com"));
}
