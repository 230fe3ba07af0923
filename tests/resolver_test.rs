use std::path::PathBuf;

use axum::{Router, routing::get};
use sha2::{Digest, Sha256};

use spodl::ytdlp::resolver::{MANIFEST_FILE, Platform, Resolver, ResolverError, parse_manifest};

const BINARY_NAME: &str = "yt-dlp_linux";

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("spodl-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn digest_of(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

// Serves a release channel with the given manifest body and binary bytes.
async fn serve_release(manifest: String, binary: Vec<u8>) -> String {
    let router = Router::new()
        .route(
            &format!("/{}", MANIFEST_FILE),
            get(move || async move { manifest }),
        )
        .route(
            &format!("/{}", BINARY_NAME),
            get(move || async move { binary }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock release server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fresh_install_downloads_and_verifies() {
    let root = temp_root("resolver-fresh");
    let content = b"fake yt-dlp binary v1".to_vec();
    let manifest = format!("{}  {}\n", digest_of(&content), BINARY_NAME);
    let base = serve_release(manifest, content.clone()).await;

    let resolver = Resolver::new(Platform::Linux, &root, base);
    let path = resolver.ensure_ready().await.expect("install should verify");

    assert_eq!(path, root.join(BINARY_NAME));
    assert_eq!(std::fs::read(&path).unwrap(), content);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[tokio::test]
async fn test_digest_mismatch_does_not_mark_binary_ready() {
    let root = temp_root("resolver-mismatch");
    let content = b"fake yt-dlp binary v1".to_vec();
    // Manifest advertises a digest that the served binary does not have
    let manifest = format!("{}  {}\n", digest_of(b"something else"), BINARY_NAME);
    let base = serve_release(manifest, content).await;

    let resolver = Resolver::new(Platform::Linux, &root, base);
    let result = resolver.ensure_ready().await;
    assert!(matches!(
        result,
        Err(ResolverError::DigestMismatch { .. })
    ));
}

#[tokio::test]
async fn test_up_to_date_binary_short_circuits() {
    let root = temp_root("resolver-uptodate");
    let content = b"fake yt-dlp binary v1".to_vec();
    std::fs::write(root.join(BINARY_NAME), &content).unwrap();

    let manifest = format!("{}  {}\n", digest_of(&content), BINARY_NAME);
    // Serve different bytes: a short-circuit must never re-download
    let base = serve_release(manifest, b"would clobber".to_vec()).await;

    let resolver = Resolver::new(Platform::Linux, &root, base);
    let path = resolver.ensure_ready().await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), content);
}

#[tokio::test]
async fn test_stale_binary_triggers_update_cycle() {
    let root = temp_root("resolver-stale");
    std::fs::write(root.join(BINARY_NAME), b"old release").unwrap();

    let fresh = b"fake yt-dlp binary v2".to_vec();
    let manifest = format!("{}  {}\n", digest_of(&fresh), BINARY_NAME);
    let base = serve_release(manifest, fresh.clone()).await;

    let resolver = Resolver::new(Platform::Linux, &root, base);
    let path = resolver.ensure_ready().await.expect("update should verify");
    assert_eq!(std::fs::read(&path).unwrap(), fresh);
}

#[tokio::test]
async fn test_missing_manifest_entry_is_an_error() {
    let root = temp_root("resolver-noentry");
    let manifest = format!("{}  some_other_asset\n", digest_of(b"x"));
    let base = serve_release(manifest, b"irrelevant".to_vec()).await;

    let resolver = Resolver::new(Platform::Linux, &root, base);
    let result = resolver.ensure_ready().await;
    match result {
        Err(ResolverError::MissingManifestEntry(name)) => assert_eq!(name, BINARY_NAME),
        other => panic!("expected MissingManifestEntry, got {:?}", other),
    }
}

#[test]
fn test_parse_manifest() {
    let body = "abc123  yt-dlp_linux\nDEF456  yt-dlp_macos\nmalformed-line\n";
    let manifest = parse_manifest(body);

    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.get("yt-dlp_linux").unwrap(), "abc123");
    // Digests are normalized to lowercase
    assert_eq!(manifest.get("yt-dlp_macos").unwrap(), "def456");
}

#[test]
fn test_platform_binary_names() {
    assert_eq!(Platform::Linux.binary_name(), "yt-dlp_linux");
    assert_eq!(Platform::MacOs.binary_name(), "yt-dlp_macos");
    assert_eq!(Platform::Windows.binary_name(), "yt-dlp_min.exe");
}
