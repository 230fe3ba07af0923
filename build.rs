//! Build script for the playlist downloader.
//!
//! Copies the `.env.example` credential template into the user's local data
//! directory so a ready-to-edit configuration example sits where the
//! application looks for `spodl/.env` at runtime.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<data_local_dir>/spodl/`.
///
/// The destination is the platform-specific local data directory:
/// - Linux: `~/.local/share/spodl/.env.example`
/// - macOS: `~/Library/Application Support/spodl/.env.example`
/// - Windows: `%LOCALAPPDATA%/spodl/.env.example`
///
/// A missing template only produces a cargo warning; directory-creation or
/// copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spodl");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
