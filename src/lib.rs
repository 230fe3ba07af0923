//! Spotify Playlist Downloader Library
//!
//! This library provides functionality for scraping the track listing of a
//! Spotify playlist and downloading the audio for each track with the
//! third-party yt-dlp downloader. It includes modules for API communication,
//! the sequential download pipeline, configuration management, and various
//! utilities for handling track metadata.
//!
//! # Modules
//!
//! - `cli` - The sequential scrape-and-download pipeline
//! - `config` - Configuration intake and environment variables
//! - `management` - On-disk persistence of the scraped track list
//! - `prompt` - User-input port for interactive questions
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `ytdlp` - yt-dlp binary resolution, verification, and invocation
//!
//! # Example
//!
//! ```
//! use spodl::{cli, config, prompt};
//!
//! #[tokio::main]
//! async fn main() -> spodl::Res<()> {
//!     config::load_env().await?;
//!     // Run the pipeline with a console prompter...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod prompt;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod ytdlp;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use spodl::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Scraping playlist tracks...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Scraped 42 tracks");
/// success!("Downloaded {}", track_name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("The playlist ID provided is invalid.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination. Used for recoverable issues such as a single track failing
/// to download.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Download errored for {}", track_name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a debug message with a cyan "d" indicator.
///
/// Used for verbose detail such as subprocess output. Callers gate these
/// messages on `Config::debug`, so the macro itself stays unconditional.
///
/// # Example
///
/// ```
/// debug!("yt-dlp stdout: {}", stdout);
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "d".cyan().bold(), std::format_args!($($arg)*));
  })
}
