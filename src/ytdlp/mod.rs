//! # yt-dlp Integration Module
//!
//! This module owns everything around the third-party yt-dlp downloader:
//! resolving a trustworthy local copy of the binary and invoking it once per
//! track.
//!
//! ## Resolver
//!
//! [`resolver`] fetches the platform-specific binary from the official
//! release channel and verifies its SHA-256 digest against the published
//! `SHA2-256SUMS` manifest. A binary that is already present is re-verified
//! against the current manifest on every run: a matching digest
//! short-circuits as up to date, a stale digest triggers one
//! re-download-and-reverify cycle, and a digest that still does not match
//! after a fresh download is a fatal integrity error.
//!
//! ## Orchestrator
//!
//! [`download`] iterates the scraped track list strictly sequentially and
//! runs the binary as a blocking subprocess per track, with best-quality
//! audio extraction to the computed filename. Per-track failures are logged
//! and skipped; no single failure aborts the batch.

pub mod download;
pub mod resolver;
