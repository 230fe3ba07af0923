use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{
    config::{self, Config},
    debug, error, info,
    management::TrackManager,
    prompt::UserInput,
    spotify, success,
    types::{Track, TrackTableRow},
    utils, warning,
    ytdlp::{
        self,
        resolver::{Platform, Resolver, ResolverError},
    },
};

/// Runs the whole scrape-and-download pipeline.
///
/// See the module documentation for the stage order. The function only
/// returns on the clean paths (decline to download, or batch finished);
/// every fatal condition exits through the `error!` macro.
pub async fn run(config: Config, input: &mut dyn UserInput) {
    let playlist_id = match config.playlist.clone() {
        Some(id) => id,
        None => {
            let answer = input.line(
                "Please enter a playlist ID, you can get it from a playlist url \
                 (Example: https://open.spotify.com/playlist/1YIe34rcmLjCYpY9wJoM2p):",
            );
            if answer.is_empty() {
                error!("A playlist ID is required.");
            }
            answer
        }
    };

    let tracks_dir = PathBuf::from("tracks");
    prepare_tracks_dir(&tracks_dir, input).await;

    let store = TrackManager::new(".", None);
    let tracks: Vec<Track> = if store.exists() {
        let resume = input.confirm(
            "A tracks.json file already exists! Do you want to skip to the music download \
             or overwrite it and scrape again? (y = skip/n = overwrite)",
        );
        if resume {
            match store.load().await {
                Ok(manager) => manager.into_tracks(),
                Err(e) => error!("Failed to read tracks.json: {}", e),
            }
        } else {
            info!("Overwriting tracks.json..");
            scrape(&config, &playlist_id, input).await
        }
    } else {
        scrape(&config, &playlist_id, input).await
    };

    if tracks.is_empty() {
        info!("The playlist has no tracks, nothing to do.");
        return;
    }

    let proceed = input.confirm(&format!(
        "Do you want to download all ({}) tracks using yt-dlp? \
         Results may be inaccurate, blame YouTube. (y/n)",
        tracks.len()
    ));
    if !proceed {
        info!("Exiting..");
        return;
    }

    let platform = match Platform::current() {
        Ok(platform) => platform,
        Err(e) => error!("{}", e),
    };
    let resolver = Resolver::new(platform, ".", config::ytdlp_release_url());
    let binary = match resolver.ensure_ready().await {
        Ok(path) => path,
        Err(e @ ResolverError::DigestMismatch { .. }) => {
            error!(
                "Failed to verify yt-dlp ({}). Please download it manually from \
                 https://github.com/yt-dlp/yt-dlp/releases, put it next to where you \
                 run spodl, and run again.",
                e
            );
        }
        Err(e) => error!("Failed to set up yt-dlp: {}", e),
    };

    info!("Downloading tracks..");
    let summary = ytdlp::download::download_tracks(tracks, &binary, &tracks_dir, config.debug).await;

    if summary.failed == 0 {
        success!("Downloaded all {} tracks", summary.completed);
    } else {
        warning!(
            "Downloaded {} tracks, {} failed. Re-running keeps tracks.json and retries the downloads.",
            summary.completed,
            summary.failed
        );
    }
}

/// Fetches and normalizes the playlist, persists `tracks.json`, and prints
/// the scraped listing.
async fn scrape(config: &Config, playlist_id: &str, input: &mut dyn UserInput) -> Vec<Track> {
    info!("Scraping tracks..");

    let token = match spotify::auth::request_token(
        &config::spotify_token_url(),
        &config.client_id,
        &config.client_secret,
    )
    .await
    {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };
    if config.debug {
        debug!("Spotify access token: {}", token);
    }

    let page = match spotify::playlist::playlist_tracks(
        &config::spotify_api_url(),
        playlist_id,
        &token,
    )
    .await
    {
        Ok(page) => page,
        Err(e) => error!("{}", e),
    };
    if page.next.is_some() {
        warning!(
            "The playlist has more tracks than one page; only the first {} were scraped.",
            page.items.len()
        );
    }

    let include_file_names = input.confirm(
        "Do you want to include the track fileName in the tracks.json file? (y/n)",
    );
    let tracks: Vec<Track> = page
        .items
        .iter()
        .map(|item| utils::parse_track(&item.track, include_file_names))
        .collect();

    let manager = TrackManager::new(".", Some(tracks.clone()));
    if let Err(e) = manager.persist().await {
        error!("Failed to write tracks.json: {}", e);
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artist: t.artist.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
    success!("Scraped {} tracks!", tracks.len());

    tracks
}

async fn prepare_tracks_dir(dir: &Path, input: &mut dyn UserInput) {
    if !dir.is_dir() {
        if let Err(e) = async_fs::create_dir_all(dir).await {
            error!("Cannot create the tracks folder: {}", e);
        }
        return;
    }

    let keep = input.confirm(
        "A tracks folder already exists! Do you want to keep it or DELETE its content? \
         (y = keep/n = delete)",
    );
    if keep {
        info!("Keeping tracks folder..");
    } else {
        info!("Deleting tracks folder..");
        if let Err(e) = async_fs::remove_dir_all(dir).await {
            error!("Cannot delete the tracks folder: {}", e);
        }
        if let Err(e) = async_fs::create_dir_all(dir).await {
            error!("Cannot create the tracks folder: {}", e);
        }
    }
}
