use reqwest::{Client, StatusCode};

use crate::{spotify::ScrapeError, types::PlaylistTracksResponse};

/// Fetches the first page of a playlist's track listing.
///
/// Calls Spotify's `/playlists/{id}/tracks` endpoint with the bearer token
/// obtained from [`super::auth::request_token`] and decodes the page into
/// the typed [`PlaylistTracksResponse`] schema.
///
/// Only the first page is fetched; the response's `next` cursor is passed
/// through so the caller can warn when a playlist exceeds the page size.
///
/// # Arguments
///
/// * `api_url` - Web API base, usually [`crate::config::spotify_api_url`]
/// * `playlist_id` - Spotify playlist ID, as found in a playlist URL
/// * `token` - Valid access token
///
/// # Errors
///
/// - [`ScrapeError::UnknownPlaylist`] when the endpoint answers 404; this
///   is the fatal "invalid playlist id" case surfaced to the user
/// - [`ScrapeError::Http`] for transport failures
/// - [`ScrapeError::Parse`] when the response body does not match the
///   expected page shape
pub async fn playlist_tracks(
    api_url: &str,
    playlist_id: &str,
    token: &str,
) -> Result<PlaylistTracksResponse, ScrapeError> {
    let client = Client::new();
    let url = format!("{api_url}/playlists/{playlist_id}/tracks");

    let response = client.get(&url).bearer_auth(token).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(ScrapeError::UnknownPlaylist(playlist_id.to_string()));
    }

    let body = response.text().await?;
    let page: PlaylistTracksResponse = serde_json::from_str(&body)?;
    Ok(page)
}
