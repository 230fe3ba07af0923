use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode};

use crate::{spotify::ScrapeError, types::TokenResponse};

/// Exchanges API credentials for a bearer token via the client-credentials
/// grant.
///
/// Sends `grant_type=client_credentials` to the token endpoint with the
/// client ID and secret as a Basic authorization header (base64-encoded
/// `id:secret`). This grant covers read access to public playlist data and
/// needs no user interaction.
///
/// # Arguments
///
/// * `token_url` - Token endpoint, usually [`crate::config::spotify_token_url`]
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
///
/// # Returns
///
/// Returns the access token string on success.
///
/// # Errors
///
/// - [`ScrapeError::InvalidCredentials`] when the endpoint answers 401;
///   this is the fatal "invalid client/secret" case surfaced to the user
/// - [`ScrapeError::Http`] for transport failures
/// - [`ScrapeError::Parse`] when the response body is not the expected
///   token document
///
/// # Example
///
/// ```
/// let token = request_token(&config::spotify_token_url(), "abc", "def").await?;
/// ```
pub async fn request_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, ScrapeError> {
    let client = Client::new();
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));

    let response = client
        .post(token_url)
        .header("Authorization", format!("Basic {credentials}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(ScrapeError::InvalidCredentials);
    }

    let body = response.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;
    Ok(token.access_token)
}
