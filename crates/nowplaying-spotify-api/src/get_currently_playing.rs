use crate::access_token::AccessToken;
use crate::fetch::fetch;
use crate::playback::PlaybackSnapshot;

pub const CURRENTLY_PLAYING_URL: &str =
    "https://api.spotify.com/v1/me/player/currently-playing";

/// Where the player query goes. Defaults to the real Web API; tests
/// point it at a local stub, same as `TokenEndpoint`.
#[derive(Debug, Clone)]
pub struct PlayerEndpoint {
    pub currently_playing_url: String,
}

impl Default for PlayerEndpoint {
    fn default() -> Self {
        Self {
            currently_playing_url: CURRENTLY_PLAYING_URL.to_string(),
        }
    }
}

/// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
pub async fn get_currently_playing(
    token: &AccessToken,
    endpoint: &PlayerEndpoint,
) -> eyre::Result<Option<PlaybackSnapshot>> {
    let snapshot: Option<PlaybackSnapshot> = fetch(&endpoint.currently_playing_url, token).await?;
    Ok(snapshot.filter(|s| !s.is_empty()))
}
