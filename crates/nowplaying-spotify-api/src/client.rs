use crate::access_token::AccessToken;
use crate::auth::token::TokenEndpoint;
use crate::auth::token::TokenGrant;
use crate::auth::token::get_access_token;
use crate::credentials::ClientCredentials;
use crate::credentials::RefreshToken;
use crate::get_currently_playing::PlayerEndpoint;
use crate::get_currently_playing::get_currently_playing;
use crate::playback::PlaybackSnapshot;
use eyre::Result;
use eyre::eyre;
use tracing::debug;

/// API handle scoped with a freshly minted access token plus the refresh
/// token it came from. Rebuilt for every call chain; holding one does
/// not keep the token valid past its expiry.
pub struct SpotifyClient {
    access_token: AccessToken,
    refresh_token: RefreshToken,
    player: PlayerEndpoint,
}

impl SpotifyClient {
    /// Mint an access token and wrap it. A denied refresh is an error
    /// here: there is no client to build without a token.
    pub async fn connect(
        credentials: &ClientCredentials,
        refresh_token: RefreshToken,
        endpoint: &TokenEndpoint,
    ) -> Result<Self> {
        debug!("Building an authenticated client");
        match get_access_token(credentials, &refresh_token, endpoint).await? {
            TokenGrant::Granted(access_token) => Ok(Self {
                access_token,
                refresh_token,
                player: PlayerEndpoint::default(),
            }),
            TokenGrant::Denied(error) => Err(eyre!("Token refresh denied: {}", error.error)),
        }
    }

    pub fn with_player_endpoint(mut self, player: PlayerEndpoint) -> Self {
        self.player = player;
        self
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// The currently playing track, or `None` when nothing is playing.
    pub async fn currently_playing(&self) -> Result<Option<PlaybackSnapshot>> {
        get_currently_playing(&self.access_token, &self.player).await
    }
}
