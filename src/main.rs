use nowplaying_init::init;
use nowplaying_spotify_api::auth::token::TokenEndpoint;
use nowplaying_spotify_api::client::SpotifyClient;
use nowplaying_spotify_api::credentials::ClientCredentials;
use nowplaying_spotify_api::credentials::RefreshToken;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let credentials = ClientCredentials::from_env()?;
    let refresh_token = RefreshToken::from_env()?;

    let client =
        SpotifyClient::connect(&credentials, refresh_token, &TokenEndpoint::default()).await?;

    match client.currently_playing().await? {
        Some(snapshot) => println!("{:#?}", snapshot),
        None => println!("Nothing is playing right now."),
    }

    Ok(())
}
