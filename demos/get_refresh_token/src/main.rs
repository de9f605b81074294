use nowplaying_init::init;
use nowplaying_spotify_api::auth::consent::request_authorization_code;
use nowplaying_spotify_api::auth::token::AuthorizationExchange;
use nowplaying_spotify_api::auth::token::TokenEndpoint;
use nowplaying_spotify_api::auth::token::exchange_authorization_code;
use nowplaying_spotify_api::credentials::ClientCredentials;

/// One-time setup: run the consent flow, exchange the code and print the
/// refresh token for the operator to stash in their `.env`.
#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let credentials = ClientCredentials::from_env()?;
    let endpoint = TokenEndpoint::default();

    let code = request_authorization_code(&credentials, &endpoint.redirect_uri).await?;

    match exchange_authorization_code(&credentials, &code, &endpoint).await? {
        AuthorizationExchange::Granted(grant) => {
            println!("Save this to your .env file as SPOTIFY_REFRESH_TOKEN:");
            println!("{}", grant.refresh_token.0);
        }
        AuthorizationExchange::Denied(error) => {
            eprintln!("Spotify denied the exchange: {:#?}", error);
        }
    }

    Ok(())
}
