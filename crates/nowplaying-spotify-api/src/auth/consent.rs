use crate::credentials::AuthorizationCode;
use crate::credentials::ClientCredentials;
use eyre::OptionExt;
use eyre::Result;
use eyre::eyre;
use open::that as open_browser;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::debug;
use tracing::info;
use url::Url;

pub const ACCOUNTS_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const PLAYBACK_SCOPE: &str = "user-read-playback-state";

/// Walk the operator through the one-time consent flow: open the consent
/// page in a browser and catch the single-use code on the redirect URI.
pub async fn request_authorization_code(
    credentials: &ClientCredentials,
    redirect_uri: &str,
) -> Result<AuthorizationCode> {
    let auth_url = authorize_url(credentials, redirect_uri)?;

    info!("Opening browser for consent");
    open_browser(auth_url.as_str())?;

    let code = listen_for_code(redirect_uri).await?;
    Ok(AuthorizationCode(code))
}

pub fn authorize_url(credentials: &ClientCredentials, redirect_uri: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        ACCOUNTS_AUTHORIZE_URL,
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", PLAYBACK_SCOPE),
        ],
    )?;
    Ok(url)
}

async fn listen_for_code(redirect_uri: &str) -> Result<String> {
    debug!("Listening for code on {}", redirect_uri);
    let addr = redirect_uri
        .strip_prefix("http://")
        .or_else(|| redirect_uri.strip_prefix("https://"))
        .ok_or_eyre("Invalid redirect URI")?;
    let listener = TcpListener::bind(addr).await?;
    let (mut socket, _) = listener.accept().await?;

    let mut buffer = [0; 1024];
    socket.read(&mut buffer).await?;
    let request = String::from_utf8_lossy(&buffer[..]);

    let code = request
        .split_whitespace()
        .nth(1)
        .and_then(|path| Url::parse(&format!("http://localhost{}", path)).ok())
        .and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "code")
                .map(|(_, v)| v.to_string())
        })
        .ok_or_else(|| eyre!("Failed to extract code from request"))?;

    let body = r#"
        <!DOCTYPE html>
        <html lang="en">
          <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
          <body style="font-family:sans-serif;text-align:center;padding-top:3em">
            <h1>nowplaying</h1>
            ✅ <strong>Spotify auth complete.</strong><br/>You may close this window.
          </body>
        </html>
        "#;

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );

    socket.write_all(response.as_bytes()).await?;

    Ok(code)
}
