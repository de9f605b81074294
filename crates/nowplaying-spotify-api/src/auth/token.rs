use crate::access_token::AccessToken;
use crate::credentials::AuthorizationCode;
use crate::credentials::ClientCredentials;
use crate::credentials::RefreshToken;
use eyre::Result;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const REDIRECT_URI: &str = "http://localhost:3000";

/// Where token requests go. Defaults to the real accounts service; tests
/// point `token_url` at a local stub.
#[derive(Debug, Clone)]
pub struct TokenEndpoint {
    pub token_url: String,
    pub redirect_uri: String,
}

impl Default for TokenEndpoint {
    fn default() -> Self {
        Self {
            token_url: ACCOUNTS_TOKEN_URL.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
        }
    }
}

/// Error payload the accounts service sends instead of a grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Outcome of a refresh-token exchange. The accounts service reports a
/// denial as a JSON body rather than a bare status, so it decodes to a
/// value here; only transport and decode failures become `Err`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenGrant {
    Granted(AccessToken),
    Denied(TokenError),
}

/// Outcome of the one-time authorization-code exchange.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthorizationExchange {
    Granted(RefreshTokenGrant),
    Denied(TokenError),
}

/// A granted exchange. The refresh token is the piece to keep: the
/// operator saves it as `SPOTIFY_REFRESH_TOKEN` in their `.env` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefreshTokenGrant {
    pub refresh_token: RefreshToken,
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
}

/// https://developer.spotify.com/documentation/web-api/tutorials/code-flow
pub async fn exchange_authorization_code(
    credentials: &ClientCredentials,
    code: &AuthorizationCode,
    endpoint: &TokenEndpoint,
) -> Result<AuthorizationExchange> {
    debug!("Exchanging authorization code at {}", endpoint.token_url);
    let client = reqwest::Client::new();
    let body = client
        .post(&endpoint.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            credentials.basic_authorization(),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("redirect_uri", endpoint.redirect_uri.as_str()),
            ("code", code.0.as_str()),
        ])
        .send()
        .await?
        .text()
        .await?;

    decode(&body)
}

/// Mint a fresh access token from the long-lived refresh token. Every
/// call issues its own request; nothing is cached between calls.
pub async fn get_access_token(
    credentials: &ClientCredentials,
    refresh_token: &RefreshToken,
    endpoint: &TokenEndpoint,
) -> Result<TokenGrant> {
    debug!("Requesting access token from {}", endpoint.token_url);
    let client = reqwest::Client::new();
    let body = client
        .post(&endpoint.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            credentials.basic_authorization(),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("redirect_uri", endpoint.redirect_uri.as_str()),
            ("refresh_token", refresh_token.0.as_str()),
        ])
        .send()
        .await?
        .text()
        .await?;

    let grant = decode::<TokenGrant>(&body)?;
    if let TokenGrant::Granted(token) = &grant {
        debug!("Access token: len={}", token.access_token.len());
        debug!("Scope: {}", token.scope);
        debug!("Expires in: {}s", token.expires_in);
    }
    Ok(grant)
}

fn decode<T>(body: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str(body) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_token_decodes_unmodified() {
        let body = r#"{
            "access_token": "abc",
            "token_type": "Bearer",
            "scope": "user-read-playback-state",
            "expires_in": 3600
        }"#;
        let grant: TokenGrant = serde_json::from_str(body).unwrap();
        assert_eq!(
            grant,
            TokenGrant::Granted(AccessToken {
                access_token: "abc".to_string(),
                token_type: "Bearer".to_string(),
                scope: "user-read-playback-state".to_string(),
                expires_in: 3600,
            })
        );
    }

    #[test]
    fn denial_decodes_as_a_value() {
        let grant: TokenGrant = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
        assert_eq!(
            grant,
            TokenGrant::Denied(TokenError {
                error: "invalid_grant".to_string(),
                error_description: None,
            })
        );
    }

    #[test]
    fn exchange_denial_keeps_the_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#;
        let exchange: AuthorizationExchange = serde_json::from_str(body).unwrap();
        assert_eq!(
            exchange,
            AuthorizationExchange::Denied(TokenError {
                error: "invalid_grant".to_string(),
                error_description: Some("Invalid authorization code".to_string()),
            })
        );
    }

    #[test]
    fn first_exchange_carries_the_refresh_token() {
        let body = r#"{
            "access_token": "abc",
            "token_type": "Bearer",
            "scope": "user-read-playback-state",
            "expires_in": 3600,
            "refresh_token": "long-lived"
        }"#;
        let exchange: AuthorizationExchange = serde_json::from_str(body).unwrap();
        let AuthorizationExchange::Granted(grant) = exchange else {
            panic!("expected a granted exchange");
        };
        assert_eq!(grant.refresh_token, RefreshToken("long-lived".to_string()));
        assert_eq!(grant.expires_in, 3600);
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let result = decode::<TokenGrant>("not json");
        assert!(result.is_err());
    }

    #[test]
    fn default_endpoint_points_at_the_accounts_service() {
        let endpoint = TokenEndpoint::default();
        assert_eq!(endpoint.token_url, "https://accounts.spotify.com/api/token");
        assert_eq!(endpoint.redirect_uri, "http://localhost:3000");
    }
}
