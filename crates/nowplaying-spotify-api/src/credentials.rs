use base64::Engine;
use eyre::Result;
use eyre::eyre;
use serde::Deserialize;
use serde::Serialize;

/// Application credentials from the Spotify developer dashboard. Kept out
/// of source control; the binaries read them from the environment.
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: var("SPOTIFY_CLIENT_ID")?,
            client_secret: var("SPOTIFY_CLIENT_SECRET")?,
        })
    }

    /// `Authorization` header value for the accounts service:
    /// `Basic base64(client_id:client_secret)`.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

/// The one durable secret: minted once by the authorization exchange and
/// supplied back through the environment on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken(pub String);

impl RefreshToken {
    pub fn from_env() -> Result<Self> {
        Ok(Self(var("SPOTIFY_REFRESH_TOKEN")?))
    }
}

/// Single-use code from the consent flow.
pub struct AuthorizationCode(pub String);

/// Read the required environment variable or error
pub fn var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| eyre!("Missing env var: {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_matches_the_standard_encoding() {
        let credentials = ClientCredentials {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
        };
        assert_eq!(
            credentials.basic_authorization(),
            "Basic Y2xpZW50OnNlY3JldA=="
        );
    }

    #[test]
    fn basic_authorization_keeps_padding() {
        let credentials = ClientCredentials {
            client_id: "a".to_string(),
            client_secret: "b".to_string(),
        };
        assert_eq!(credentials.basic_authorization(), "Basic YTpi");

        let credentials = ClientCredentials {
            client_id: "ab".to_string(),
            client_secret: "cd".to_string(),
        };
        assert_eq!(credentials.basic_authorization(), "Basic YWI6Y2Q=");
    }
}
