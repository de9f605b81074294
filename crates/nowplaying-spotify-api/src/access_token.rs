use serde::Deserialize;
use serde::Serialize;

/// Short-lived credential minted from the refresh token. Fetched fresh
/// before every query chain, used immediately and dropped; nothing in
/// this crate caches one or assumes it outlives a single chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
}
