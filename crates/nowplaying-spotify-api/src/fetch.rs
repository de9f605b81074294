use crate::access_token::AccessToken;

/// GET a JSON resource from the Web API with bearer auth. The player
/// endpoints answer 204 or an empty body when there is nothing to
/// report; both decode to `None`.
pub async fn fetch<T>(url: &str, token: &AccessToken) -> eyre::Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    let client = reqwest::Client::new();
    let res = client
        .get(url)
        .bearer_auth(&token.access_token)
        .send()
        .await?
        .error_for_status()?;

    if res.status() == reqwest::StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let body = res.text().await?;
    if body.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Option<T>>(&body) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body))),
    }
}
