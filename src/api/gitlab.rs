use reqwest::Client;
use serde_json::Value;

use crate::errors::{FetchError, Result};

pub struct GitLabClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitLabClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    // Endpoint paths are appended to the base URL verbatim and must already
    // be percent-encoded.
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url).header("PRIVATE-TOKEN", &self.token);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api { status, body });
        }

        let body = response.text().await?;
        let payload = serde_json::from_str(&body)?;

        Ok(payload)
    }
}
