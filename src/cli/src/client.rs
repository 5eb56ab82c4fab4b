//! HTTP client for communicating with the Apptrack API server.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// API response wrapper matching the server's ApiResponse format.
#[derive(Debug, serde::Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[allow(dead_code)]
    pub error_code: Option<String>,
}

/// HTTP client for the Apptrack API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Return the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request and deserialize the enveloped response data.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        Self::unwrap_envelope(resp, &url).await
    }

    /// Perform a GET request with query parameters and deserialize the
    /// enveloped response data. Values are percent-encoded by the client,
    /// so callers pass them raw.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        Self::unwrap_envelope(resp, &url).await
    }

    /// Perform a GET request returning the raw (non-enveloped) JSON body.
    pub async fn get_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;
        Self::unwrap_envelope(resp, &url).await
    }

    /// Perform a PUT request with a JSON body and deserialize the response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("PUT {} failed", url))?;
        Self::unwrap_envelope(resp, &url).await
    }

    /// Perform a DELETE request and deserialize the response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("DELETE {} failed", url))?;
        Self::unwrap_envelope(resp, &url).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
        url: &str,
    ) -> Result<T> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))?;

        // Server errors use a separate envelope whose `error` field is a
        // structured object, so they fail this parse and are handled below.
        let api_resp: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(resp) => resp,
            Err(_) => return Err(Self::envelope_error(status, &body)),
        };

        if api_resp.success {
            api_resp
                .data
                .ok_or_else(|| anyhow::anyhow!("API returned success but no data"))
        } else {
            Err(anyhow::anyhow!(
                "API error: {}",
                api_resp.error.unwrap_or_else(|| format!("status {}", status))
            ))
        }
    }

    /// Turn a non-envelope body into an error, preferring the server's
    /// structured error message over the raw body.
    fn envelope_error(status: reqwest::StatusCode, body: &str) -> anyhow::Error {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(failure) => anyhow::anyhow!(
                "API error [{}]: {}",
                failure.error.code,
                failure.error.message
            ),
            Err(_) => anyhow::anyhow!("API error ({}): {}", status, body),
        }
    }
}

/// Error envelope emitted by the server for failed requests.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorInfo,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorInfo {
    code: String,
    message: String,
}
