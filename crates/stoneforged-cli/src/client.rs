//! HTTP client for the stoneforged REST service.
//!
//! Wraps `reqwest` with typed request/response handling. Every success body
//! is unwrapped from the `{ "data": ..., "meta": ... }` envelope; non-2xx
//! responses carrying the `{ "error": ... }` envelope surface as
//! [`ClientError::Api`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stoneforged_core::{NewProspect, Prospect};

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct SeedResponse {
    inserted: usize,
}

/// Client for the prospect endpoints under `/api/v1`.
pub struct ProspectClient {
    client: Client,
    base_url: Url,
}

impl ProspectClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(concat!("stoneforged-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the full prospect list, highest score first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, an error envelope, or an
    /// unexpected body shape.
    pub async fn list_prospects(&self) -> Result<Vec<Prospect>, ClientError> {
        let url = self.endpoint("api/v1/prospects")?;
        self.send(self.client.get(url), "list prospects").await
    }

    /// Creates a prospect and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BrandRequired`] without sending anything when
    /// the draft's brand is blank; otherwise as [`Self::list_prospects`].
    pub async fn create_prospect(&self, draft: &NewProspect) -> Result<i64, ClientError> {
        if !draft.has_brand() {
            return Err(ClientError::BrandRequired);
        }
        let url = self.endpoint("api/v1/prospects")?;
        let created: CreateResponse = self
            .send(self.client.post(url).json(draft), "create prospect")
            .await?;
        Ok(created.id)
    }

    /// Deletes a prospect. `false` means no row had that id.
    ///
    /// # Errors
    ///
    /// As [`Self::list_prospects`].
    pub async fn delete_prospect(&self, id: i64) -> Result<bool, ClientError> {
        let url = self.endpoint(&format!("api/v1/prospects/{id}"))?;
        let deleted: DeleteResponse = self
            .send(self.client.delete(url), &format!("delete prospect {id}"))
            .await?;
        Ok(deleted.success)
    }

    /// Inserts the example prospects and returns how many were new.
    ///
    /// # Errors
    ///
    /// As [`Self::list_prospects`].
    pub async fn seed(&self) -> Result<usize, ClientError> {
        let url = self.endpoint("api/v1/seed")?;
        let seeded: SeedResponse = self.send(self.client.post(url), "seed").await?;
        Ok(seeded.inserted)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// Sends the request and unwraps the `data` field of the response
    /// envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;
        Ok(envelope.data)
    }
}

/// Maps a non-2xx body to [`ClientError::Api`], falling back to the raw body
/// when it is not the service's error envelope.
fn api_error(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ClientError::Api {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => ClientError::Api {
            status,
            code: "http_error".to_string(),
            message: body.trim().to_string(),
        },
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
