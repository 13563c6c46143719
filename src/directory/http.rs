use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;

use super::client::DirectoryClient;
use super::error::DirectoryError;
use super::types::{Entry, EntryId, NewEntry};

/// JSON REST implementation of [`DirectoryClient`].
///
/// `GET`/`POST` go to the collection URL, `PUT`/`DELETE` to
/// `{collection}/{id}`.
pub struct HttpDirectoryClient {
    client: Client,
    collection: Url,
}

impl HttpDirectoryClient {
    pub fn new(server: &ServerConfig) -> Result<Self, DirectoryError> {
        let collection = Url::parse(&server.collection_url())
            .map_err(|e| DirectoryError::InvalidAddress(format!("'{}': {e}", server.collection_url())))?;
        let client = Client::builder()
            .connect_timeout(server.connect_timeout())
            .build()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        Ok(Self { client, collection })
    }

    fn member_url(&self, id: &EntryId) -> Result<Url, DirectoryError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidAddress(format!("'{}' cannot take an id", self.collection)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn list_all(&self) -> Result<Vec<Entry>, DirectoryError> {
        tracing::debug!(url = %self.collection, "GET collection");
        let response = self
            .client
            .get(self.collection.clone())
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }
        decode(response).await
    }

    async fn create(&self, entry: &NewEntry) -> Result<Entry, DirectoryError> {
        tracing::debug!(url = %self.collection, name = %entry.name, "POST entry");
        let response = self
            .client
            .post(self.collection.clone())
            .json(entry)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if status.is_client_error() {
            return Err(DirectoryError::Validation(error_message(response).await));
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }
        decode(response).await
    }

    async fn update(&self, id: &EntryId, entry: &Entry) -> Result<Entry, DirectoryError> {
        let url = self.member_url(id)?;
        tracing::debug!(url = %url, "PUT entry");
        let response = self
            .client
            .put(url)
            .json(entry)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound { id: id.clone() });
        }
        if status.is_client_error() {
            return Err(DirectoryError::Validation(error_message(response).await));
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }
        decode(response).await
    }

    async fn remove(&self, id: &EntryId) -> Result<(), DirectoryError> {
        let url = self.member_url(id)?;
        tracing::debug!(url = %url, "DELETE entry");
        let response = self.client.delete(url).send().await.map_err(network)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound { id: id.clone() });
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }
        Ok(())
    }
}

fn network(err: reqwest::Error) -> DirectoryError {
    DirectoryError::Network(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| DirectoryError::Network(format!("Failed to read response body: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| DirectoryError::Decode(e.to_string()))
}

async fn server_error(response: Response) -> DirectoryError {
    let status = response.status().as_u16();
    let message = error_message(response).await;
    DirectoryError::Server { status, message }
}

/// The server's `{"error": "..."}` message, or the status reason phrase.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();

    let Ok(bytes) = response.bytes().await else {
        return fallback;
    };
    serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(fallback)
}
