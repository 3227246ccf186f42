use async_trait::async_trait;
use reqwest::Client;
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::core::error::{PatchError, PatchResult};
use crate::core::http::build_http_client;

/// Retrieves the raw bytes behind an artifact URL.
///
/// Any failure aborts the refresh; there is no retry or skip. The
/// `Accessing <url>...` progress line is written by the caller, so
/// implementations stay silent.
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> PatchResult<Vec<u8>>;
}

/// Fetcher backed by a plain HTTP GET.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> PatchResult<Self> {
        Ok(Self {
            client: build_http_client()?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtifactFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> PatchResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PatchError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

/// Lowercase hex SHA-1 digest of `bytes`.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
