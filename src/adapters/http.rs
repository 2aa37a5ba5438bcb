use crate::domain::ports::{ConfigProvider, DatasetSource, MediaSource, MediaStream};
use crate::utils::error::{DogError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Shared client with the configured timeout and user agent.
pub fn build_client<C: ConfigProvider>(config: &C) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds()))
        .user_agent(config.user_agent())
        .build()?;
    Ok(client)
}

fn ensure_success(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("{} responded with {}", url, status);

    if status.is_success() {
        Ok(response)
    } else {
        Err(DogError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

pub struct HttpDataset {
    client: Client,
    url: String,
}

impl HttpDataset {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDataset {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Downloading registry from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let response = ensure_success(&self.url, response)?;

        let body = response.bytes().await?;
        tracing::debug!("Registry download complete ({} bytes)", body.len());
        Ok(body.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct MediaPayload {
    url: String,
    #[serde(rename = "fileSizeBytes")]
    file_size_bytes: Option<u64>,
}

pub struct HttpMedia {
    client: Client,
    api_url: String,
}

impl HttpMedia {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl MediaSource for HttpMedia {
    async fn random_media_url(&self) -> Result<Url> {
        tracing::debug!("Requesting random media from: {}", self.api_url);
        let response = self.client.get(&self.api_url).send().await?;
        let body = ensure_success(&self.api_url, response)?.text().await?;

        let payload: MediaPayload = serde_json::from_str(&body)?;
        if let Some(size) = payload.file_size_bytes {
            tracing::debug!("Media API announced {} bytes", size);
        }

        let url = Url::parse(&payload.url).map_err(|e| DogError::InvalidMediaUrl {
            url: payload.url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(DogError::InvalidMediaUrl {
                url: payload.url,
                reason: format!("unsupported scheme {}", scheme),
            }),
        }
    }

    async fn download(&self, url: &Url) -> Result<Box<dyn MediaStream>> {
        tracing::debug!("Downloading media from: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let response = ensure_success(url.as_str(), response)?;

        if let Some(length) = response.content_length() {
            tracing::debug!("Media server announced {} bytes", length);
        }
        Ok(Box::new(HttpMediaStream { response }))
    }
}

/// Body of a media download, handed out chunk by chunk as it arrives.
/// The announced length is never used to size anything.
struct HttpMediaStream {
    response: Response,
}

#[async_trait]
impl MediaStream for HttpMediaStream {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let chunk = self.response.chunk().await?;
        Ok(chunk.map(|bytes| bytes.to_vec()))
    }
}
