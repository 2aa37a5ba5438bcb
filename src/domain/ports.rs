use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

pub trait Storage: Send + Sync {
    /// Writes the whole body under `file_name` and returns the path it was verified at.
    /// Nothing is left behind when the body or the write fails.
    fn write_stream(
        &self,
        file_name: &str,
        body: &mut dyn MediaStream,
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_url(&self) -> &str;
    fn media_api_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// Raw bytes of the registry CSV, exactly as served.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// A media body read piece by piece as it arrives; `None` marks the end.
#[async_trait]
pub trait MediaStream: Send {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn random_media_url(&self) -> Result<Url>;
    async fn download(&self, url: &Url) -> Result<Box<dyn MediaStream>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::MediaStream;
    use crate::utils::error::{DogError, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;

    /// Serves fixed chunks, optionally failing once they run out.
    pub struct ChunkStream {
        chunks: VecDeque<Vec<u8>>,
        fail_at_end: bool,
    }

    impl ChunkStream {
        pub fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                fail_at_end: false,
            }
        }

        pub fn failing(chunks: &[&[u8]]) -> Self {
            Self {
                fail_at_end: true,
                ..Self::new(chunks)
            }
        }
    }

    #[async_trait]
    impl MediaStream for ChunkStream {
        async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
            match self.chunks.pop_front() {
                Some(chunk) => Ok(Some(chunk)),
                None if self.fail_at_end => Err(DogError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "connection closed mid-body",
                ))),
                None => Ok(None),
            }
        }
    }
}
