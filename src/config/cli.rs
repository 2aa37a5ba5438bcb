use crate::domain::ports::{MediaStream, Storage};
use crate::utils::error::{DogError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

// the handle is dropped, and the file closed, when this returns
async fn copy_and_sync(path: &Path, body: &mut dyn MediaStream) -> Result<u64> {
    let mut file = fs::File::create(path).await?;
    let mut copied = 0u64;
    while let Some(chunk) = body.next_chunk().await? {
        file.write_all(&chunk).await?;
        copied += chunk.len() as u64;
    }
    file.sync_all().await?;
    Ok(copied)
}

impl Storage for LocalStorage {
    async fn write_stream(&self, file_name: &str, body: &mut dyn MediaStream) -> Result<PathBuf> {
        let full_path = self.base_path.join(file_name);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let expected = match copy_and_sync(&full_path, body).await {
            Ok(copied) => copied,
            Err(e) => {
                tracing::warn!("Write to {} failed, removing partial file", full_path.display());
                let _ = fs::remove_file(&full_path).await;
                return Err(e);
            }
        };

        let written = fs::metadata(&full_path).await?.len();
        if written != expected {
            let _ = fs::remove_file(&full_path).await;
            return Err(DogError::IncompleteWrite {
                path: full_path.display().to_string(),
                expected,
                written,
            });
        }

        tracing::debug!("Wrote {} bytes to {}", written, full_path.display());
        Ok(full_path)
    }
}
