use std::path::{Path, PathBuf};

use async_trait::async_trait;
use selvam_core::repository::{QuotationRepository, RepositoryError};
use tracing::info;

/// Quotation PDFs as plain files in one directory.
#[derive(Debug, Clone)]
pub struct FsQuotationRepository {
    directory: PathBuf,
    public_prefix: String,
}

impl FsQuotationRepository {
    pub fn new(directory: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, RepositoryError> {
        // Names arrive sanitized; refuse anything that could leave the directory anyway.
        let plain = Path::new(file_name)
            .file_name()
            .is_some_and(|n| n == file_name);
        if !plain || file_name.is_empty() {
            return Err(RepositoryError::InvalidName(file_name.to_string()));
        }
        Ok(self.directory.join(file_name))
    }
}

#[async_trait]
impl QuotationRepository for FsQuotationRepository {
    async fn exists(&self, file_name: &str) -> Result<bool, RepositoryError> {
        let path = self.path_for(file_name)?;
        Ok(tokio::fs::try_exists(path).await?)
    }

    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<(), RepositoryError> {
        let path = self.path_for(file_name)?;
        if !tokio::fs::try_exists(&self.directory).await? {
            tokio::fs::create_dir_all(&self.directory).await?;
            info!("Created quotation directory {}", self.directory.display());
        }
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    fn public_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name)
    }
}
