use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Repository trait for stored quotation PDFs
#[async_trait]
pub trait QuotationRepository: Send + Sync {
    async fn exists(&self, file_name: &str) -> Result<bool, RepositoryError>;

    /// Writes the file, creating the storage directory when needed.
    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<(), RepositoryError>;

    /// URL path the site serves the stored file under.
    fn public_path(&self, file_name: &str) -> String;
}
