use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Malformed task document: {0}")]
    Document(#[from] serde_json::Error),
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;
