use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        source: sea_orm::DbErr,
    },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
