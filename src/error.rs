use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Failures of store operations, surfaced to GraphQL clients.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Book not found")]
    BookNotFound { id: i32 },

    #[error("No {collection} ids left to assign")]
    IdsExhausted { collection: &'static str },
}

/// Failures while reading a seed file at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;

impl ErrorExtensions for LibraryError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            LibraryError::BookNotFound { id } => {
                e.set("code", "NOT_FOUND");
                e.set("id", *id);
            }
            LibraryError::IdsExhausted { collection } => {
                e.set("code", "IDS_EXHAUSTED");
                e.set("collection", *collection);
            }
        })
    }
}
