use thiserror::Error;

use crate::session::StoreError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("invalid JSON in response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),
    #[error("session store failure: {0}")]
    Store(#[from] StoreError),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
