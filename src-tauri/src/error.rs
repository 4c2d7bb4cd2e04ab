use thiserror::Error;

use crate::omdb::OmdbError;
use crate::watched::StorageError;

#[derive(Debug, Error)]
pub enum PopcornError {
    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Movie database error: {0}")]
    Omdb(#[from] OmdbError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid rating {0}: must be between 1 and 10")]
    InvalidRating(u8),

    #[error("Details for {0} are not loaded")]
    DetailsNotLoaded(String),
}

impl From<PopcornError> for String {
    fn from(err: PopcornError) -> Self {
        err.to_string()
    }
}
