use thiserror::Error;

use crate::data_layer_error::DataLayerError;

pub type Result<T> = std::result::Result<T, ProfileServiceError>;

#[derive(Debug, Error)]
pub enum ProfileServiceError {
    #[error("An internal server error occured")]
    DataLayerError(#[from] DataLayerError),
    #[error("Profile `{0}` kept conflicting on creation but could not be read back")]
    CreationContended(String),
}
