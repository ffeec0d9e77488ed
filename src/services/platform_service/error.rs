use thiserror::Error;

use crate::data_layer_error::DataLayerError;

pub type Result<T> = std::result::Result<T, PlatformServiceError>;

#[derive(Debug, Error)]
pub enum PlatformServiceError {
    #[error("An internal server error occured")]
    DataLayerError(#[from] DataLayerError),
}
