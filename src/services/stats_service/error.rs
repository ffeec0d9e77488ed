use thiserror::Error;

use crate::data_layer_error::DataLayerError;

pub type Result<T> = std::result::Result<T, StatsServiceError>;

#[derive(Debug, Error)]
pub enum StatsServiceError {
    #[error("An internal server error occured")]
    DataLayerError(#[from] DataLayerError),
    #[error("Stats for profile {0} conflicted on creation but could not be read back")]
    ConflictNotReadable(i64),
}
