use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Player not found by the stats provider: {0}")]
    PlayerNotFound(String),
    #[error("Could not reach the stats provider")]
    RequestFailed(reqwest::Error),
    #[error("Stats provider responded with status {0}")]
    BadStatus(u16),
    #[error("Stats provider sent a malformed response: {0}")]
    Malformed(String),
}

impl ProviderError {
    ///
    /// `true` when the provider answered and reported no such player,
    /// as opposed to failing to answer properly
    ///
    pub fn is_player_not_found(&self) -> bool {
        matches!(self, ProviderError::PlayerNotFound(_))
    }
}
