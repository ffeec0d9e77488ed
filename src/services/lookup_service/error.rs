use axum::{response::{IntoResponse, Redirect, Response}, http::StatusCode};
use log::error;
use thiserror::Error;

use crate::services::{
    platform_service::error::PlatformServiceError,
    profile_service::error::ProfileServiceError,
    stats_service::error::StatsServiceError,
};

use super::navigation;

pub type Result<T> = std::result::Result<T, LookupServiceError>;

#[derive(Debug, Error)]
pub enum LookupServiceError {
    #[error("Error with PlatformService invocation")]
    PlatformServiceError(#[from] PlatformServiceError),
    #[error("Error with ProfileService invocation")]
    ProfileServiceError(#[from] ProfileServiceError),
    #[error("Error with StatsService invocation")]
    StatsServiceError(#[from] StatsServiceError),
    #[error("No player lookup is active in this session")]
    NoActiveLookup,
    #[error("No stats are cached for `{0}`")]
    StatsNotFound(String),
    #[error("Session is bound to profile {id} (`{username}`), which can't be read back")]
    ProfileMissing { id: i64, username: String },
}

impl IntoResponse for LookupServiceError {
    fn into_response(self) -> Response {
        match self {
            LookupServiceError::NoActiveLookup => Redirect::to(navigation::NO_ACTIVE_LOOKUP).into_response(),
            LookupServiceError::StatsNotFound(_) => Redirect::to(navigation::STATS_NOT_FOUND).into_response(),
            _ => {
                error!("{:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal server error occured").into_response()
            }
        }
    }
}
