use super::navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Stats were already cached, nothing was fetched
    AlreadyCached,
    /// Stats were fetched and cached by this lookup
    Created,
    /// The provider doesn't know the player
    NotFound,
    /// The provider could not be used; try again later
    UpstreamFailure,
}

///
/// Where a finished lookup should send the caller
///
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub kind: LookupKind,
    pub navigation_target: String,
}

impl LookupOutcome {
    pub fn already_cached(username: &str) -> Self {
        Self { kind: LookupKind::AlreadyCached, navigation_target: navigation::stats_view(username) }
    }
    pub fn created(username: &str) -> Self {
        Self { kind: LookupKind::Created, navigation_target: navigation::stats_view(username) }
    }
    pub fn not_found() -> Self {
        Self { kind: LookupKind::NotFound, navigation_target: navigation::PLAYER_NOT_FOUND.to_string() }
    }
    pub fn upstream_failure() -> Self {
        Self { kind: LookupKind::UpstreamFailure, navigation_target: navigation::UPSTREAM_UNAVAILABLE.to_string() }
    }
}
