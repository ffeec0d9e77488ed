pub mod error;
pub mod models;
pub mod navigation;

use std::sync::Arc;

use axum::async_trait;
use derive_more::Constructor;
use log::{info, warn};

use crate::models::stats_models::StatsPageModel;

use self::{error::{LookupServiceError, Result}, models::LookupOutcome};

use super::{
    platform_service::{to_external_token, PlatformService},
    profile_service::ProfileService,
    provider_service::{normalize::normalize, StatsProvider},
    session_binder::{bind_profile, bound_profile, Session},
    stats_service::{models::StatsWrite, StatsService},
};

///
/// Service which looks up a player's stats, answering from the cache
/// when it can and fetching from the stats provider when it must.
///
#[async_trait]
pub trait LookupService: Send + Sync {
    ///
    /// Resolves the profile for `username` (creating it if needed), binds it to
    /// `session`, and makes sure its stats are cached. Provider failures are
    /// reported through the outcome; only internal faults are `Err`.
    /// The profile is kept even when the stats can't be fetched.
    ///
    async fn lookup<'a>(&self, username: &'a str, platform_code: &'a str, session: &'a dyn Session) -> Result<LookupOutcome>;
    ///
    /// Assembles the stats page for the profile bound to `session`, which must
    /// be the profile of `username`.
    ///
    async fn stats_page<'a>(&self, username: &'a str, session: &'a dyn Session) -> Result<StatsPageModel>;
}

#[derive(Constructor)]
pub struct CoreLookupService {
    platform_service: Arc<dyn PlatformService>,
    profile_service: Arc<dyn ProfileService>,
    stats_service: Arc<dyn StatsService>,
    provider: Arc<dyn StatsProvider>,
}

#[async_trait]
impl LookupService for CoreLookupService {
    async fn lookup<'a>(&self, username: &'a str, platform_code: &'a str, session: &'a dyn Session) -> Result<LookupOutcome> {
        // Unknown platforms are let through, the profile just goes without one
        let platform = self.platform_service.resolve(platform_code).await?;
        if platform.is_none() {
            warn!("Unknown platform `{platform_code}` for `{username}`");
        }

        let profile = self.profile_service.get_or_create(username, platform.map(|p| p.id)).await?;

        // Bind before fetching, so the session follows the profile even if the fetch fails
        bind_profile(session, &profile);

        if self.stats_service.get(profile.id).await?.is_some() {
            return Ok(LookupOutcome::already_cached(&profile.username));
        }

        let raw = match self.provider.fetch(&profile.username, to_external_token(platform_code)).await {
            Ok(raw) => raw,
            Err(e) if e.is_player_not_found() => {
                info!("Player `{username}` not found: {e}");
                return Ok(LookupOutcome::not_found());
            }
            Err(e) => {
                warn!("Stats lookup for `{username}` failed upstream: {e}");
                return Ok(LookupOutcome::upstream_failure());
            }
        };

        let props = normalize(&raw);
        let outcome = match self.stats_service.create(profile.id, &props).await? {
            StatsWrite::Created(_) => LookupOutcome::created(&profile.username),
            StatsWrite::AlreadyPresent(_) => LookupOutcome::already_cached(&profile.username),
        };

        Ok(outcome)
    }

    async fn stats_page<'a>(&self, username: &'a str, session: &'a dyn Session) -> Result<StatsPageModel> {
        let binding = bound_profile(session)
            .filter(|b| b.game_profile_username == username)
            .ok_or(LookupServiceError::NoActiveLookup)?;

        let stats = self.stats_service.get(binding.game_profile_id).await?
            .ok_or_else(|| LookupServiceError::StatsNotFound(username.to_string()))?;

        let profile = self.profile_service.read(&binding.game_profile_username).await?
            .filter(|p| p.id == binding.game_profile_id)
            .ok_or_else(|| LookupServiceError::ProfileMissing {
                id: binding.game_profile_id,
                username: binding.game_profile_username.clone(),
            })?;

        Ok(StatsPageModel {
            is_linked: profile.is_linked(),
            username: profile.username,
            level: stats.player_level,
            kills: stats.player_kills,
            damage: stats.player_damage,
            wins: stats.player_wins,
            rank: stats.player_rank,
        })
    }
}
