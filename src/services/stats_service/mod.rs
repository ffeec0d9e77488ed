pub mod data_layer;
pub mod error;
pub mod models;

use std::sync::Arc;

use axum::async_trait;
use derive_more::Constructor;
use log::warn;

use crate::data_layer_error::Insert;

use self::{
    data_layer::StatsDataLayer,
    error::{Result, StatsServiceError},
    models::{StatsModel, StatsProps, StatsWrite},
};

///
/// Cache of stats snapshots, one per profile. Snapshots are immutable
/// once written.
///
#[async_trait]
pub trait StatsService: Send + Sync {
    ///
    /// Retrieves the cached stats for `profile_id`. `None` means the
    /// stats still have to be fetched.
    ///
    async fn get(&self, profile_id: i64) -> Result<Option<StatsModel>>;
    ///
    /// Stores `props` as the snapshot for `profile_id`. Callers are expected to
    /// check `get` first; if a concurrent writer stored a snapshot in between,
    /// theirs is returned as `StatsWrite::AlreadyPresent`.
    ///
    async fn create<'a>(&self, profile_id: i64, props: &'a StatsProps) -> Result<StatsWrite>;
}

#[derive(Constructor)]
pub struct CoreStatsService {
    data_layer: Arc<dyn StatsDataLayer>,
}

#[async_trait]
impl StatsService for CoreStatsService {
    async fn get(&self, profile_id: i64) -> Result<Option<StatsModel>> {
        Ok(self.data_layer.get_stats_by_profile(profile_id).await?)
    }

    async fn create<'a>(&self, profile_id: i64, props: &'a StatsProps) -> Result<StatsWrite> {
        match self.data_layer.create_stats(profile_id, props).await? {
            Insert::Inserted(stats) => Ok(StatsWrite::Created(stats)),
            Insert::Duplicate => {
                warn!("Stats for profile {profile_id} created concurrently, re-reading");
                self.get(profile_id).await?
                    .map(StatsWrite::AlreadyPresent)
                    .ok_or(StatsServiceError::ConflictNotReadable(profile_id))
            }
        }
    }
}
