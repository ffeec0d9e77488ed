pub mod data_layer;
pub mod error;
pub mod models;

use std::sync::Arc;

use axum::async_trait;
use derive_more::Constructor;
use log::warn;

use crate::data_layer_error::Insert;

use self::{data_layer::ProfileDataLayer, error::{ProfileServiceError, Result}, models::ProfileModel};

/// Read/create rounds before a username conflict is reported as a fault
const MAX_CREATE_ATTEMPTS: usize = 2;

#[async_trait]
pub trait ProfileService: Send + Sync {
    ///
    /// Retrieves the profile for `username`. Absence is not an error.
    ///
    async fn read<'a>(&self, username: &'a str) -> Result<Option<ProfileModel>>;
    ///
    /// Retrieves the profile for `username`, creating it on `platform_id` if it
    /// doesn't exist yet. A concurrent creation of the same username is resolved
    /// by re-reading the row the other writer inserted.
    ///
    async fn get_or_create<'a>(&self, username: &'a str, platform_id: Option<i64>) -> Result<ProfileModel>;
}

#[derive(Constructor)]
pub struct CoreProfileService {
    data_layer: Arc<dyn ProfileDataLayer>,
}

#[async_trait]
impl ProfileService for CoreProfileService {
    async fn read<'a>(&self, username: &'a str) -> Result<Option<ProfileModel>> {
        Ok(self.data_layer.get_profile_by_username(username).await?)
    }

    async fn get_or_create<'a>(&self, username: &'a str, platform_id: Option<i64>) -> Result<ProfileModel> {
        for _ in 0..MAX_CREATE_ATTEMPTS {
            if let Some(profile) = self.read(username).await? {
                return Ok(profile);
            }

            match self.data_layer.create_profile(username, platform_id).await? {
                Insert::Inserted(profile) => return Ok(profile),
                // Someone else created it between the read and the insert
                Insert::Duplicate => warn!("Profile `{username}` created concurrently, re-reading"),
            }
        }

        Err(ProfileServiceError::CreationContended(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{data_layer_error, db::memory_pool, services::profile_service::data_layer::DbProfileDataLayer};

    ///
    /// Hides existing rows from the first `stale_reads` lookups, reproducing
    /// a writer that lost the race between its read and its insert.
    ///
    struct StaleReadDataLayer {
        inner: DbProfileDataLayer,
        stale_reads: AtomicUsize,
    }

    #[async_trait]
    impl ProfileDataLayer for StaleReadDataLayer {
        async fn get_profile_by_username<'a>(&self, username: &'a str) -> data_layer_error::Result<Option<ProfileModel>> {
            if self.stale_reads.load(Ordering::SeqCst) > 0 {
                self.stale_reads.fetch_sub(1, Ordering::SeqCst);
                return Ok(None);
            }
            self.inner.get_profile_by_username(username).await
        }

        async fn create_profile<'a>(&self, username: &'a str, platform_id: Option<i64>) -> data_layer_error::Result<Insert<ProfileModel>> {
            self.inner.create_profile(username, platform_id).await
        }
    }

    async fn service() -> (CoreProfileService, sqlx::SqlitePool) {
        let db = memory_pool().await;
        (CoreProfileService::new(Arc::new(DbProfileDataLayer::new(db.clone()))), db)
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let (svc, db) = service().await;

        let first = svc.get_or_create("newplayer", Some(1)).await.unwrap();
        let second = svc.get_or_create("newplayer", Some(2)).await.unwrap();

        assert_eq!(first.id, second.id);
        // The platform of the first creation sticks
        assert_eq!(second.platform_id, Some(1));
        assert!(!second.is_linked());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM game_profiles")
            .fetch_one(&db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_read_absent_profile() {
        let (svc, _db) = service().await;
        assert!(svc.read("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let (svc, _db) = service().await;

        let lower = svc.get_or_create("player", None).await.unwrap();
        let upper = svc.get_or_create("Player", None).await.unwrap();

        assert_ne!(lower.id, upper.id);
    }

    #[tokio::test]
    async fn test_unknown_platform_creates_unset_platform() {
        let (svc, _db) = service().await;

        let profile = svc.get_or_create("drifter", None).await.unwrap();
        assert_eq!(profile.platform_id, None);
    }

    #[tokio::test]
    async fn test_duplicate_create_rereads_existing_row() {
        let db = memory_pool().await;
        let existing = DbProfileDataLayer::new(db.clone());
        let Insert::Inserted(winner) = existing.create_profile("racer", Some(1)).await.unwrap() else {
            panic!("first insert should succeed");
        };

        let svc = CoreProfileService::new(Arc::new(StaleReadDataLayer {
            inner: DbProfileDataLayer::new(db),
            stale_reads: AtomicUsize::new(1),
        }));

        let profile = svc.get_or_create("racer", Some(2)).await.unwrap();
        assert_eq!(profile, winner);
    }

    #[tokio::test]
    async fn test_persistent_conflict_is_bounded() {
        let db = memory_pool().await;
        DbProfileDataLayer::new(db.clone()).create_profile("ghost", None).await.unwrap();

        let svc = CoreProfileService::new(Arc::new(StaleReadDataLayer {
            inner: DbProfileDataLayer::new(db),
            stale_reads: AtomicUsize::new(usize::MAX),
        }));

        let res = svc.get_or_create("ghost", None).await;
        assert!(matches!(res, Err(ProfileServiceError::CreationContended(name)) if name == "ghost"));
    }
}
