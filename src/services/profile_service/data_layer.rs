use axum::async_trait;
use derive_more::Constructor;
use sqlx::SqlitePool;

use crate::data_layer_error::{unique_insert, Insert, Result};

use super::models::ProfileModel;

#[async_trait]
pub trait ProfileDataLayer: Send + Sync {
    async fn get_profile_by_username<'a>(&self, username: &'a str) -> Result<Option<ProfileModel>>;
    ///
    /// Inserts a new, unlinked profile. Returns `Insert::Duplicate` if a
    /// profile with the same username already exists.
    ///
    async fn create_profile<'a>(&self, username: &'a str, platform_id: Option<i64>) -> Result<Insert<ProfileModel>>;
}

#[derive(Constructor)]
pub struct DbProfileDataLayer {
    db: SqlitePool,
}

#[async_trait]
impl ProfileDataLayer for DbProfileDataLayer {
    async fn get_profile_by_username<'a>(&self, username: &'a str) -> Result<Option<ProfileModel>> {
        let profile = sqlx::query_as::<_, ProfileModel>("
            SELECT id, username, platform_id, user_id
            FROM game_profiles WHERE username = ?
            ")
            .bind(username)
            .fetch_optional(&self.db).await?;

        Ok(profile)
    }

    async fn create_profile<'a>(&self, username: &'a str, platform_id: Option<i64>) -> Result<Insert<ProfileModel>> {
        let res = sqlx::query("INSERT INTO game_profiles (username, platform_id) VALUES (?, ?)")
            .bind(username)
            .bind(platform_id)
            .execute(&self.db).await;

        Ok(match unique_insert(res)? {
            Insert::Inserted(res) => Insert::Inserted(ProfileModel {
                id: res.last_insert_rowid(),
                username: username.to_string(),
                platform_id,
                user_id: None,
            }),
            Insert::Duplicate => Insert::Duplicate,
        })
    }
}
