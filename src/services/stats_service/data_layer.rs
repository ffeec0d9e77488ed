use axum::async_trait;
use chrono::Utc;
use derive_more::Constructor;
use sqlx::SqlitePool;

use crate::data_layer_error::{unique_insert, Insert, Result};

use super::models::{StatsModel, StatsProps};

#[async_trait]
pub trait StatsDataLayer: Send + Sync {
    async fn get_stats_by_profile(&self, profile_id: i64) -> Result<Option<StatsModel>>;
    ///
    /// Inserts the stats snapshot for `profile_id`. Returns `Insert::Duplicate`
    /// if the profile already has one; existing snapshots are never overwritten.
    ///
    async fn create_stats<'a>(&self, profile_id: i64, props: &'a StatsProps) -> Result<Insert<StatsModel>>;
}

#[derive(Constructor)]
pub struct DbStatsDataLayer {
    db: SqlitePool,
}

#[async_trait]
impl StatsDataLayer for DbStatsDataLayer {
    async fn get_stats_by_profile(&self, profile_id: i64) -> Result<Option<StatsModel>> {
        let stats = sqlx::query_as::<_, StatsModel>("
            SELECT id, profile_id, player_level, player_kills, player_damage,
                   player_wins, player_rank, created_at
            FROM stats WHERE profile_id = ?
            ")
            .bind(profile_id)
            .fetch_optional(&self.db).await?;

        Ok(stats)
    }

    async fn create_stats<'a>(&self, profile_id: i64, props: &'a StatsProps) -> Result<Insert<StatsModel>> {
        let created_at = Utc::now().naive_utc();

        let res = sqlx::query("
            INSERT INTO stats (profile_id, player_level, player_kills, player_damage, player_wins, player_rank, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ")
            .bind(profile_id)
            .bind(props.player_level)
            .bind(props.player_kills)
            .bind(props.player_damage)
            .bind(props.player_wins)
            .bind(props.player_rank.clone())
            .bind(created_at)
            .execute(&self.db).await;

        Ok(match unique_insert(res)? {
            Insert::Inserted(res) => Insert::Inserted(StatsModel {
                id: res.last_insert_rowid(),
                profile_id,
                player_level: props.player_level,
                player_kills: props.player_kills,
                player_damage: props.player_damage,
                player_wins: props.player_wins,
                player_rank: props.player_rank.clone(),
                created_at,
            }),
            Insert::Duplicate => Insert::Duplicate,
        })
    }
}
