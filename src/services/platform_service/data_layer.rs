use axum::async_trait;
use derive_more::Constructor;
use sqlx::SqlitePool;

use crate::data_layer_error::Result;

use super::models::PlatformModel;

#[async_trait]
pub trait PlatformDataLayer: Send + Sync {
    ///
    /// Retrieves the platform with the exact `code` given, if it exists
    ///
    async fn get_platform_by_code<'a>(&self, code: &'a str) -> Result<Option<PlatformModel>>;
}

#[derive(Constructor)]
pub struct DbPlatformDataLayer {
    db: SqlitePool,
}

#[async_trait]
impl PlatformDataLayer for DbPlatformDataLayer {
    async fn get_platform_by_code<'a>(&self, code: &'a str) -> Result<Option<PlatformModel>> {
        let platform = sqlx::query_as::<_, PlatformModel>("SELECT id, code FROM platforms WHERE code = ?")
            .bind(code)
            .fetch_optional(&self.db).await?;

        Ok(platform)
    }
}
