pub mod data_layer;
pub mod error;
pub mod models;

use std::sync::Arc;

use axum::async_trait;
use derive_more::Constructor;

use self::{data_layer::PlatformDataLayer, error::Result, models::PlatformModel};

const DEFAULT_EXTERNAL_TOKEN: &str = "PC";

///
/// Read-only catalog of the platforms players can be looked up on.
///
#[async_trait]
pub trait PlatformService: Send + Sync {
    ///
    /// Resolves the platform `code` (ie. `PC`, `PSN`, `XBOX`) into its record.
    /// Returns `None` for unknown codes, which callers treat as user input
    /// rather than a fault.
    ///
    async fn resolve<'a>(&self, code: &'a str) -> Result<Option<PlatformModel>>;
}

#[derive(Constructor)]
pub struct CorePlatformService {
    data_layer: Arc<dyn PlatformDataLayer>,
}

#[async_trait]
impl PlatformService for CorePlatformService {
    async fn resolve<'a>(&self, code: &'a str) -> Result<Option<PlatformModel>> {
        Ok(self.data_layer.get_platform_by_code(code).await?)
    }
}

///
/// Maps a platform code onto the token the stats API expects.
/// Every code the API doesn't rename falls back to `PC`.
///
pub fn to_external_token(code: &str) -> &'static str {
    match code {
        "PSN" => "PS4",
        "XBOX" => "X1",
        _ => DEFAULT_EXTERNAL_TOKEN,
    }
}
