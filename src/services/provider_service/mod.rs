pub mod error;
pub mod normalize;
pub mod settings;

use std::time::Duration;

use axum::async_trait;
use log::{info, warn};
use reqwest::Client;
use serde_json::Value;

use self::{error::{ProviderError, Result}, settings::ProviderSettings};

/// Loosely-typed payload as returned by the stats provider
pub type RawStats = Value;

/// Top-level key the provider uses to report an unknown player
const PROVIDER_ERROR_KEY: &str = "Error";

///
/// Source of player statistics outside of the cache.
///
#[async_trait]
pub trait StatsProvider: Send + Sync {
    ///
    /// Requests the raw stats of `username` on the provider's `platform_token`.
    /// Returns `ProviderError::PlayerNotFound` if the provider doesn't know the
    /// player; every other error means the provider could not be used. Calls are
    /// never retried.
    ///
    async fn fetch<'a>(&self, username: &'a str, platform_token: &'a str) -> Result<RawStats>;
}

///
/// `StatsProvider` backed by the stats provider's HTTP API
///
pub struct ApiStatsProvider {
    client: Client,
    settings: ProviderSettings,
    api_key: String,
}

impl ApiStatsProvider {
    pub fn new(settings: ProviderSettings, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_s))
            .build()
            .map_err(ProviderError::RequestFailed)?;

        Ok(Self { client, settings, api_key })
    }
}

#[async_trait]
impl StatsProvider for ApiStatsProvider {
    async fn fetch<'a>(&self, username: &'a str, platform_token: &'a str) -> Result<RawStats> {
        info!("Fetching stats for `{username}` on {platform_token}");

        let res = self.client.get(&self.settings.base_url)
            .query(&[("auth", self.api_key.as_str()), ("player", username), ("platform", platform_token)])
            .send().await
            .map_err(ProviderError::RequestFailed)?;

        let status = res.status();
        let body = res.text().await.map_err(ProviderError::RequestFailed)?;

        let classified = classify(status.as_u16(), &body);
        if let Err(e) = &classified {
            warn!("Stats request for `{username}` on {platform_token} failed: {e}");
        }
        classified
    }
}

///
/// Sorts a provider response into a usable payload, an unknown player
/// (a top-level `Error` field, whatever the status), or a failed request.
///
pub fn classify(status: u16, body: &str) -> Result<RawStats> {
    let parsed = serde_json::from_str::<Value>(body);

    if let Ok(Value::Object(fields)) = &parsed {
        if let Some(reason) = fields.get(PROVIDER_ERROR_KEY) {
            let reason = reason.as_str().map(str::to_string).unwrap_or_else(|| reason.to_string());
            return Err(ProviderError::PlayerNotFound(reason));
        }
    }

    if !(200..300).contains(&status) {
        return Err(ProviderError::BadStatus(status));
    }

    match parsed {
        Ok(raw @ Value::Object(_)) => Ok(raw),
        Ok(other) => Err(ProviderError::Malformed(format!("expected an object, got `{other}`"))),
        Err(e) => Err(ProviderError::Malformed(e.to_string())),
    }
}
