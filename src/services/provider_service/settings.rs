use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout_s: u64,
}
