use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub platform: String,
}

///
/// Error indicators the search page can be redirected back with
///
#[derive(Default, Deserialize)]
pub struct SearchQuery {
    pub error: Option<String>,
    pub not_found_api: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchPageModel {
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsPageModel {
    pub username: String,
    pub level: Option<i64>,
    pub kills: Option<i64>,
    pub damage: Option<i64>,
    pub wins: Option<i64>,
    pub rank: Option<String>,
    pub is_linked: bool,
}
