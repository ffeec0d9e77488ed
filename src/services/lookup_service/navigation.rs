pub const PLAYER_NOT_FOUND: &str = "/search?not_found_api=player_not_found";
pub const STATS_NOT_FOUND: &str = "/search?not_found_api=stats_not_found";
pub const UPSTREAM_UNAVAILABLE: &str = "/search?error=upstream_unavailable";
pub const NO_ACTIVE_LOOKUP: &str = "/search?error=no_active_lookup";

pub fn stats_view(username: &str) -> String {
    format!("/stats/{}", urlencoding::encode(username))
}
