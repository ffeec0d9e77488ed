use serde_json::Value;

use crate::services::stats_service::models::StatsProps;

use super::RawStats;

///
/// Flattens the provider's nested payload into `StatsProps`. Each field
/// is looked up independently and left empty when its path is missing
/// or holds something unusable.
///
pub fn normalize(raw: &RawStats) -> StatsProps {
    StatsProps {
        player_level: int_at(raw, "/global/level"),
        player_kills: int_at(raw, "/total/kills/value"),
        player_damage: int_at(raw, "/total/damage/value"),
        player_wins: int_at(raw, "/total/career_wins/value"),
        player_rank: raw.pointer("/global/rank/rankName")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

///
/// Whole numbers only. Fractional or out-of-range values are treated
/// as absent rather than rounded, whether sent as numbers or strings.
///
fn int_at(raw: &Value, path: &str) -> Option<i64> {
    match raw.pointer(path)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        // Quoted numbers show up in some trackers
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| s.parse().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}
