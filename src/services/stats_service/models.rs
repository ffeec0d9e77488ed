use chrono::NaiveDateTime;

///
/// Measurements taken from the stats provider. Every field is optional,
/// since the provider's payloads are frequently incomplete.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsProps {
    pub player_level: Option<i64>,
    pub player_kills: Option<i64>,
    pub player_damage: Option<i64>,
    pub player_wins: Option<i64>,
    pub player_rank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StatsModel {
    pub id: i64,
    pub profile_id: i64,
    pub player_level: Option<i64>,
    pub player_kills: Option<i64>,
    pub player_damage: Option<i64>,
    pub player_wins: Option<i64>,
    pub player_rank: Option<String>,
    pub created_at: NaiveDateTime,
}

///
/// Result of writing a profile's stats snapshot.
///
#[derive(Debug, Clone, PartialEq)]
pub enum StatsWrite {
    /// This call inserted the snapshot
    Created(StatsModel),
    /// Another writer got there first; carries their snapshot
    AlreadyPresent(StatsModel),
}
