#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PlatformModel {
    pub id: i64,
    pub code: String,
}
