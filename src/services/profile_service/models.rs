#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub username: String,
    pub platform_id: Option<i64>,
    /// Site account that claimed this profile, if any
    pub user_id: Option<i64>,
}

impl ProfileModel {
    pub fn is_linked(&self) -> bool {
        self.user_id.is_some()
    }
}
