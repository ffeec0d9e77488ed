use super::profile_service::models::ProfileModel;

const PROFILE_ID_KEY: &str = "game_profile_id";
const PROFILE_USERNAME_KEY: &str = "game_profile_username";

///
/// Per-caller key/value session. Reading and writing values is the only
/// capability the lookup workflow needs from the session transport.
///
pub trait Session: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

///
/// The game profile a caller is currently viewing
///
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBinding {
    pub game_profile_id: i64,
    pub game_profile_username: String,
}

///
/// Records `profile` as the profile the session is viewing, replacing
/// any previous binding.
///
pub fn bind_profile(session: &dyn Session, profile: &ProfileModel) {
    session.set(PROFILE_ID_KEY, profile.id.to_string());
    session.set(PROFILE_USERNAME_KEY, profile.username.clone());
}

///
/// Reads the bound profile back. Returns `None` if nothing is bound, or
/// if the stored id was tampered with.
///
pub fn bound_profile(session: &dyn Session) -> Option<SessionBinding> {
    let game_profile_id = session.get(PROFILE_ID_KEY)?.parse().ok()?;
    let game_profile_username = session.get(PROFILE_USERNAME_KEY)?;

    Some(SessionBinding { game_profile_id, game_profile_username })
}
