use axum::{async_trait, extract::FromRequestParts, http::{request::Parts, StatusCode}};
use tower_cookies::{Cookie, Cookies};

use crate::services::session_binder::Session;

///
/// Cookie-backed `Session`. Requires `CookieManagerLayer` on the router.
///
#[derive(Clone)]
pub struct CookieSession(Cookies);

#[async_trait]
impl <S : Send + Sync> FromRequestParts<S> for CookieSession {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        return if let Some(cookies) = parts.extensions.get::<Cookies>() {
            Ok(CookieSession(cookies.clone()))
        } else {
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Session cookies unavailable".to_string()))
        };
    }
}

impl Session for CookieSession {
    fn get(&self, key: &str) -> Option<String> {
        let cookie = self.0.get(key)?;
        urlencoding::decode(cookie.value()).ok().map(|v| v.into_owned())
    }

    fn set(&self, key: &str, value: String) {
        // Usernames may hold characters that aren't valid in a cookie value
        let value = urlencoding::encode(&value).into_owned();
        let cookie = Cookie::build(key.to_string(), value)
            .path("/")
            .http_only(true)
            .finish();

        self.0.add(cookie);
    }
}
