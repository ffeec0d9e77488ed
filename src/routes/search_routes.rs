use std::sync::Arc;

use axum::{Router, routing::get, extract::{FromRef, Path, Query, State}, response::Redirect, Form, Json};

use crate::{
    middleware::session_middleware::CookieSession,
    models::stats_models::{SearchForm, SearchPageModel, SearchQuery, StatsPageModel},
    services::lookup_service::{error::Result, LookupService},
};

#[derive(Clone, FromRef)]
pub struct SearchRoutesState {
    lookup_service: Arc<dyn LookupService>,
}

pub fn routes(lookup_service: Arc<dyn LookupService>) -> Router {
    Router::new()
        // Routes
        .route("/search", get(search_form).post(find_player_stats))
        .route("/stats/:username", get(stats_page))
        // State
        .with_state(SearchRoutesState { lookup_service })
}

async fn search_form(Query(query): Query<SearchQuery>) -> Json<SearchPageModel> {
    let error = query.not_found_api.or(query.error).map(|code| error_message(&code));
    Json(SearchPageModel { error })
}

async fn find_player_stats(
    State(lookup_service): State<Arc<dyn LookupService>>,
    session: CookieSession,
    Form(form): Form<SearchForm>,
) -> Result<Redirect> {
    let outcome = lookup_service.lookup(&form.username, &form.platform, &session).await?;
    Ok(Redirect::to(&outcome.navigation_target))
}

async fn stats_page(
    State(lookup_service): State<Arc<dyn LookupService>>,
    Path(username): Path<String>,
    session: CookieSession,
) -> Result<Json<StatsPageModel>> {
    Ok(Json(lookup_service.stats_page(&username, &session).await?))
}

fn error_message(code: &str) -> String {
    match code {
        "player_not_found" => "Player not found in the API.",
        "stats_not_found" => "No stats have been saved for this player yet.",
        "upstream_unavailable" => "Error requesting information. Try again later",
        "no_active_lookup" => "Search for a player to see their stats.",
        other => other,
    }.to_string()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::{header, Request, StatusCode, Response}};
    use tower::ServiceExt;
    use tower_cookies::CookieManagerLayer;

    use super::*;
    use crate::{
        db::memory_pool,
        services::lookup_service::tests::{gold_payload, lookup_service, FakeProvider, FakeResponse},
    };

    async fn app(response: FakeResponse) -> Router {
        let svc = lookup_service(memory_pool().await, Arc::new(FakeProvider::new(response)));
        routes(Arc::new(svc)).layer(CookieManagerLayer::new())
    }

    fn search_request(username: &str, platform: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={username}&platform={platform}")))
            .unwrap()
    }

    fn location(res: &Response<axum::body::BoxBody>) -> &str {
        res.headers().get(header::LOCATION).unwrap().to_str().unwrap()
    }

    /// Turns the response's `Set-Cookie`s into a `Cookie` request header
    fn cookie_header(res: &Response<axum::body::BoxBody>) -> String {
        res.headers().get_all(header::SET_COOKIE).iter()
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: Response<axum::body::BoxBody>) -> T {
        let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_redirects_to_stats_and_renders() {
        let app = app(FakeResponse::Found(gold_payload())).await;

        let res = app.clone().oneshot(search_request("newplayer", "PC")).await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/stats/newplayer");

        let req = Request::builder()
            .uri("/stats/newplayer")
            .header(header::COOKIE, cookie_header(&res))
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let page: StatsPageModel = body_json(res).await;
        assert_eq!(page.username, "newplayer");
        assert_eq!(page.level, Some(50));
        assert_eq!(page.rank.as_deref(), Some("Gold"));
        assert!(!page.is_linked);
    }

    #[tokio::test]
    async fn test_search_for_unknown_player() {
        let app = app(FakeResponse::NotFound).await;

        let res = app.oneshot(search_request("Davydav1919191919", "PC")).await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/search?not_found_api=player_not_found");
    }

    #[tokio::test]
    async fn test_search_with_empty_username() {
        let app = app(FakeResponse::NotFound).await;

        let res = app.oneshot(search_request("", "PC")).await.unwrap();
        assert_eq!(location(&res), "/search?not_found_api=player_not_found");
    }

    #[tokio::test]
    async fn test_search_with_provider_down() {
        let app = app(FakeResponse::Down).await;

        let res = app.oneshot(search_request("newplayer", "XBOX")).await.unwrap();
        assert_eq!(location(&res), "/search?error=upstream_unavailable");
    }

    #[tokio::test]
    async fn test_stats_page_without_session_redirects() {
        let app = app(FakeResponse::Found(gold_payload())).await;

        let req = Request::builder().uri("/stats/newplayer").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/search?error=no_active_lookup");
    }

    #[tokio::test]
    async fn test_search_form_shows_error_indicator() {
        let app = app(FakeResponse::NotFound).await;

        let req = Request::builder().uri("/search?not_found_api=player_not_found").body(Body::empty()).unwrap();
        let page: SearchPageModel = body_json(app.clone().oneshot(req).await.unwrap()).await;
        assert_eq!(page.error.as_deref(), Some("Player not found in the API."));

        let req = Request::builder().uri("/search").body(Body::empty()).unwrap();
        let page: SearchPageModel = body_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(page.error, None);
    }
}
