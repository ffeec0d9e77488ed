use std::{fs, sync::Arc, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;

use lazy_static::lazy_static;

use player_stats::{
    db,
    routes::search_routes,
    services::{
        lookup_service::CoreLookupService,
        platform_service::{data_layer::DbPlatformDataLayer, CorePlatformService},
        profile_service::{data_layer::DbProfileDataLayer, CoreProfileService},
        provider_service::{settings::ProviderSettings, ApiStatsProvider},
        stats_service::{data_layer::DbStatsDataLayer, CoreStatsService},
    },
};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::{TraceLayer, self};
use tracing::Level;

lazy_static! {
    static ref DATABASE_URL: String = env_or("DATABASE_URL", "sqlite://stats.db?mode=rwc");
    static ref STATS_API_KEY: String = env_or("STATS_API_KEY", "");
    static ref PORT: u16 = env_or("PORT", "3005").parse().expect("PORT must be a port number");
}

fn env_or(key: &str, default: &str) -> String {
    dotenv().ok();
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    // Setup tracing_subscriber
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Setup state
    let db = db::connect(&DATABASE_URL).await.expect("could not open database");
    let provider_settings: ProviderSettings = serde_json::from_str(
        &fs::read_to_string("./provider_settings.json").expect("provider_settings.json must be provided")
    ).expect("provider_settings.json is malformed");

    if STATS_API_KEY.is_empty() {
        tracing::warn!("STATS_API_KEY is not set, stats requests will be rejected upstream");
    }

    let platform_service = Arc::new(CorePlatformService::new(Arc::new(DbPlatformDataLayer::new(db.clone()))));
    let profile_service = Arc::new(CoreProfileService::new(Arc::new(DbProfileDataLayer::new(db.clone()))));
    let stats_service = Arc::new(CoreStatsService::new(Arc::new(DbStatsDataLayer::new(db.clone()))));
    let provider = Arc::new(
        ApiStatsProvider::new(provider_settings, STATS_API_KEY.clone()).expect("could not build stats provider client")
    );

    let lookup_service = Arc::new(CoreLookupService::new(platform_service, profile_service, stats_service, provider));

    let app = Router::new()
        // Routes
        .merge(search_routes::routes(lookup_service))
        // Logging
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO))
        )
        // Cookies
        .layer(CookieManagerLayer::new());

    let addr = SocketAddr::from(([0, 0, 0, 0], *PORT));
    tracing::info!("Listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service()).await
        .expect("server error");
}
