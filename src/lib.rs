pub mod data_layer_error;
pub mod db;

pub mod middleware {
    pub mod session_middleware;
}

pub mod models {
    pub mod stats_models;
}

pub mod routes {
    pub mod search_routes;
}

pub mod services {
    pub mod platform_service;
    pub mod profile_service;
    pub mod stats_service;
    pub mod provider_service;
    pub mod session_binder;
    pub mod lookup_service;
}
