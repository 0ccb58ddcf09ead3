pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod images;
pub mod middleware;
pub mod render;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::AppConfig;
use middleware::RateLimiter;
use store::{SessionStore, SubmissionLog, UserStore};

/// Everything a request handler needs: the immutable catalog, the
/// file-backed stores, and the per-process rate limiter. Tests construct
/// this over a temp directory.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: catalog::Catalog,
    pub users: UserStore,
    pub sessions: SessionStore,
    pub submissions: SubmissionLog,
    pub rate: RateLimiter,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        // Best-effort: a read-only filesystem still serves the built-in data
        let _ = std::fs::create_dir_all(&config.store.data_dir);
        let _ = std::fs::create_dir_all(&config.images.cache_dir);

        let catalog = catalog::Catalog::load(&config.store.data_dir);
        let users = UserStore::new(&config.store.data_dir);
        let sessions = SessionStore::new(&config.store.data_dir);
        let submissions = SubmissionLog::new(&config.store.data_dir);
        let rate = RateLimiter::new(
            config.limits.rate_limit_requests,
            Duration::from_secs(config.limits.rate_limit_window_secs),
        );

        Arc::new(Self {
            config,
            catalog,
            users,
            sessions,
            submissions,
            rate,
        })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // Pages
        .route("/", get(handlers::pages::home))
        .route("/universities", get(handlers::pages::universities))
        .route("/university/:slug", get(handlers::pages::university_detail))
        .route("/favorites", get(handlers::pages::favorites_page))
        // Session lifecycle
        .route(
            "/signup",
            get(handlers::pages::signup_form).post(handlers::auth::signup),
        )
        .route(
            "/login",
            get(handlers::pages::login_form).post(handlers::auth::login),
        )
        .route("/logout", post(handlers::auth::logout))
        // JSON API
        .route("/api/save", post(handlers::favorites::save))
        .route(
            "/api/favorites",
            get(handlers::favorites::favorites_get).post(handlers::favorites::favorites_set),
        )
        .route("/health", get(handlers::health))
        // Static files, including the image cache
        .nest_service("/static", ServeDir::new(static_dir))
        // Global middleware
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::restrict_hosts,
        ))
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
