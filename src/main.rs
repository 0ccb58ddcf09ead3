use std::net::SocketAddr;

use myuni::{app, config, images, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up MYUNI_* overrides
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    let state = AppState::new(config.clone());
    tracing::info!(
        "loaded {} universities across {} cities",
        state.catalog.all().len(),
        myuni::catalog::query::cities(state.catalog.all()).len()
    );

    // Advisory image cache fill; request handling never waits on it
    tokio::spawn(images::populate(state.clone()));

    // Allow tests or deployments to override port via env
    let port = std::env::var("MYUNI_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("MyUni listening on http://{}", bind_addr);

    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server");
}
