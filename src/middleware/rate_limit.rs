//! Sliding-window rate limit, one window per client key.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::AppState;

pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now())
    }

    /// Record one request for the client at `now`; false when the trailing
    /// window already holds the maximum.
    fn check_at(&self, client: &str, now: Instant) -> bool {
        let mut clients = match self.clients.lock() {
            Ok(guard) => guard,
            // A poisoned lock only happens after a panic elsewhere; failing
            // open keeps the site serving.
            Err(poisoned) => poisoned.into_inner(),
        };
        let window = clients.entry(client.to_string()).or_default();
        while let Some(&front) = window.front() {
            if now.duration_since(front) >= self.window {
                window.pop_front();
            } else {
                break;
            }
        }
        if window.len() >= self.max_requests as usize {
            return false;
        }
        window.push_back(now);
        true
    }
}

/// Client key: X-Forwarded-For when present (deployments behind a proxy),
/// else the socket peer address, else a shared bucket.
fn client_key(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
    {
        let forwarded = forwarded.trim();
        if !forwarded.is_empty() {
            return forwarded.to_string();
        }
    }
    peer.map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(
        request.headers(),
        request.extensions().get::<ConnectInfo<SocketAddr>>(),
    );
    if !state.rate.check(&key) {
        tracing::debug!("rate limited {}", key);
        return ApiError::too_many_requests("Too many requests, slow down").into_response();
    }
    next.run(request).await
}
