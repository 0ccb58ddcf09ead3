//! Favorites endpoints: the anonymous /api/save submission log and the
//! authenticated /api/favorites get/set pair. The two recording paths are
//! independent; anonymous submissions are never merged into accounts.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::current_user;
use crate::error::ApiError;
use crate::store::Submission;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoritesRequest {
    #[serde(default)]
    pub favorites: Vec<String>,
}

/// POST /api/save: anonymous submission endpoint. Unknown slugs are
/// silently dropped and the list capped before the record is appended.
pub async fn save(
    State(state): State<Arc<AppState>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<Value>, ApiError> {
    let ip = client_ip(&headers, peer.as_ref());

    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(ApiError::bad_request("Name and email are required"));
    }

    let favorites = state
        .catalog
        .sanitize_favorites(&payload.favorites, state.config.store.favorites_max);
    let saved = favorites.len();

    state
        .submissions
        .append(&Submission {
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            city: payload.city,
            favorites,
            note: payload.note,
            ip,
            timestamp: Utc::now(),
        })
        .await?;

    Ok(Json(json!({ "ok": true, "saved": saved })))
}

/// GET /api/favorites: the signed-in user's saved slugs.
pub async fn favorites_get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let user = current_user(&state, &headers)
        .await
        .ok_or_else(|| ApiError::unauthorized("Sign in to use favorites"))?;
    Ok(Json(json!({ "favorites": user.favorites })))
}

/// POST /api/favorites: replace the signed-in user's list. Unknown slugs
/// and duplicates are dropped, the result capped, then persisted.
pub async fn favorites_set(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<FavoritesRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = current_user(&state, &headers)
        .await
        .ok_or_else(|| ApiError::unauthorized("Sign in to use favorites"))?;

    let favorites = state
        .catalog
        .sanitize_favorites(&payload.favorites, state.config.store.favorites_max);
    let updated = state.users.set_favorites(&user.id, favorites).await?;

    Ok(Json(json!({ "ok": true, "favorites": updated.favorites })))
}

fn client_ip(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| peer.map(|ConnectInfo(addr)| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
