//! Signup, login, and logout form handlers. Successful auth redirects home
//! with the session cookie set.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::{clear_session_cookie, cookie_value, hash_password, session_cookie,
    verify_password, SESSION_COOKIE};
use crate::render::layout;
use crate::store::StoreError;
use crate::AppState;

use super::pages::auth_form_body;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<SignupForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return form_error(
            StatusCode::BAD_REQUEST,
            "signup",
            "Name, email, and password are all required",
        );
    }

    let hash = hash_password(&form.password);
    let user = match state.users.create(name, email, &hash).await {
        Ok(user) => user,
        Err(StoreError::DuplicateEmail) => {
            return form_error(
                StatusCode::CONFLICT,
                "signup",
                "That email is already registered",
            );
        }
        Err(e) => {
            tracing::error!("signup failed: {}", e);
            return form_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "signup",
                "Something went wrong, please try again",
            );
        }
    };

    start_session(&state, &user.id).await
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return form_error(
            StatusCode::BAD_REQUEST,
            "login",
            "Email and password are required",
        );
    }

    let user = state.users.find_by_email(email).await;
    let Some(user) = user.filter(|u| verify_password(&form.password, &u.password)) else {
        return form_error(
            StatusCode::UNAUTHORIZED,
            "login",
            "Wrong email or password",
        );
    };

    start_session(&state, &user.id).await
}

/// Idempotent: a missing cookie or already-deleted session still clears
/// the cookie and redirects home.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(token) = cookie_value(&headers, SESSION_COOKIE) {
        if let Err(e) = state.sessions.delete(&token).await {
            tracing::error!("logout failed to delete session: {}", e);
        }
    }
    with_cookie(Redirect::to("/").into_response(), &clear_session_cookie())
}

async fn start_session(state: &AppState, user_id: &str) -> Response {
    match state.sessions.create(user_id).await {
        Ok(token) => with_cookie(Redirect::to("/").into_response(), &session_cookie(&token)),
        Err(e) => {
            tracing::error!("failed to persist session: {}", e);
            form_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "login",
                "Something went wrong, please try again",
            )
        }
    }
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    match cookie.parse() {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
            response
        }
        Err(_) => response,
    }
}

fn form_error(status: StatusCode, kind: &str, message: &str) -> Response {
    let title = if kind == "signup" { "Sign up" } else { "Log in" };
    (
        status,
        Html(layout(title, None, &auth_form_body(kind, Some(message)))),
    )
        .into_response()
}
