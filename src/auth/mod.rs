//! Password hashing, session cookies, and request -> user resolution.

use axum::http::HeaderMap;
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

use crate::store::User;
use crate::AppState;

pub const SESSION_COOKIE: &str = "myuni_session";

const LEGACY_PREFIX: &str = "sha256$";

/// Hash a password with bcrypt; when bcrypt is unavailable, fall back to
/// the salted legacy format. Either output verifies via verify_password.
pub fn hash_password(password: &str) -> String {
    match bcrypt::hash(password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!("bcrypt unavailable, using salted sha256 fallback: {}", e);
            let salt: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(16)
                .map(char::from)
                .collect();
            legacy_hash(password, &salt)
        }
    }
}

/// Verify against whichever format the stored hash uses.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if let Some(rest) = stored.strip_prefix(LEGACY_PREFIX) {
        let Some((salt, _digest)) = rest.split_once('$') else {
            return false;
        };
        return legacy_hash(password, salt) == stored;
    }
    bcrypt::verify(password, stored).unwrap_or(false)
}

/// Legacy format: `sha256$<salt>$<hex digest of salt || password>`.
fn legacy_hash(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}{}${}", LEGACY_PREFIX, salt, hex)
}

/// Build the Set-Cookie value for a fresh session.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token
    )
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Pull a single cookie value out of the Cookie header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

/// Cookie token -> session record -> user record; any miss is anonymous.
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> Option<User> {
    let token = cookie_value(headers, SESSION_COOKIE)?;
    let session = state.sessions.get(&token).await?;
    state.users.find_by_id(&session.user_id).await
}
