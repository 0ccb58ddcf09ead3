//! File-backed storage: users and sessions live in JSON files rewritten
//! wholesale on each mutation, submissions in an append-only jsonl log.

pub mod sessions;
pub mod submissions;
pub mod users;

pub use sessions::{Session, SessionStore};
pub use submissions::{Submission, SubmissionLog};
pub use users::{User, UserStore};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("unknown user")]
    UnknownUser,
}

/// Read a JSON file, treating missing or malformed content as the default
/// value rather than an error.
pub(crate) fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("treating malformed {} as empty: {}", path.display(), e);
            T::default()
        }
    }
}

/// Replace a settings file atomically: write a sibling temp file, then
/// rename over the target.
pub(crate) fn replace_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    let body = serde_json::to_vec_pretty(value)?;
    std::fs::write(&tmp, body)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
