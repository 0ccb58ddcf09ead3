use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{read_or_default, replace_atomic, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Password hash, never the plain text.
    pub password: String,
    #[serde(default)]
    pub favorites: Vec<String>,
}

/// JSON-array table of accounts, rewritten wholesale on each mutation.
/// The mutex serializes read-modify-write within this process; concurrent
/// writers from other processes are last-writer-wins.
pub struct UserStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl UserStore {
    pub fn new(data_dir: &std::path::Path) -> Self {
        Self {
            path: data_dir.join("users.json"),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Vec<User> {
        read_or_default(&self.path)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.to_lowercase();
        let _guard = self.lock.lock().await;
        self.read_all()
            .into_iter()
            .find(|u| u.email.to_lowercase() == email)
    }

    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        let _guard = self.lock.lock().await;
        self.read_all().into_iter().find(|u| u.id == id)
    }

    /// Create an account with an empty favorites list. Fails when the
    /// case-folded email is already registered.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let _guard = self.lock.lock().await;
        let mut users = self.read_all();
        let folded = email.to_lowercase();
        if users.iter().any(|u| u.email.to_lowercase() == folded) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            favorites: Vec::new(),
        };
        users.push(user.clone());
        replace_atomic(&self.path, &users)?;
        Ok(user)
    }

    /// Replace a user's favorites list and persist the whole table.
    pub async fn set_favorites(
        &self,
        user_id: &str,
        favorites: Vec<String>,
    ) -> Result<User, StoreError> {
        let _guard = self.lock.lock().await;
        let mut users = self.read_all();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UnknownUser)?;
        user.favorites = favorites;
        let updated = user.clone();
        replace_atomic(&self.path, &users)?;
        Ok(updated)
    }
}
