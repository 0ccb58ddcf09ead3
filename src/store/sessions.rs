use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{read_or_default, replace_atomic, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Token -> session table in sessions.json. Sessions never expire; they
/// only go away on logout.
pub struct SessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(data_dir: &std::path::Path) -> Self {
        Self {
            path: data_dir.join("sessions.json"),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> HashMap<String, Session> {
        read_or_default(&self.path)
    }

    /// Issue a fresh opaque token for the user.
    pub async fn create(&self, user_id: &str) -> Result<String, StoreError> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.read_all();
        let token = Uuid::new_v4().simple().to_string();
        sessions.insert(
            token.clone(),
            Session {
                user_id: user_id.to_string(),
                created_at: Utc::now(),
            },
        );
        replace_atomic(&self.path, &sessions)?;
        Ok(token)
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let _guard = self.lock.lock().await;
        self.read_all().remove(token)
    }

    /// Idempotent: deleting an unknown token is a no-op.
    pub async fn delete(&self, token: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.read_all();
        if sessions.remove(token).is_some() {
            replace_atomic(&self.path, &sessions)?;
        }
        Ok(())
    }
}
