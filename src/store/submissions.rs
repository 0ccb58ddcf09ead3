use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::Mutex;

use super::StoreError;

/// One saved-list submission from /api/save. Append-only; nothing reads
/// these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}

pub struct SubmissionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionLog {
    pub fn new(data_dir: &std::path::Path) -> Self {
        Self {
            path: data_dir.join("submissions.jsonl"),
            lock: Mutex::new(()),
        }
    }

    pub async fn append(&self, submission: &Submission) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(submission)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_writes_one_json_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path());

        for i in 0..3 {
            log.append(&Submission {
                name: format!("Visitor {}", i),
                email: "v@example.com".into(),
                city: Some("Dubai".into()),
                favorites: vec!["uowd".into()],
                note: None,
                ip: "127.0.0.1".into(),
                timestamp: Utc::now(),
            })
            .await
            .unwrap();
        }

        let raw = std::fs::read_to_string(dir.path().join("submissions.jsonl")).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let parsed: Submission = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.email, "v@example.com");
        }
    }
}
