use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub images: ImageConfig,
    pub limits: LimitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host header values accepted by the host-restriction middleware.
    /// Empty list means any host is accepted.
    pub allowed_hosts: Vec<String>,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub favorites_max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub cache_dir: PathBuf,
    /// Cached files smaller than this are treated as failed downloads.
    pub min_file_bytes: u64,
    pub download_timeout_secs: u64,
    pub download_concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub rate_limit_requests: u32,
    pub rate_limit_window_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                allowed_hosts: Vec::new(),
                static_dir: PathBuf::from("static"),
            },
            store: StoreConfig {
                data_dir: PathBuf::from("data"),
                favorites_max: 50,
            },
            images: ImageConfig {
                cache_dir: PathBuf::from("static/images"),
                min_file_bytes: 4096,
                download_timeout_secs: 8,
                download_concurrency: 4,
            },
            limits: LimitConfig {
                rate_limit_requests: 120,
                rate_limit_window_secs: 60,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("MYUNI_ALLOWED_HOSTS") {
            self.server.allowed_hosts = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(v) = env::var("MYUNI_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(v);
            self.images.cache_dir = self.server.static_dir.join("images");
        }
        if let Ok(v) = env::var("MYUNI_DATA_DIR") {
            self.store.data_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("MYUNI_FAVORITES_MAX") {
            self.store.favorites_max = v.parse().unwrap_or(self.store.favorites_max);
        }
        if let Ok(v) = env::var("MYUNI_IMAGE_MIN_BYTES") {
            self.images.min_file_bytes = v.parse().unwrap_or(self.images.min_file_bytes);
        }
        if let Ok(v) = env::var("MYUNI_IMAGE_TIMEOUT_SECS") {
            self.images.download_timeout_secs =
                v.parse().unwrap_or(self.images.download_timeout_secs);
        }
        if let Ok(v) = env::var("MYUNI_IMAGE_CONCURRENCY") {
            self.images.download_concurrency =
                v.parse().unwrap_or(self.images.download_concurrency);
        }
        if let Ok(v) = env::var("MYUNI_RATE_LIMIT_REQUESTS") {
            self.limits.rate_limit_requests = v.parse().unwrap_or(self.limits.rate_limit_requests);
        }
        if let Ok(v) = env::var("MYUNI_RATE_LIMIT_WINDOW_SECS") {
            self.limits.rate_limit_window_secs =
                v.parse().unwrap_or(self.limits.rate_limit_window_secs);
        }
        self
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.server.allowed_hosts.is_empty());
        assert_eq!(config.store.favorites_max, 50);
        assert_eq!(config.images.min_file_bytes, 4096);
        assert_eq!(config.limits.rate_limit_requests, 120);
    }

    #[test]
    fn test_cache_dir_lives_under_static_dir() {
        let config = AppConfig::default();
        assert!(config
            .images
            .cache_dir
            .starts_with(&config.server.static_dir));
    }
}
