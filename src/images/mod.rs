//! Best-effort image cache. Runs once at startup on a background task and
//! fills static/images/{slug}.{ext}; every failure on this path is
//! swallowed because rendering falls back to remote URLs anyway.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::catalog::University;
use crate::config::ImageConfig;
use crate::AppState;

const EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Download a card image for every university that does not already have
/// a usable cached file. Never blocks request handling or fails startup.
pub async fn populate(state: Arc<AppState>) {
    let cfg = state.config.images.clone();
    if let Err(e) = std::fs::create_dir_all(&cfg.cache_dir) {
        tracing::debug!("image cache dir unavailable: {}", e);
        return;
    }

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.download_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!("image cache client unavailable: {}", e);
            return;
        }
    };

    let semaphore = Arc::new(Semaphore::new(cfg.download_concurrency.max(1)));
    let tasks = state.catalog.all().iter().map(|u| {
        let client = client.clone();
        let cfg = cfg.clone();
        let semaphore = semaphore.clone();
        let u = u.clone();
        async move {
            // A closed semaphore never happens here; skip quietly if it does
            let Ok(_permit) = semaphore.acquire().await else {
                return;
            };
            fetch_one(&client, &cfg, &u).await;
        }
    });
    futures::future::join_all(tasks).await;
    tracing::info!("image cache pass finished");
}

async fn fetch_one(client: &reqwest::Client, cfg: &ImageConfig, u: &University) {
    if cached_file(&cfg.cache_dir, &u.slug, cfg.min_file_bytes).is_some() {
        return;
    }

    for url in candidate_urls(u) {
        match download(client, &url).await {
            Ok((bytes, ext)) => {
                if (bytes.len() as u64) < cfg.min_file_bytes {
                    tracing::debug!("discarding undersized image from {}", url);
                    continue;
                }
                let target = cfg.cache_dir.join(format!("{}.{}", u.slug, ext));
                if let Err(e) = std::fs::write(&target, &bytes) {
                    tracing::debug!("failed writing {}: {}", target.display(), e);
                    continue;
                }
                return;
            }
            Err(e) => {
                tracing::debug!("image fetch failed for {}: {}", url, e);
            }
        }
    }
}

fn candidate_urls(u: &University) -> Vec<String> {
    let mut urls = Vec::new();
    if !u.image.is_empty() {
        urls.push(u.image.clone());
    }
    urls.push(format!("https://picsum.photos/seed/{}/1200/800", u.slug));
    urls
}

async fn download(
    client: &reqwest::Client,
    url: &str,
) -> Result<(Vec<u8>, &'static str), reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let ext = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(extension_for)
        .unwrap_or("jpg");
    let bytes = response.bytes().await?;
    Ok((bytes.to_vec(), ext))
}

/// Explicit content-type -> extension mapping with a defined fallback.
fn extension_for(content_type: &str) -> &'static str {
    match content_type.split(';').next().unwrap_or("").trim() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "jpg",
    }
}

/// Path under /static for a cached image of acceptable size, if present.
/// Undersized files are failed downloads and are ignored.
pub fn cached_file(cache_dir: &Path, slug: &str, min_bytes: u64) -> Option<String> {
    for ext in EXTENSIONS {
        let path = cache_dir.join(format!("{}.{}", slug, ext));
        if let Ok(meta) = std::fs::metadata(&path) {
            if meta.len() >= min_bytes {
                return Some(format!("/static/images/{}.{}", slug, ext));
            }
        }
    }
    None
}

/// Render-time image resolution: remote photo URL first, then the local
/// cache, then the configured image, then a deterministic placeholder.
pub fn display_image(u: &University, cfg: &ImageConfig) -> String {
    if let Some(photo) = u.photo_url.as_deref().filter(|p| !p.is_empty()) {
        return photo.to_string();
    }
    if let Some(local) = cached_file(&cfg.cache_dir, &u.slug, cfg.min_file_bytes) {
        return local;
    }
    if !u.image.is_empty() {
        return u.image.clone();
    }
    format!("https://picsum.photos/seed/{}/1200/800", u.slug)
}
