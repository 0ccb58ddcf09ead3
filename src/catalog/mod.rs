//! University catalog: loaded once at startup, immutable afterwards.

pub mod data;
pub mod query;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub slug: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub image: String,
    /// Derived at load time; present in serialized output for templates.
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub programs: Vec<String>,
}

pub struct Catalog {
    universities: Vec<University>,
}

impl Catalog {
    /// Load from `{data_dir}/universities.json` when it holds a JSON array,
    /// otherwise fall back to the built-in list. Malformed files are ignored
    /// rather than fatal.
    pub fn load(data_dir: &Path) -> Self {
        let universities = load_external(data_dir).unwrap_or_else(data::builtin);
        let mut catalog = Self { universities };
        catalog.derive_fields();
        catalog
    }

    pub fn from_universities(universities: Vec<University>) -> Self {
        let mut catalog = Self { universities };
        catalog.derive_fields();
        catalog
    }

    pub fn all(&self) -> &[University] {
        &self.universities
    }

    pub fn by_slug(&self, slug: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.slug == slug)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.by_slug(slug).is_some()
    }

    /// Drop unknown slugs and duplicates (first occurrence wins), then cap
    /// the list length. Shared by the account favorites API and /api/save.
    pub fn sanitize_favorites(&self, requested: &[String], max: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        requested
            .iter()
            .filter(|slug| self.contains_slug(slug))
            .filter(|slug| seen.insert(slug.to_string()))
            .take(max)
            .cloned()
            .collect()
    }

    /// Attach the photo-search URL and backfill missing images from the
    /// slug -> domain logo table.
    fn derive_fields(&mut self) {
        for u in &mut self.universities {
            if u.photo_url.is_none() {
                let q: String = url::form_urlencoded::byte_serialize(
                    format!("{} {}", u.name, u.city).trim().as_bytes(),
                )
                .collect();
                u.photo_url = Some(format!(
                    "https://source.unsplash.com/featured/1200x800?university,campus,{}",
                    q
                ));
            }
            if u.image.is_empty() {
                if let Some(domain) = data::logo_domain(&u.slug) {
                    u.image = format!("https://logo.clearbit.com/{}", domain);
                }
            }
        }
    }
}

fn load_external(data_dir: &Path) -> Option<Vec<University>> {
    let path = data_dir.join("universities.json");
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Vec<University>>(&raw) {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::warn!("ignoring malformed universities.json: {}", e);
            None
        }
    }
}
