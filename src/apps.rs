use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::screenshots;
use crate::screenshots::fetcher::Fetcher;
use crate::screenshots::models::Screenshot;
use crate::screenshots::query::ListingQuery;

/// A Steam app, like a video game. Used to fetch the screenshots its
/// players have uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: u32,
    pub name: String,
}

impl App {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// One listing page of screenshots uploaded for this app, newest first
    /// by default. The records come back partial; expand them with
    /// [`screenshots::populate_details`] or per record with
    /// [`Screenshot::fetch_details`].
    pub async fn screenshots(
        &self,
        fetcher: &dyn Fetcher,
        config: &Config,
        query: &ListingQuery,
    ) -> Result<Vec<Screenshot>, Error> {
        screenshots::fetch_listing(fetcher, config, self, query).await
    }
}

/// Accepted forms for an app id lookup: the canonical integer, or its
/// decimal string form as it appears in URLs and user input.
pub trait IntoAppId {
    fn into_app_id(self) -> Option<u32>;
}

impl IntoAppId for u32 {
    fn into_app_id(self) -> Option<u32> {
        Some(self)
    }
}

impl IntoAppId for i64 {
    fn into_app_id(self) -> Option<u32> {
        u32::try_from(self).ok()
    }
}

impl IntoAppId for &str {
    fn into_app_id(self) -> Option<u32> {
        self.trim().parse().ok()
    }
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    id: u32,
    name: Option<String>,
}

/// In-memory snapshot of the bulk apps list
/// (`{"applist":{"apps":[{"appid","name"},...]}}`).
///
/// Loading validates the container structure up front; lookups afterwards
/// are plain scans in catalog order, so the first hit for a query is the
/// first matching entry in the file.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Read and validate an apps list snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::AppsListNotAFile {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|source| Error::AppsListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let json: Value =
            serde_json::from_str(&raw).map_err(|source| Error::AppsListNotJson {
                path: path.to_path_buf(),
                source,
            })?;

        let apps = json
            .get("applist")
            .and_then(|applist| applist.get("apps"))
            .and_then(Value::as_array)
            .ok_or_else(|| Error::AppsListBadFormat {
                path: path.to_path_buf(),
            })?;

        let entries: Vec<CatalogEntry> = apps.iter().filter_map(entry_from_value).collect();
        debug!(path = %path.display(), count = entries.len(), "loaded apps list");

        Ok(Self { entries })
    }

    /// Like [`Catalog::load`], with the path taken from `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let path = config
            .apps_list_path
            .as_deref()
            .ok_or(Error::AppsListPathNotConfigured)?;
        Self::load(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every app whose name contains `query`, case-insensitively, in
    /// catalog order. Entries without a name are skipped. An empty query
    /// matches nothing.
    pub fn search(&self, query: &str) -> Vec<App> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter_map(|entry| {
                let name = entry.name.as_deref()?;
                name.to_lowercase()
                    .contains(&query)
                    .then(|| App::new(entry.id, name))
            })
            .collect()
    }

    /// First app whose name matches `name` exactly, ignoring case; when
    /// nothing matches exactly, the first substring match in catalog order.
    pub fn find_by_name(&self, name: &str) -> Option<App> {
        let matches = self.search(name);
        let wanted = name.to_lowercase();
        matches
            .iter()
            .find(|app| app.name.to_lowercase() == wanted)
            .cloned()
            .or_else(|| matches.into_iter().next())
    }

    /// First app with the given id. Accepts the integer id or its numeric
    /// string form; anything that does not coerce to an id matches nothing.
    pub fn find_by_id(&self, id: impl IntoAppId) -> Option<App> {
        let id = id.into_app_id()?;
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| App::new(entry.id, entry.name.clone().unwrap_or_default()))
    }
}

/// Find apps by name in the snapshot configured on `config`.
///
/// An empty query returns no results without touching the snapshot file.
pub fn search(query: &str, config: &Config) -> Result<Vec<App>, Error> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let catalog = Catalog::from_config(config)?;
    Ok(catalog.search(query))
}

fn entry_from_value(value: &Value) -> Option<CatalogEntry> {
    let id = match value.get("appid") {
        Some(Value::Number(n)) => u32::try_from(n.as_u64()?).ok()?,
        Some(Value::String(s)) => s.trim().parse().ok()?,
        _ => return None,
    };
    let name = value.get("name").and_then(Value::as_str).map(str::to_string);
    Some(CatalogEntry { id, name })
}
