use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while resolving apps or scraping
/// screenshots.
///
/// Apps-list problems are fatal to the whole lookup and carry the offending
/// path. Fetch problems belong to the HTTP collaborator and are surfaced
/// unchanged. Parse problems cover displayed values that could not be
/// converted to their typed form.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no path configured for JSON apps list")]
    AppsListPathNotConfigured,

    #[error("{} is not a file", path.display())]
    AppsListNotAFile { path: PathBuf },

    #[error("could not read {}", path.display())]
    AppsListUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a valid JSON file", path.display())]
    AppsListNotJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} does not have expected JSON format", path.display())]
    AppsListBadFormat { path: PathBuf },

    #[error("unrecognized file size {text:?}")]
    BadFileSize { text: String },

    #[error("request for {url} failed")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("request for {url} returned status {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}
