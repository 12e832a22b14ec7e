use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://steamcommunity.com";
pub const DEFAULT_USER_AGENT: &str = "steamshots/0.1";
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Runtime settings shared by the catalog loader and the HTTP collaborator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the JSON apps list snapshot. Name and id lookups fail
    /// until one is set.
    pub apps_list_path: Option<PathBuf>,
    pub base_url: String,
    pub user_agent: String,
    /// Pause between consecutive detail-page requests.
    pub delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            apps_list_path: env::var_os("STEAMSHOTS_APPS_LIST_PATH").map(PathBuf::from),
            base_url: env::var("STEAMSHOTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_agent: env::var("STEAMSHOTS_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            delay_ms: env::var("STEAMSHOTS_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELAY_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apps_list_path: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}
