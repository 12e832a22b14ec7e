//! Fetch and normalize metadata about user-uploaded Steam screenshots.
//!
//! The pipeline mirrors the site's structure: resolve an [`App`] against
//! the bulk apps catalog, fetch one listing page of screenshot cards, then
//! expand each card from its detail page.
//!
//! ```rust,no_run
//! use steamshots::{Catalog, Config, HttpFetcher, ListingQuery};
//!
//! # async fn example() -> Result<(), steamshots::Error> {
//! let config = Config::from_env();
//! let catalog = Catalog::from_config(&config)?;
//! let app = catalog.find_by_name("fallout 4").expect("unknown app");
//!
//! let fetcher = HttpFetcher::with_config(&config);
//! let mut shots = app.screenshots(&fetcher, &config, &ListingQuery::default()).await?;
//! steamshots::screenshots::populate_details(&fetcher, &config, &mut shots).await;
//! # Ok(())
//! # }
//! ```

pub mod apps;
pub mod config;
pub mod error;
pub mod screenshots;

pub use apps::{App, Catalog, IntoAppId};
pub use config::Config;
pub use error::Error;
pub use screenshots::fetcher::{Fetcher, HttpFetcher};
pub use screenshots::models::Screenshot;
pub use screenshots::query::{ListingQuery, Order};
