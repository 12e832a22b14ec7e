//! Screenshot retrieval: listing pages into partial records, detail pages
//! into the rest.

use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use crate::apps::App;
use crate::config::Config;
use crate::error::Error;

pub mod fetcher;
pub mod models;
pub mod parser;
pub mod query;

use fetcher::Fetcher;
use models::Screenshot;
use query::ListingQuery;

/// Fetch one listing page for `app` and parse it into partial screenshot
/// records, in page order. Detail attributes stay unpopulated.
pub async fn fetch_listing(
    fetcher: &dyn Fetcher,
    config: &Config,
    app: &App,
    query: &ListingQuery,
) -> Result<Vec<Screenshot>, Error> {
    let url = query.url(&config.base_url, app.id);
    info!(
        app_id = app.id,
        page = query.page,
        order = query.order.as_param(),
        "fetching screenshot listing"
    );

    let html = fetcher.fetch(&url).await?;
    let mut screenshots = parser::parse_listing(&html);
    for screenshot in &mut screenshots {
        screenshot.app = Some(app.clone());
    }

    info!(app_id = app.id, count = screenshots.len(), "parsed listing cards");
    Ok(screenshots)
}

/// Expand listing stubs with their detail pages, one by one, preserving
/// listing order. A failed detail fetch leaves that screenshot partial and
/// moves on; nothing is retried.
pub async fn populate_details(
    fetcher: &dyn Fetcher,
    config: &Config,
    screenshots: &mut [Screenshot],
) {
    for screenshot in screenshots.iter_mut() {
        if let Err(error) = screenshot.fetch_details(fetcher).await {
            warn!(
                details_url = screenshot.details_url.as_deref().unwrap_or(""),
                error = %error,
                "failed to expand screenshot details"
            );
        }

        // polite delay
        sleep(Duration::from_millis(config.delay_ms)).await;
    }
}
