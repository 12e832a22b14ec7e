use chrono::NaiveDateTime;
use serde::Serialize;

use super::fetcher::Fetcher;
use super::parser;
use crate::apps::App;
use crate::error::Error;

/// One user-uploaded screenshot, identified by its detail-page URL.
///
/// Listing pages produce partial records: title, image URLs and author.
/// The remaining attributes (date, file size, dimensions, engagement
/// counts) live on the detail page and are populated on demand by
/// [`Screenshot::fetch_details`], or immediately by [`Screenshot::fetch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Screenshot {
    pub title: Option<String>,
    pub details_url: Option<String>,
    pub full_size_url: Option<String>,
    pub medium_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// File size as displayed, e.g. `"0.547 MB"`.
    pub file_size: Option<String>,
    pub user_name: Option<String>,
    pub user_url: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub like_count: u64,
    pub comment_count: u64,
    /// The app this screenshot was listed under. Set by the listing flow
    /// only; screenshots built from a bare details URL have no app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

impl Screenshot {
    /// A stub holding only the details URL. Nothing is fetched.
    pub fn new(details_url: impl Into<String>) -> Self {
        Self {
            details_url: Some(details_url.into()),
            ..Default::default()
        }
    }

    /// Construct from a details URL and populate the detail attributes in
    /// the same call. The `app` back-reference stays unset on this path.
    pub async fn fetch(
        details_url: impl Into<String>,
        fetcher: &dyn Fetcher,
    ) -> Result<Self, Error> {
        let mut screenshot = Self::new(details_url);
        screenshot.fetch_details(fetcher).await?;
        Ok(screenshot)
    }

    /// Fetch this screenshot's detail page and fill in the attributes the
    /// listing did not carry. A record without a details URL is left as is.
    pub async fn fetch_details(&mut self, fetcher: &dyn Fetcher) -> Result<(), Error> {
        let Some(url) = self.details_url.clone() else {
            return Ok(());
        };
        let html = fetcher.fetch(&url).await?;
        self.apply_details(parser::parse_details(&html));
        Ok(())
    }

    /// Listing-provided fields win; the detail page only fills gaps.
    pub(crate) fn apply_details(&mut self, details: parser::ScreenshotDetails) {
        if self.medium_url.is_none() {
            self.medium_url = details.medium_url;
        }
        if self.full_size_url.is_none() {
            self.full_size_url = details.full_size_url;
        }
        if self.user_name.is_none() && self.user_url.is_none() {
            self.user_name = details.user_name;
            self.user_url = details.user_url;
        }

        self.date = details.date;
        self.file_size = details.file_size;
        self.width = details.width;
        self.height = details.height;
        self.like_count = details.like_count;
        self.comment_count = details.comment_count;
    }

    /// Byte count for the displayed file size, e.g. `"0.547 MB"` → 547000.
    /// Pure string conversion; nothing is fetched.
    pub fn file_size_in_bytes(&self) -> Result<u64, Error> {
        match &self.file_size {
            Some(text) => parser::parse_file_size(text),
            None => Err(Error::BadFileSize {
                text: String::new(),
            }),
        }
    }
}
