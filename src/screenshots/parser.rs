use chrono::NaiveDateTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::models::Screenshot;
use crate::error::Error;

const CARD: &str = ".apphub_Card";
const CARD_IMAGE: &str = ".apphub_CardContentPreviewImage";
const CARD_TITLE: &str = ".apphub_CardMetaData .apphub_CardContentTitle";
const CARD_AUTHOR_LINKS: &str = ".apphub_CardContentAuthorBlock .apphub_CardContentAuthorName a";
const DETAILS_URL_ATTR: &str = "data-modal-content-url";

const DETAIL_IMAGE: &str = "#ActualMedia";
const DETAIL_AUTHOR_LINKS: &str = ".creatorsBlock .friendBlockContent a";
const DETAIL_STATS: &str = ".detailsStatsContainerRight .detailsStatRight";
const DETAIL_LIKES: &str = ".rateUpCount";
const DETAIL_COMMENTS: &str = ".commentthread_count_label";

const RESIZED_MARKER: &str = ".resizedimage";

/// Parse one listing page into partial screenshot records, one per card,
/// preserving document order. Cards with missing sub-elements yield records
/// with those fields absent; they are never an error.
pub fn parse_listing(html: &str) -> Vec<Screenshot> {
    let document = Html::parse_document(html);
    let cards = Selector::parse(CARD).unwrap();
    document.select(&cards).map(screenshot_from_card).collect()
}

fn screenshot_from_card(card: ElementRef) -> Screenshot {
    let medium_url = preview_image_url(card);
    let full_size_url = medium_url.as_deref().and_then(full_size_url_from);
    let (user_name, user_url) = author_from(card, CARD_AUTHOR_LINKS);

    Screenshot {
        details_url: card.value().attr(DETAILS_URL_ATTR).map(str::to_string),
        title: title_from(card),
        medium_url,
        full_size_url,
        user_name,
        user_url,
        ..Default::default()
    }
}

fn preview_image_url(card: ElementRef) -> Option<String> {
    let image = Selector::parse(CARD_IMAGE).unwrap();
    let src = card.select(&image).next()?.value().attr("src")?;
    normalized(src)
}

/// Scheme, host and path only; resize and quality query parameters are
/// dropped.
fn normalized(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let host = url.host_str()?;
    Some(format!("{}://{}{}", url.scheme(), host, url.path()))
}

/// Base asset URL for a resized image.
///
/// Resized images carry a final path segment of literally
/// `"<width>x<height>.resizedimage"`; everything from that segment's first
/// occurrence on is dropped. A URL without the marker has no known
/// full-size form.
pub fn full_size_url_from(medium_url: &str) -> Option<String> {
    let segment = medium_url.rsplit('/').next()?;
    if segment.is_empty() || !segment.ends_with(RESIZED_MARKER) {
        return None;
    }
    medium_url
        .find(segment)
        .map(|at| medium_url[..at].to_string())
}

fn title_from(card: ElementRef) -> Option<String> {
    let title = Selector::parse(CARD_TITLE).unwrap();
    let element = card.select(&title).next()?;
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The last author link wins; cards sometimes repeat the author block.
/// Name and URL are absent together unless both are present.
fn author_from(root: ElementRef, selector: &str) -> (Option<String>, Option<String>) {
    let links = Selector::parse(selector).unwrap();
    let Some(link) = root.select(&links).last() else {
        return (None, None);
    };
    let Some(href) = link.value().attr("href") else {
        return (None, None);
    };
    let name = link.text().collect::<String>().trim().to_string();
    (Some(name), Some(href.to_string()))
}

/// Attributes only the detail page carries, plus the author fields for
/// screenshots constructed from a bare details URL.
#[derive(Debug, Default)]
pub struct ScreenshotDetails {
    pub medium_url: Option<String>,
    pub full_size_url: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub file_size: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub like_count: u64,
    pub comment_count: u64,
    pub user_name: Option<String>,
    pub user_url: Option<String>,
}

/// Parse a screenshot detail page.
///
/// The stats column lists, in order: file size, upload date, pixel
/// dimensions. Missing or unparseable stats degrade to absent values, and
/// missing or non-numeric counters read as zero.
pub fn parse_details(html: &str) -> ScreenshotDetails {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let medium_url = detail_image_url(root);
    let full_size_url = medium_url.as_deref().and_then(full_size_url_from);
    let (user_name, user_url) = author_from(root, DETAIL_AUTHOR_LINKS);

    let stats_selector = Selector::parse(DETAIL_STATS).unwrap();
    let stats: Vec<String> = root
        .select(&stats_selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    let (width, height) = match stats.get(2) {
        Some(text) => dimensions_from(text),
        None => (None, None),
    };

    ScreenshotDetails {
        medium_url,
        full_size_url,
        file_size: stats.first().cloned(),
        date: stats.get(1).and_then(|text| date_from(text)),
        width,
        height,
        like_count: count_from(root, DETAIL_LIKES),
        comment_count: count_from(root, DETAIL_COMMENTS),
        user_name,
        user_url,
    }
}

fn detail_image_url(root: ElementRef) -> Option<String> {
    let image = Selector::parse(DETAIL_IMAGE).unwrap();
    let src = root.select(&image).next()?.value().attr("src")?;
    normalized(src)
}

const DATE_FORMATS: &[&str] = &[
    // Oct 29, 2016 @ 9:45am
    "%b %e, %Y @ %l:%M%P",
    // 29 Oct, 2016 @ 9:45am
    "%e %b, %Y @ %l:%M%P",
    "%Y-%m-%d %H:%M",
];

fn date_from(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok());
    if parsed.is_none() {
        debug!(text, "unparseable screenshot date");
    }
    parsed
}

fn dimensions_from(text: &str) -> (Option<u32>, Option<u32>) {
    let re = Regex::new(r"(?i)(\d+)\s*x\s*(\d+)").unwrap();
    let Some(caps) = re.captures(text) else {
        return (None, None);
    };
    (caps[1].parse().ok(), caps[2].parse().ok())
}

fn count_from(root: ElementRef, selector: &str) -> u64 {
    let sel = Selector::parse(selector).unwrap();
    let Some(el) = root.select(&sel).next() else {
        return 0;
    };
    let text = el.text().collect::<String>();
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Convert a displayed file size such as `"0.547 MB"` to a byte count.
///
/// Units are decimal (1000-based) and case-insensitive; fractional byte
/// results round half-up.
pub fn parse_file_size(text: &str) -> Result<u64, Error> {
    let re = Regex::new(r"(?i)^(\d+(?:\.\d+)?) ?(B|KB|MB|GB)$").unwrap();
    let caps = re
        .captures(text.trim())
        .ok_or_else(|| Error::BadFileSize {
            text: text.to_string(),
        })?;

    let number: f64 = caps[1].parse().map_err(|_| Error::BadFileSize {
        text: text.to_string(),
    })?;
    let power = match caps[2].to_ascii_uppercase().as_str() {
        "B" => 0,
        "KB" => 1,
        "MB" => 2,
        "GB" => 3,
        _ => unreachable!(),
    };

    Ok((number * 1000f64.powi(power)).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_size_in_bytes() {
        assert_eq!(parse_file_size("123 B").unwrap(), 123);
        assert_eq!(parse_file_size("0.456 KB").unwrap(), 456);
        assert_eq!(parse_file_size("0.456 kb").unwrap(), 456);
        assert_eq!(parse_file_size("0.789 MB").unwrap(), 789_000);
        assert_eq!(parse_file_size("123 MB").unwrap(), 123_000_000);
        assert_eq!(parse_file_size("0.123 GB").unwrap(), 123_000_000);
    }

    #[test]
    fn file_size_without_space_before_unit() {
        assert_eq!(parse_file_size("0.547MB").unwrap(), 547_000);
    }

    #[test]
    fn file_size_rejects_unknown_formats() {
        for text in ["", "MB", "12 XB", "lots", "12 MB extra"] {
            assert!(
                matches!(parse_file_size(text), Err(Error::BadFileSize { .. })),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn full_size_url_strips_resize_segment() {
        let medium = "https://steamuserimages-a.akamaihd.net/ugc/230074563809665585/590A645C1B9155C2742484ED2B66F60CE2A62DD8/640x359.resizedimage";
        assert_eq!(
            full_size_url_from(medium).as_deref(),
            Some("https://steamuserimages-a.akamaihd.net/ugc/230074563809665585/590A645C1B9155C2742484ED2B66F60CE2A62DD8/")
        );
    }

    #[test]
    fn full_size_url_absent_without_marker() {
        assert_eq!(full_size_url_from("https://host/ugc/123/ABC/"), None);
        assert_eq!(full_size_url_from("https://host/ugc/123/ABC"), None);
    }

    #[test]
    fn dimensions_split_on_x() {
        assert_eq!(dimensions_from("3840 x 2160"), (Some(3840), Some(2160)));
        assert_eq!(dimensions_from("1920x1080"), (Some(1920), Some(1080)));
        assert_eq!(dimensions_from("no dimensions here"), (None, None));
    }

    #[test]
    fn dates_parse_in_platform_display_formats() {
        let expected = chrono::NaiveDate::from_ymd_opt(2016, 10, 29)
            .unwrap()
            .and_hms_opt(9, 45, 0)
            .unwrap();
        assert_eq!(date_from("Oct 29, 2016 @ 9:45am"), Some(expected));
        assert_eq!(date_from("29 Oct, 2016 @ 9:45am"), Some(expected));
        assert_eq!(date_from("last tuesday"), None);
    }
}
