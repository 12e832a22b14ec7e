use url::form_urlencoded;

/// Sort orders accepted by the screenshot listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    MostRecent,
    TopRated,
    TrendDay,
    TrendWeek,
    TrendThreeMonths,
    TrendSixMonths,
    TrendYear,
}

impl Order {
    pub fn as_param(&self) -> &'static str {
        match self {
            Order::MostRecent => "mostrecent",
            Order::TopRated => "toprated",
            Order::TrendDay => "trendday",
            Order::TrendWeek => "trendweek",
            Order::TrendThreeMonths => "trendthreemonths",
            Order::TrendSixMonths => "trendsixmonths",
            Order::TrendYear => "trendyear",
        }
    }
}

/// Parameters for one listing-page request. Pure construction; no network
/// access and no validation beyond defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub order: Order,
    /// 1-based page number.
    pub page: u32,
    /// Optional free-text filter, sent as `searchText`.
    pub text: Option<String>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            order: Order::default(),
            page: 1,
            text: None,
        }
    }
}

impl ListingQuery {
    pub fn with_order(order: Order) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Listing-page URL for `app_id` under this query.
    pub fn url(&self, base_url: &str, app_id: u32) -> String {
        let mut url = format!(
            "{}/app/{}/screenshots/?p={}&browsefilter={}",
            base_url,
            app_id,
            self.page,
            self.order.as_param()
        );
        if let Some(text) = &self.text {
            let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
            url.push_str("&searchText=");
            url.push_str(&encoded);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "http://steamcommunity.com";

    #[test]
    fn default_query_is_most_recent_page_one() {
        assert_eq!(
            ListingQuery::default().url(BASE, 377160),
            "http://steamcommunity.com/app/377160/screenshots/?p=1&browsefilter=mostrecent"
        );
    }

    #[test]
    fn order_and_page_are_reflected() {
        let query = ListingQuery::with_order(Order::TrendThreeMonths).page(2);
        assert_eq!(
            query.url(BASE, 377160),
            "http://steamcommunity.com/app/377160/screenshots/?p=2&browsefilter=trendthreemonths"
        );
    }

    #[test]
    fn search_text_is_form_encoded() {
        let query = ListingQuery::with_order(Order::TrendYear).text("dogmeat armor");
        assert_eq!(
            query.url(BASE, 377160),
            "http://steamcommunity.com/app/377160/screenshots/?p=1&browsefilter=trendyear&searchText=dogmeat+armor"
        );
    }
}
