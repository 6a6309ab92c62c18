//! Configuration options for listing extraction.
//!
//! The `Options` struct carries every string the rules match against, so pages
//! served in another storefront language can be handled by swapping labels.

/// Default storefront origin used to resolve relative hrefs.
pub const DEFAULT_BASE_URL: &str = "https://play.google.com";

/// Path prefix of a listing detail page.
pub const DEFAULT_LISTING_PATH: &str = "/store/apps/details";

/// Path segment shared by publisher-profile pages (`dev?id=` and `developer?id=`).
pub const DEFAULT_DEVELOPER_PATH: &str = "/store/apps/dev";

/// Text labels and headings the rules anchor on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label preceding the publisher website.
    ///
    /// Default: `"Website"`
    pub website: String,

    /// Label preceding the publisher email.
    ///
    /// Default: `"Email"`
    pub email: String,

    /// Label preceding the publisher postal address.
    ///
    /// Default: `"Address"`
    pub address: String,

    /// Label preceding the privacy policy link.
    ///
    /// Default: `"Privacy policy"`
    pub privacy_policy: String,

    /// Label preceding the last-updated date.
    ///
    /// Default: `"Updated on"`
    pub updated_on: String,

    /// Ads disclosure marker.
    ///
    /// Default: `"Contains ads"`
    pub contains_ads: String,

    /// Heading above the similar-apps card grid.
    ///
    /// Default: `"Similar apps"`
    pub similar_apps: String,

    /// Heading above the changelog.
    ///
    /// Default: `"What's new"`
    pub whats_new: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            website: "Website".to_string(),
            email: "Email".to_string(),
            address: "Address".to_string(),
            privacy_policy: "Privacy policy".to_string(),
            updated_on: "Updated on".to_string(),
            contains_ads: "Contains ads".to_string(),
            similar_apps: "Similar apps".to_string(),
            whats_new: "What's new".to_string(),
        }
    }
}

/// Configuration options for listing extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for an English-language Play Store page.
///
/// # Example
///
/// ```rust
/// use rs_play_listing::{Labels, Options};
///
/// let options = Options {
///     labels: Labels {
///         similar_apps: "Ähnliche Apps".to_string(),
///         ..Labels::default()
///     },
///     keep_raw_source: false,
///     ..Options::default()
/// };
/// assert_eq!(options.labels.website, "Website");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Label and heading strings.
    pub labels: Labels,

    /// Storefront origin used to resolve relative hrefs before reading their
    /// query parameters.
    ///
    /// Default: `"https://play.google.com"`
    pub base_url: String,

    /// Href prefix identifying links to other listings.
    ///
    /// Default: `"/store/apps/details"`
    pub listing_path: String,

    /// Href fragment identifying the publisher-profile link.
    ///
    /// Default: `"/store/apps/dev"`
    pub developer_path: String,

    /// Keep the input markup on `Listing::raw_source`.
    ///
    /// Default: `true`
    pub keep_raw_source: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            developer_path: DEFAULT_DEVELOPER_PATH.to_string(),
            keep_raw_source: true,
        }
    }
}
