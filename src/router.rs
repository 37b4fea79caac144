use std::marker::PhantomData;

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::config::RouterConfig;
use crate::error::NavigateError;

// ── QueryParams ──

/// Decoded URL query pairs: `tab=posts&sort=new`.
///
/// Order is preserved. On duplicate keys `get` returns the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        Self(url::form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    /// Collect the query pairs of a URL.
    pub fn from_url(url: &Url) -> Self {
        Self(url.query_pairs().into_owned().collect())
    }

    /// Empty params.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── UrlRouter trait ──

/// Maps a URL to the full navigation path it stands for.
///
/// The returned destinations replace the whole stack, root first.
/// Routers only compute the path; `NavigationState` applies it.
pub trait UrlRouter<D> {
    fn route(&self, url: &Url) -> Result<Vec<D>, NavigateError>;
}

/// Convenience: closures returning `Option<Vec<D>>` are routers.
/// `None` means the URL is not routable.
impl<D, F> UrlRouter<D> for F
where
    F: Fn(&Url) -> Option<Vec<D>>,
{
    fn route(&self, url: &Url) -> Result<Vec<D>, NavigateError> {
        (self)(url).ok_or_else(|| NavigateError::unroutable(url.as_str()))
    }
}

// ── SegmentRouter ──

/// A destination type that can be built from one URL segment.
pub trait RoutableDestination: Sized {
    /// Resolve `segment` into a destination, or `None` to skip it.
    ///
    /// `full_path` holds every segment of the URL (including `segment`)
    /// so a destination can look at its neighbours, e.g. an id that only
    /// means something after `users`.
    fn from_segment(segment: &str, full_path: &[String], params: &QueryParams) -> Option<Self>;
}

/// Default router: one destination per URL segment.
///
/// Segments are the host (when [`RouterConfig::include_host`] is set)
/// followed by the non-empty path components, percent-decoded. Each is
/// handed to [`RoutableDestination::from_segment`]; segments that do not
/// resolve are skipped.
///
/// ```ignore
/// let router = SegmentRouter::<Screen>::new();
/// // myapp://users/42?tab=posts -> [Screen::Users, Screen::User(42)]
/// let path = router.route(&Url::parse("myapp://users/42?tab=posts")?)?;
/// ```
pub struct SegmentRouter<D> {
    config: RouterConfig,
    _destination: PhantomData<fn() -> D>,
}

impl<D> SegmentRouter<D> {
    /// Create a router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            _destination: PhantomData,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Split a URL into decoded, non-empty segments.
    pub fn segments(&self, url: &Url) -> Vec<String> {
        let mut segments = Vec::new();
        if self.config.include_host {
            if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
                segments.push(decode(host));
            }
        }
        if let Some(parts) = url.path_segments() {
            segments.extend(parts.filter(|p| !p.is_empty()).map(decode));
        }
        segments
    }
}

impl<D> Default for SegmentRouter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: RoutableDestination> UrlRouter<D> for SegmentRouter<D> {
    fn route(&self, url: &Url) -> Result<Vec<D>, NavigateError> {
        if !self.config.allows_scheme(url.scheme()) {
            return Err(NavigateError::unroutable(format!(
                "scheme `{}` is not accepted",
                url.scheme()
            )));
        }

        let segments = self.segments(url);
        if segments.is_empty() {
            return Err(NavigateError::unroutable(format!("`{}` has no segments", url)));
        }

        let params = QueryParams::from_url(url);
        let destinations: Vec<D> = segments
            .iter()
            .filter_map(|segment| D::from_segment(segment, &segments, &params))
            .collect();

        debug!(
            "SegmentRouter: {} -> {} of {} segments resolved",
            url,
            destinations.len(),
            segments.len()
        );

        if destinations.is_empty() {
            return Err(NavigateError::unroutable(format!(
                "no segment of `{}` resolves to a destination",
                url
            )));
        }
        Ok(destinations)
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
