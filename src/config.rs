use serde::Deserialize;

/// Tunables for `SegmentRouter`.
///
/// Deserializable so apps can ship routing settings next to the rest of
/// their configuration. Missing fields fall back to [`RouterConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Treat the URL host as the first segment.
    ///
    /// On for custom schemes (`myapp://users/42` routes `users`, then `42`);
    /// turn off for web links where the host is just the site.
    pub include_host: bool,

    /// Accepted URL schemes, compared case-insensitively.
    /// Empty accepts every scheme.
    pub schemes: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            include_host: true,
            schemes: Vec::new(),
        }
    }
}

impl RouterConfig {
    pub fn with_include_host(mut self, include_host: bool) -> Self {
        self.include_host = include_host;
        self
    }

    /// Add a scheme to the allow-list.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.schemes.push(scheme.into());
        self
    }

    /// Check a URL scheme against the allow-list.
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.schemes.is_empty() || self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }
}
