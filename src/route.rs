use std::fmt;

/// A logical location within the site.
///
/// Parsing is total: every fragment maps to some route, and anything outside
/// the three recognized paths lands in [`Route::NotFound`] with the
/// unmatched path preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Contact,
    NotFound { path: String },
}

impl Route {
    /// Derive the route from a raw fragment identifier, e.g. the value of
    /// `window.location.hash`.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        Self::parse(&fragment_to_path(fragment))
    }

    /// Map a normalized path to its page. Exact matches only, no prefixes.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/services" => Self::Services,
            "/contact" => Self::Contact,
            other => Self::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// The path for this route, always starting with `/`.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::Contact => "/contact",
            Self::NotFound { path } => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Normalize a raw fragment identifier into a leading-slash path.
///
/// A missing fragment yields `/`. One leading `#` marker is stripped, and a
/// remainder that does not start with `/` is treated as the root path.
pub fn fragment_to_path(fragment: Option<&str>) -> String {
    let raw = fragment.unwrap_or("");
    let path = raw.strip_prefix('#').unwrap_or(raw);
    if path.starts_with('/') {
        path.to_string()
    } else {
        "/".to_string()
    }
}
