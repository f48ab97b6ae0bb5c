use std::fmt;

/// Host that site-relative result URLs are resolved against.
pub const DEFAULT_VIDEO_HOST: &str = "https://www.youtube.com";

/// One entry of a search response, in the order the backend returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Download quality tier. The first variant is the selector default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    P720,
    P480,
    P360,
}

impl Quality {
    /// Selector options in display order.
    pub const ALL: [Quality; 3] = [Quality::P720, Quality::P480, Quality::P360];

    pub fn label(self) -> &'static str {
        match self {
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Turn a stored result URL into a fully-qualified video address.
///
/// URLs that already carry an `http://` or `https://` scheme are returned
/// unchanged. Anything else is a path on `video_host` and never changes the
/// host or scheme.
pub fn normalize_video_url(stored: &str, video_host: &str) -> String {
    if has_web_scheme(stored) {
        return stored.to_string();
    }

    format!(
        "{}/{}",
        video_host.trim_end_matches('/'),
        stored.trim().trim_start_matches(['/', '\\'])
    )
}

fn has_web_scheme(candidate: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        candidate
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
