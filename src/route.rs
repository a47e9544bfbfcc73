use std::borrow::Cow;

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Sky(String),
    NotFound(String),
}

impl Route {
    /// `/` is the landing view, `/r/<slug>` a recipient's sky. A slug segment
    /// that is not valid percent-encoded UTF-8 is used as written.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == "/" {
            return Self::Landing;
        }

        let mut segments = path.trim_start_matches('/').trim_end_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("r"), Some(slug), None) if !slug.is_empty() => {
                let decoded = percent_decode_str(slug)
                    .decode_utf8()
                    .map_or_else(|_| slug.to_string(), Cow::into_owned);
                Self::Sky(decoded)
            }
            _ => Self::NotFound(trimmed.to_string()),
        }
    }
}

pub fn sky_path(slug: &str) -> String {
    format!("/r/{}", utf8_percent_encode(slug, NON_ALPHANUMERIC))
}
