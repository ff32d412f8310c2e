//! Resolved stream representation.

/// A cookie minted by the cookie-issuing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCookie {
    pub name: String,
    pub value: String,
}

/// Outcome of the token-for-cookie exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieGrant {
    /// The endpoint set a cookie under the descriptor's cookie name.
    Issued(PlaybackCookie),
    /// The descriptor did not offer a cookie exchange.
    NotOffered,
    /// The exchange was attempted and produced no cookie.
    Unavailable(String),
}

/// A playable URL plus whatever cookie the CDN expects with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStream {
    pub url: String,
    pub cookie: CookieGrant,
}

impl ResolvedStream {
    /// The issued cookie, if there is one.
    pub fn cookie(&self) -> Option<&PlaybackCookie> {
        match &self.cookie {
            CookieGrant::Issued(cookie) => Some(cookie),
            CookieGrant::NotOffered | CookieGrant::Unavailable(_) => None,
        }
    }
}
