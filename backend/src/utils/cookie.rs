//! Minimal cookie helpers: reading one value out of a `Cookie` request header
//! and rendering a `Set-Cookie` response header.

use chrono::{DateTime, Duration, Utc};

/// Look up `name` in a `Cookie` header value (`a=1; b=2`).
///
/// Values are percent-decoded; a value that does not decode is returned as
/// `None`, the same as a missing cookie. Surrounding double quotes are
/// stripped. The first occurrence wins.
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .and_then(|(_, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            urlencoding::decode(value).ok().map(|v| v.into_owned())
        })
}

/// A cookie to be written to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: Duration,
    pub expires: DateTime<Utc>,
    pub secure: bool,
}

impl SetCookie {
    /// Persistent cookie expiring `max_age` after `now`.
    pub fn persistent(
        name: impl Into<String>,
        value: impl Into<String>,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            max_age,
            expires: now + max_age,
            secure: false,
        }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Render as a `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        let mut out = format!(
            "{}={}; Path={}; Max-Age={}; Expires={}; SameSite=Lax",
            self.name,
            urlencoding::encode(&self.value),
            self.path,
            self.max_age.num_seconds(),
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        );
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// RFC 6265 cookie-name check (an HTTP token).
pub fn is_valid_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"'
                        | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}'
                )
        })
}
