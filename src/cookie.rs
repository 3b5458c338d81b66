//! Cookie-backed banner state.
//!
//! Two cookies per app id remember the visitor's choice:
//! - `<appId>-smartbanner-closed` after the banner was dismissed
//! - `<appId>-smartbanner-installed` after the install button was tapped
//!
//! Both hold the value `"true"`, are scoped to path `/`, and expire at an
//! absolute wall-clock time. Storage goes through the [`CookieStore`] trait
//! so the browser jar (`document.cookie`) and [`MemoryCookieJar`] are
//! interchangeable.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::Result;

/// Suffix of the dismissal cookie name.
pub const CLOSED_SUFFIX: &str = "-smartbanner-closed";

/// Suffix of the install-intent cookie name.
pub const INSTALLED_SUFFIX: &str = "-smartbanner-installed";

/// Name of the dismissal cookie for an app id.
pub fn closed_cookie_name(app_id: &str) -> String {
    format!("{}{}", app_id, CLOSED_SUFFIX)
}

/// Name of the install-intent cookie for an app id.
pub fn installed_cookie_name(app_id: &str) -> String {
    format!("{}{}", app_id, INSTALLED_SUFFIX)
}

/// A cookie to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub expires: Option<DateTime<Utc>>,
}

impl Cookie {
    /// A `"true"` flag cookie on path `/` that expires `days` after `now`.
    ///
    /// Day counts past chrono's range clamp to the latest (or earliest)
    /// representable instant.
    pub fn flag(name: String, now: DateTime<Utc>, days: i64) -> Self {
        let expires = TimeDelta::try_days(days)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        Self {
            name,
            value: "true".to_string(),
            path: "/".to_string(),
            expires: Some(expires),
        }
    }

    /// Serialize in `document.cookie` assignment form.
    ///
    /// e.g. `app-smartbanner-closed=true; path=/; expires=Mon, 02 Nov 2026 10:00:00 GMT`
    pub fn to_cookie_string(&self) -> String {
        let mut s = format!("{}={}", encode(&self.name), encode(&self.value));
        if !self.path.is_empty() {
            s.push_str("; path=");
            s.push_str(&self.path);
        }
        if let Some(expires) = self.expires {
            s.push_str("; expires=");
            s.push_str(&expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string());
        }
        s
    }
}

/// Parse a `document.cookie` style header (`a=1; b=2`) into name/value pairs.
///
/// Malformed segments without `=` are skipped.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|segment| {
            let (name, value) = segment.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((decode(name), decode(value.trim())))
        })
        .collect()
}

fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Decode `%XX` escapes, leaving invalid sequences untouched.
fn decode(s: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned()
}

/// Persistent key/value storage for banner cookies.
pub trait CookieStore {
    /// Current value of a cookie, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// Write a cookie.
    fn set(&mut self, cookie: Cookie) -> Result<()>;
}

/// In-memory cookie jar, used by tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: BTreeMap<String, Cookie>,
    written: Vec<Cookie>,
}

impl MemoryCookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a jar from a `document.cookie` style header.
    pub fn from_header(header: &str) -> Self {
        let mut jar = Self::new();
        for (name, value) in parse_cookie_header(header) {
            jar.insert(&name, &value);
        }
        jar
    }

    /// Seed a cookie without recording it as written.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.cookies.insert(
            name.to_string(),
            Cookie {
                name: name.to_string(),
                value: value.to_string(),
                path: "/".to_string(),
                expires: None,
            },
        );
    }

    /// Full cookie record by name.
    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    /// Cookies written through [`CookieStore::set`], in order.
    pub fn written(&self) -> &[Cookie] {
        &self.written
    }
}

impl CookieStore for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|c| c.value.clone())
    }

    fn set(&mut self, cookie: Cookie) -> Result<()> {
        self.written.push(cookie.clone());
        self.cookies.insert(cookie.name.clone(), cookie);
        Ok(())
    }
}
