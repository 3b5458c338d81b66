//! Environment facts and host capabilities.
//!
//! The controller never reads globals. Everything it needs from the page is
//! passed in:
//!
//! - [`Environment`]: user agent, language, standalone flag
//! - [`Clock`]: wall-clock time for cookie expiry
//! - [`BannerHost`]: the document (icon links, banner insertion, root classes)
//! - [`crate::cookie::CookieStore`]: persisted dismiss/install flags
//!
//! [`MemoryHost`] is an in-memory document used by tests and the CLI; the
//! browser implementation lives in `crate::wasm`.

mod memory;

pub use memory::MemoryHost;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;
use crate::banner::BannerView;

/// Store language used when the environment reports none.
pub const FALLBACK_STORE_LANGUAGE: &str = "us";

/// Facts about the visiting browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// `navigator.language` (e.g. "en-US")
    pub language: String,
    /// Whether the page runs as an installed standalone app
    pub standalone: bool,
}

impl Environment {
    /// Environment for a user agent with no language and not standalone.
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style language setter.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Builder-style standalone setter.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Two-character store locale: the tail of the language tag
    /// ("en-US" gives "US", "de" gives "de"), or "us" when unknown.
    pub fn store_language(&self) -> String {
        let chars: Vec<char> = self.language.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
        if tail.is_empty() {
            FALLBACK_STORE_LANGUAGE.to_string()
        } else {
            tail
        }
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Where a mounted banner ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mounted {
    /// Appended to the document body immediately
    Attached,
    /// Body missing; appended once the content-loaded signal fires
    Deferred,
}

/// Document operations the banner needs.
pub trait BannerHost {
    /// `href` of the first `<link rel="{rel}">` in the document.
    fn link_href(&self, rel: &str) -> Option<String>;

    /// Insert the banner, deferring until the body exists if necessary.
    fn mount(&mut self, view: &BannerView) -> Result<Mounted>;

    /// Add a class to the document root element.
    fn add_root_class(&mut self, class: &str) -> Result<()>;

    /// Remove a class from the document root element.
    fn remove_root_class(&mut self, class: &str) -> Result<()>;
}
