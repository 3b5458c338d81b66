//! Banner configuration schema.
//!
//! This module provides:
//! - [`PlatformMap`], a per-platform string table (`appId`, `store`, `price`)
//! - [`BannerOverrides`], the caller-supplied partial configuration
//! - [`BannerConfig`], the immutable configuration the controller runs with
//! - Default values and the shallow merge

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Default number of days a dismissed banner stays hidden.
pub const DEFAULT_DAYS_HIDDEN: i64 = 15;

/// Default number of days before reminding a visitor who tapped install.
pub const DEFAULT_DAYS_REMINDER: i64 = 90;

/// Default label of the action button.
pub const DEFAULT_BUTTON: &str = "OPEN";

/// String table keyed by platform tag (`ios`, `android`, `windows`, ...).
///
/// Empty values are treated the same as missing ones. Numeric values (App
/// Store ids are often written as plain numbers) are stored as their
/// decimal text, and `null` as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlatformMap(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum MapValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl MapValue {
    fn into_text(self) -> String {
        match self {
            MapValue::Text(s) => s,
            MapValue::Unsigned(n) => n.to_string(),
            MapValue::Signed(n) => n.to_string(),
            MapValue::Float(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for PlatformMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = BTreeMap::<String, Option<MapValue>>::deserialize(deserializer)?;
        Ok(Self(
            entries
                .into_iter()
                .map(|(tag, value)| (tag, value.map(MapValue::into_text).unwrap_or_default()))
                .collect(),
        ))
    }
}

impl PlatformMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, tag: &str, value: &str) -> Self {
        self.insert(tag, value);
        self
    }

    /// Insert or replace the value for a platform tag.
    pub fn insert(&mut self, tag: &str, value: &str) {
        self.0.insert(tag.to_string(), value.to_string());
    }

    /// Get the non-empty value for a platform tag.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0
            .get(tag)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether a non-empty value exists for the tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Iterate over all entries, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PlatformMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries
            .into_iter()
            .fold(PlatformMap::new(), |map, (tag, value)| map.with(tag, value))
    }
}

/// Caller-supplied configuration overrides.
///
/// Every field is optional; anything left unset falls back to the defaults
/// in [`BannerConfig`]. Field names are camelCase so the same shape works
/// for a JavaScript options object and for TOML/JSON files:
///
/// ```toml
/// daysHidden = 15
/// daysReminder = 90
/// title = "My App"
/// author = "My Company"
///
/// [appId]
/// ios = "123456789"
/// android = "com.example.app"
/// ```
///
/// Maps replace the default map wholesale rather than merging per key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerOverrides {
    pub days_hidden: Option<i64>,
    pub days_reminder: Option<i64>,
    pub app_store_language: Option<String>,
    pub button: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub app_id: Option<PlatformMap>,
    pub store: Option<PlatformMap>,
    pub price: Option<PlatformMap>,
    pub theme: Option<String>,
    pub icon: Option<String>,
    pub force: Option<String>,
}

impl BannerOverrides {
    /// Create empty overrides (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse overrides from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load overrides from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(Error::Config(format!(
                "unsupported config extension {:?} for {} (expected .toml or .json)",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Immutable banner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    /// Days the dismissal cookie lives; zero or less writes no cookies at all
    pub days_hidden: i64,
    /// Days the install-intent cookie lives
    pub days_reminder: i64,
    /// Two-letter store locale used in the App Store link
    pub app_store_language: String,
    /// Action button label
    pub button: String,
    /// App title shown in the info block
    pub title: String,
    /// App author shown in the info block
    pub author: String,
    /// Store identifier per platform
    pub app_id: PlatformMap,
    /// Store display name per platform
    pub store: PlatformMap,
    /// Price display string per platform
    pub price: PlatformMap,
    /// Platform tag whose styling applies on every device
    pub theme: Option<String>,
    /// Explicit icon URL
    pub icon: Option<String>,
    /// Platform tag that bypasses user-agent detection
    pub force: Option<String>,
}

impl BannerConfig {
    /// Built-in defaults for the given store language.
    pub fn defaults(app_store_language: &str) -> Self {
        Self {
            days_hidden: DEFAULT_DAYS_HIDDEN,
            days_reminder: DEFAULT_DAYS_REMINDER,
            app_store_language: app_store_language.to_string(),
            button: DEFAULT_BUTTON.to_string(),
            title: String::new(),
            author: String::new(),
            app_id: PlatformMap::from([("ios", ""), ("android", "")]),
            store: PlatformMap::from([
                ("ios", "On the App Store"),
                ("android", "In Google Play"),
                ("windows", "In the Windows Store"),
            ]),
            price: PlatformMap::from([("ios", "FREE"), ("android", "FREE"), ("windows", "FREE")]),
            theme: None,
            icon: None,
            force: None,
        }
    }

    /// Merge caller overrides onto the defaults.
    ///
    /// Empty `theme`, `icon` and `force` strings count as unset.
    pub fn resolve(overrides: BannerOverrides, app_store_language: &str) -> Self {
        let defaults = Self::defaults(app_store_language);
        Self {
            days_hidden: overrides.days_hidden.unwrap_or(defaults.days_hidden),
            days_reminder: overrides.days_reminder.unwrap_or(defaults.days_reminder),
            app_store_language: overrides
                .app_store_language
                .unwrap_or(defaults.app_store_language),
            button: overrides.button.unwrap_or(defaults.button),
            title: overrides.title.unwrap_or(defaults.title),
            author: overrides.author.unwrap_or(defaults.author),
            app_id: overrides.app_id.unwrap_or(defaults.app_id),
            store: overrides.store.unwrap_or(defaults.store),
            price: overrides.price.unwrap_or(defaults.price),
            theme: non_empty(overrides.theme),
            icon: non_empty(overrides.icon),
            force: non_empty(overrides.force),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
