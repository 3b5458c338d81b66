//! Platform detection and per-platform behaviour.
//!
//! Detection turns a user agent (or a forced tag) into a [`PlatformTag`].
//! Supported platforms each have a [`PlatformProfile`]: the ordered list of
//! `<link rel>` values probed for an icon and the store link builder.

mod agent;

pub use agent::{OsInfo, ParsedAgent};

use serde::{Serialize, Serializer};

use crate::config::BannerConfig;

/// Platform tag identifying which store and branding rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    Ios,
    Android,
    Unsupported,
    /// A caller-forced tag with no built-in detection (e.g. "windows")
    Custom(String),
}

impl PlatformTag {
    /// Parse a tag name. Unknown names become [`PlatformTag::Custom`].
    pub fn parse(s: &str) -> Self {
        match s {
            "ios" => PlatformTag::Ios,
            "android" => PlatformTag::Android,
            "unsupported" | "" => PlatformTag::Unsupported,
            other => PlatformTag::Custom(other.to_string()),
        }
    }

    /// Convert to string representation (also the config map key).
    pub fn as_str(&self) -> &str {
        match self {
            PlatformTag::Ios => "ios",
            PlatformTag::Android => "android",
            PlatformTag::Unsupported => "unsupported",
            PlatformTag::Custom(tag) => tag,
        }
    }

    /// Detect the platform for a user agent.
    ///
    /// A `force` tag always wins. Otherwise an agent containing "iPhone" is
    /// iOS and an agent whose OS parses as "Android" is Android; anything
    /// else is unsupported.
    pub fn detect(agent: &ParsedAgent, force: Option<&str>) -> Self {
        if let Some(forced) = force.filter(|f| !f.is_empty()) {
            return PlatformTag::parse(forced);
        }
        if agent.ua.contains("iPhone") {
            PlatformTag::Ios
        } else if agent.os_name() == Some("Android") {
            PlatformTag::Android
        } else {
            PlatformTag::Unsupported
        }
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PlatformTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Builds the store URL from the configuration and the resolved app id.
pub type StoreLinkFn = fn(&BannerConfig, &str) -> String;

/// Capabilities of a supported platform.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    /// `<link rel>` values probed for the icon, most preferred first
    pub icon_rels: &'static [&'static str],
    store_link: StoreLinkFn,
}

/// iOS: App Store link in the configured store language.
pub const IOS: PlatformProfile = PlatformProfile {
    icon_rels: &["apple-touch-icon-precomposed", "apple-touch-icon"],
    store_link: |config, app_id| {
        format!(
            "https://itunes.apple.com/{}/app/id{}?mt=8",
            config.app_store_language, app_id
        )
    },
};

/// Android: Google Play details page.
pub const ANDROID: PlatformProfile = PlatformProfile {
    icon_rels: &[
        "android-touch-icon",
        "apple-touch-icon-precomposed",
        "apple-touch-icon",
    ],
    store_link: |_, app_id| format!("http://play.google.com/store/apps/details?id={}", app_id),
};

impl PlatformProfile {
    /// Profile for a tag; `None` for unsupported and custom tags.
    pub fn for_tag(tag: &PlatformTag) -> Option<PlatformProfile> {
        match tag {
            PlatformTag::Ios => Some(IOS),
            PlatformTag::Android => Some(ANDROID),
            PlatformTag::Unsupported | PlatformTag::Custom(_) => None,
        }
    }

    /// Store link for an app id.
    pub fn store_link(&self, config: &BannerConfig, app_id: &str) -> String {
        (self.store_link)(config, app_id)
    }
}
