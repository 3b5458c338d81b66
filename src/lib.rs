//! Smartbanner - A smart app banner for mobile web visitors.
//!
//! This library decides whether a visiting iOS or Android device should be
//! offered the companion native app, renders the banner markup, and
//! remembers the visitor's dismiss/install choice in cookies.
//!
//! All environment access goes through explicit inputs ([`host::Environment`],
//! [`cookie::CookieStore`], [`host::BannerHost`], [`host::Clock`]) so the
//! decision logic runs the same in the browser (see the `wasm` feature) and
//! in native tests or the `smartbanner` CLI.

pub mod banner;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod commands;
pub mod config;
pub mod cookie;
pub mod host;
pub mod platform;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

pub use banner::{
    BannerController, BannerState, Callbacks, Eligibility, Services, SharedController, UserAction,
};
pub use config::{BannerConfig, BannerOverrides, PlatformMap};
pub use cookie::{Cookie, CookieStore, MemoryCookieJar};
pub use host::{BannerHost, Clock, Environment, FixedClock, MemoryHost, Mounted, SystemClock};
pub use platform::{ParsedAgent, PlatformProfile, PlatformTag};

/// Library-level error type for Smartbanner operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias for Smartbanner operations.
pub type Result<T> = std::result::Result<T, Error>;
