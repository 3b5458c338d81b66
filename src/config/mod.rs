//! Configuration for the smart app banner.
//!
//! A banner is configured by a partial [`BannerOverrides`] record (a JS
//! options object in the browser, a `.toml`/`.json` file for the CLI) that
//! is merged onto built-in defaults to produce an immutable
//! [`BannerConfig`].
//!
//! ## Defaults
//!
//! - `daysHidden` 15, `daysReminder` 90
//! - `appStoreLanguage` derived from the visitor's language
//! - `button` "OPEN"
//! - `store` / `price` entries for ios, android and windows
//!
//! Lifecycle callbacks are not part of the schema; see
//! [`crate::banner::Callbacks`].

mod schema;

pub use schema::*;
