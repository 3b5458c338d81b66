//! WASM module for running the banner in the browser.
//!
//! Binds [`crate::banner::BannerController`] to the live page: the
//! document becomes a [`BrowserHost`], `document.cookie` a
//! [`BrowserCookies`] jar, and JavaScript gets a `SmartBanner` class via
//! wasm-bindgen.
//!
//! Build with `wasm-pack build --target web -- --features wasm`.

mod bindings;
mod dom;

pub use bindings::SmartBanner;
pub use dom::{BrowserCookies, BrowserHost};

/// Initialize WASM panic hook for better error messages in browser console
///
/// Safe to call more than once.
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
