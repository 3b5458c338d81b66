//! Banner markup.
//!
//! Builds the [`BannerView`] model and renders it to HTML:
//!
//! ```text
//! div.smartbanner.smartbanner-<theme>
//! └── div.smartbanner-container
//!     ├── a.smartbanner-close
//!     ├── span.smartbanner-icon        (background-image when an icon resolved)
//!     ├── div.smartbanner-info
//!     │   ├── div.smartbanner-title
//!     │   ├── div                      (author)
//!     │   └── span                     ("<price> - <store>")
//!     └── a.smartbanner-button[href=<store link>]
//!         └── span.smartbanner-button-text
//! ```

use serde::Serialize;

use crate::config::BannerConfig;
use crate::host::BannerHost;
use crate::platform::{PlatformProfile, PlatformTag};

/// Class of the banner container.
pub const BANNER_CLASS: &str = "smartbanner";
/// Class of the close control.
pub const CLOSE_CLASS: &str = "smartbanner-close";
/// Class of the install/open control.
pub const BUTTON_CLASS: &str = "smartbanner-button";

/// Everything needed to draw one banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerView {
    /// Styling theme (platform tag unless overridden)
    pub theme: String,
    /// Icon URL, if one resolved
    pub icon: Option<String>,
    pub title: String,
    pub author: String,
    /// "<price> - <store>"
    pub in_store: String,
    /// Store link behind the action button
    pub link: String,
    /// Action button label
    pub button: String,
}

impl BannerView {
    /// Build the view for a platform that passed the eligibility gate.
    pub fn build(
        config: &BannerConfig,
        platform: &PlatformTag,
        profile: &PlatformProfile,
        app_id: &str,
        icon: Option<String>,
    ) -> Self {
        let tag = platform.as_str();
        Self {
            theme: config.theme.clone().unwrap_or_else(|| tag.to_string()),
            icon,
            title: config.title.clone(),
            author: config.author.clone(),
            in_store: format!(
                "{} - {}",
                config.price.get(tag).unwrap_or_default(),
                config.store.get(tag).unwrap_or_default()
            ),
            link: profile.store_link(config, app_id),
            button: config.button.clone(),
        }
    }

    /// Class attribute of the container element.
    pub fn class_name(&self) -> String {
        format!("{} {}-{}", BANNER_CLASS, BANNER_CLASS, self.theme)
    }

    /// Markup inside the container element.
    pub fn inner_html(&self) -> String {
        let icon_style = self
            .icon
            .as_deref()
            .map(|icon| format!(r#" style="background-image: url({})""#, escape(icon)))
            .unwrap_or_default();

        format!(
            concat!(
                r#"<div class="smartbanner-container">"#,
                r#"<a href="javascript:void(0);" class="{close}">&times;</a>"#,
                r#"<span class="smartbanner-icon"{icon_style}></span>"#,
                r#"<div class="smartbanner-info">"#,
                r#"<div class="smartbanner-title">{title}</div>"#,
                r#"<div>{author}</div>"#,
                r#"<span>{in_store}</span>"#,
                r#"</div>"#,
                r#"<a href="{link}" class="{button_class}">"#,
                r#"<span class="smartbanner-button-text">{button}</span>"#,
                r#"</a>"#,
                r#"</div>"#,
            ),
            close = CLOSE_CLASS,
            icon_style = icon_style,
            title = escape(&self.title),
            author = escape(&self.author),
            in_store = escape(&self.in_store),
            link = escape(&self.link),
            button_class = BUTTON_CLASS,
            button = escape(&self.button),
        )
    }

    /// Complete markup including the container element.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            escape(&self.class_name()),
            self.inner_html()
        )
    }
}

/// Resolve the banner icon.
///
/// An explicit `icon` in the config wins. Otherwise the document's
/// `<link rel>` tags are probed in the platform's priority order.
pub fn resolve_icon(
    config: &BannerConfig,
    profile: &PlatformProfile,
    host: &impl BannerHost,
) -> Option<String> {
    if let Some(icon) = &config.icon {
        return Some(icon.clone());
    }
    profile.icon_rels.iter().find_map(|rel| host.link_href(rel))
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
