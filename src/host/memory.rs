//! In-memory document.

use std::collections::BTreeSet;

use super::{BannerHost, Mounted};
use crate::Result;
use crate::banner::BannerView;

/// A document held in memory.
///
/// Records `<link>` tags, whether a body exists, mounted banner markup and
/// root element classes so callers can inspect what the controller did.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    links: Vec<(String, String)>,
    has_body: bool,
    body: Vec<String>,
    pending: Vec<String>,
    root_classes: BTreeSet<String>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// A loaded document with an empty body.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            has_body: true,
            body: Vec::new(),
            pending: Vec::new(),
            root_classes: BTreeSet::new(),
        }
    }

    /// A document still parsing its head (no body yet).
    pub fn without_body() -> Self {
        Self {
            has_body: false,
            ..Self::new()
        }
    }

    /// Builder-style `<link rel href>` tag.
    pub fn with_link(mut self, rel: &str, href: &str) -> Self {
        self.links.push((rel.to_string(), href.to_string()));
        self
    }

    /// Simulate the content-loaded signal: the body appears and deferred
    /// banners are appended.
    pub fn fire_content_loaded(&mut self) {
        self.has_body = true;
        self.body.append(&mut self.pending);
    }

    /// Markup of banners appended to the body.
    pub fn banners(&self) -> &[String] {
        &self.body
    }

    /// Markup of banners waiting for the body.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Whether the root element carries a class.
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

impl BannerHost for MemoryHost {
    fn link_href(&self, rel: &str) -> Option<String> {
        self.links
            .iter()
            .find(|(r, _)| r == rel)
            .map(|(_, href)| href.clone())
    }

    fn mount(&mut self, view: &BannerView) -> Result<Mounted> {
        let html = view.to_html();
        if self.has_body {
            self.body.push(html);
            Ok(Mounted::Attached)
        } else {
            self.pending.push(html);
            Ok(Mounted::Deferred)
        }
    }

    fn add_root_class(&mut self, class: &str) -> Result<()> {
        self.root_classes.insert(class.to_string());
        Ok(())
    }

    fn remove_root_class(&mut self, class: &str) -> Result<()> {
        self.root_classes.remove(class);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_href_first_match() {
        let host = MemoryHost::new()
            .with_link("icon", "/favicon.ico")
            .with_link("apple-touch-icon", "/a.png")
            .with_link("apple-touch-icon", "/b.png");
        assert_eq!(host.link_href("apple-touch-icon").as_deref(), Some("/a.png"));
        assert_eq!(host.link_href("android-touch-icon"), None);
    }

    #[test]
    fn test_root_classes() {
        let mut host = MemoryHost::new();
        host.add_root_class("x").unwrap();
        assert!(host.has_root_class("x"));
        host.remove_root_class("x").unwrap();
        assert!(!host.has_root_class("x"));
        // Removing an absent class is a no-op
        host.remove_root_class("x").unwrap();
    }

    #[test]
    fn test_fire_content_loaded_moves_pending() {
        let mut host = MemoryHost::without_body();
        host.pending.push("<div></div>".to_string());
        host.fire_content_loaded();
        assert!(host.pending().is_empty());
        assert_eq!(host.banners().len(), 1);
    }
}
