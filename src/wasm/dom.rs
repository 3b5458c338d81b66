//! Browser implementations of the host and cookie capabilities.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlDocument};

use crate::banner::BannerView;
use crate::cookie::{Cookie, CookieStore, parse_cookie_header};
use crate::host::{BannerHost, Mounted};
use crate::{Error, Result};

/// Convert a thrown JS value into a library error.
pub(crate) fn js_err(value: JsValue) -> Error {
    Error::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// The live document.
pub struct BrowserHost {
    document: Document,
    element: Option<Element>,
}

impl BrowserHost {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            element: None,
        }
    }

    /// The banner container, once mounted.
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    fn root(&self) -> Result<Element> {
        self.document
            .document_element()
            .ok_or_else(|| Error::Dom("document has no root element".to_string()))
    }
}

impl BannerHost for BrowserHost {
    fn link_href(&self, rel: &str) -> Option<String> {
        self.document
            .query_selector(&format!(r#"link[rel="{}"]"#, rel))
            .ok()
            .flatten()
            .and_then(|link| link.get_attribute("href"))
    }

    fn mount(&mut self, view: &BannerView) -> Result<Mounted> {
        let banner = self.document.create_element("div").map_err(js_err)?;
        banner.set_class_name(&view.class_name());
        banner.set_inner_html(&view.inner_html());

        let mounted = match self.document.body() {
            Some(body) => {
                body.append_child(&banner).map_err(js_err)?;
                Mounted::Attached
            }
            None => {
                // Script ran from <head>; wait for the body.
                let document = self.document.clone();
                let pending = banner.clone();
                let on_loaded = Closure::once_into_js(move || {
                    if let Some(body) = document.body() {
                        if let Err(e) = body.append_child(&pending) {
                            web_sys::console::warn_1(&e);
                        }
                    }
                });
                self.document
                    .add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())
                    .map_err(js_err)?;
                Mounted::Deferred
            }
        };

        self.element = Some(banner);
        Ok(mounted)
    }

    fn add_root_class(&mut self, class: &str) -> Result<()> {
        self.root()?.class_list().add_1(class).map_err(js_err)
    }

    fn remove_root_class(&mut self, class: &str) -> Result<()> {
        self.root()?.class_list().remove_1(class).map_err(js_err)
    }
}

/// `document.cookie` jar.
pub struct BrowserCookies {
    document: HtmlDocument,
}

impl BrowserCookies {
    pub fn new(document: &Document) -> Result<Self> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| Error::Dom("document does not support cookies".to_string()))?;
        Ok(Self { document })
    }
}

impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = self.document.cookie().ok()?;
        parse_cookie_header(&header)
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    fn set(&mut self, cookie: Cookie) -> Result<()> {
        self.document
            .set_cookie(&cookie.to_cookie_string())
            .map_err(js_err)
    }
}
