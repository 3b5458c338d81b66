//! JavaScript bindings.
//!
//! Exposes the controller as a `SmartBanner` class:
//!
//! ```javascript
//! import init, { SmartBanner } from './smartbanner.js';
//!
//! await init();
//! new SmartBanner({
//!     title: 'My App',
//!     author: 'My Company',
//!     appId: { ios: '123456789', android: 'com.example.app' },
//!     onClose: () => console.log('closed'),
//! });
//! ```

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom::{BrowserCookies, BrowserHost};
use crate::banner::{
    BUTTON_CLASS, BannerController, BannerState, CLOSE_CLASS, Callbacks, Services,
    SharedController, UserAction,
};
use crate::config::{BannerConfig, BannerOverrides};
use crate::host::Environment;
use crate::{Error, Result};

type BrowserController = BannerController<BrowserHost, BrowserCookies>;
type SharedBrowserController = SharedController<BrowserHost, BrowserCookies>;

/// A smart app banner bound to the current page.
#[wasm_bindgen]
pub struct SmartBanner {
    controller: Option<Rc<SharedBrowserController>>,
}

#[wasm_bindgen]
impl SmartBanner {
    /// Detect the platform and show the banner if the visitor is eligible.
    ///
    /// Bad options or a missing document leave the banner inert; the reason
    /// is logged to the console.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> SmartBanner {
        super::init_panic_hook();
        match start(&options) {
            Ok(controller) => SmartBanner {
                controller: Some(controller),
            },
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("smartbanner: {}", e)));
                SmartBanner { controller: None }
            }
        }
    }

    /// Dismiss the banner. Returns false if it was not showing.
    pub fn close(&self) -> bool {
        self.dispatch(UserAction::Close)
    }

    /// Record install intent and hide the banner. Returns false if it was not showing.
    pub fn install(&self) -> bool {
        self.dispatch(UserAction::Install)
    }

    /// Current state ("hidden", "shown", "closed_by_user", "installed_by_user").
    pub fn state(&self) -> String {
        self.with(|c| c.state(), BannerState::Hidden).to_string()
    }

    /// Detected platform tag.
    pub fn platform(&self) -> String {
        self.with(|c| c.platform().to_string(), "unsupported".to_string())
    }

    #[wasm_bindgen(js_name = isShown)]
    pub fn is_shown(&self) -> bool {
        self.with(|c| c.is_shown(), false)
    }
}

impl SmartBanner {
    fn with<T>(&self, f: impl FnOnce(&BrowserController) -> T, default: T) -> T {
        self.controller
            .as_ref()
            .and_then(|controller| controller.with(f))
            .unwrap_or(default)
    }

    fn dispatch(&self, action: UserAction) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|controller| controller.handle(action))
    }
}

fn start(options: &JsValue) -> Result<Rc<SharedBrowserController>> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Dom("no document".to_string()))?;
    let navigator = window.navigator();

    let env = Environment {
        user_agent: navigator.user_agent().unwrap_or_default(),
        language: navigator.language().unwrap_or_default(),
        standalone: js_sys::Reflect::get(&navigator, &JsValue::from_str("standalone"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    };

    let overrides = parse_overrides(options)?;
    let config = BannerConfig::resolve(overrides, &env.store_language());

    let mut callbacks = Callbacks::new();
    if let Some(on_show) = function_field(options, "onShow") {
        callbacks = callbacks.on_show(move || call(&on_show));
    }
    let services = Services::new(BrowserHost::new(document.clone()), BrowserCookies::new(&document)?);
    let mut controller =
        SharedController::new(BannerController::new(config, &env, services, callbacks));
    // Runs after the controller is released so the handler can query it.
    if let Some(on_close) = function_field(options, "onClose") {
        controller = controller.on_close(move || call(&on_close));
    }
    let controller = Rc::new(controller);

    wire_events(&controller)?;
    Ok(controller)
}

fn parse_overrides(options: &JsValue) -> Result<BannerOverrides> {
    if options.is_undefined() || options.is_null() {
        return Ok(BannerOverrides::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(super::dom::js_err)?
        .into();
    BannerOverrides::from_json_str(&json)
}

fn function_field(options: &JsValue, name: &str) -> Option<js_sys::Function> {
    if !options.is_object() {
        return None;
    }
    js_sys::Reflect::get(options, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn call(f: &js_sys::Function) {
    if let Err(e) = f.call0(&JsValue::NULL) {
        web_sys::console::warn_1(&e);
    }
}

/// Attach click listeners to the close and action controls.
fn wire_events(controller: &Rc<SharedBrowserController>) -> Result<()> {
    let Some(banner) = controller
        .with(|c| c.host().element().cloned())
        .flatten()
    else {
        return Ok(());
    };

    for (class, action) in [
        (BUTTON_CLASS, UserAction::Install),
        (CLOSE_CLASS, UserAction::Close),
    ] {
        let Some(target) = banner
            .query_selector(&format!(".{}", class))
            .map_err(super::dom::js_err)?
        else {
            continue;
        };
        let controller = controller.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            controller.handle(action);
        });
        target
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(super::dom::js_err)?;
        // Listeners live as long as the page.
        listener.forget();
    }
    Ok(())
}
