//! A controller reachable from several entry points at once.

use std::cell::RefCell;

use super::{BannerController, UserAction};
use crate::cookie::CookieStore;
use crate::host::BannerHost;

/// A [`BannerController`] behind a `RefCell`, for pages where click
/// listeners and script calls drive the same banner.
///
/// The `on_close` callback runs after the controller borrow is released, so
/// it can read the banner's state. Actions it triggers are ignored because
/// the banner is no longer shown.
pub struct SharedController<H, C> {
    controller: RefCell<BannerController<H, C>>,
    on_close: RefCell<Option<Box<dyn FnMut()>>>,
}

impl<H: BannerHost, C: CookieStore> SharedController<H, C> {
    pub fn new(controller: BannerController<H, C>) -> Self {
        Self {
            controller: RefCell::new(controller),
            on_close: RefCell::new(None),
        }
    }

    /// Called once after a close or install action is applied.
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        *self.on_close.get_mut() = Some(Box::new(f));
        self
    }

    /// Apply a user action. Returns false when nothing changed.
    pub fn handle(&self, action: UserAction) -> bool {
        let applied = match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle(action),
            Err(_) => false,
        };
        if applied {
            if let Ok(mut on_close) = self.on_close.try_borrow_mut() {
                if let Some(f) = on_close.as_mut() {
                    f();
                }
            }
        }
        applied
    }

    /// Read the controller. `None` only while an action is being applied.
    pub fn with<T>(&self, f: impl FnOnce(&BannerController<H, C>) -> T) -> Option<T> {
        let controller = self.controller.try_borrow().ok()?;
        Some(f(&*controller))
    }
}
