//! The banner controller.
//!
//! A [`BannerController`] runs one linear pipeline at construction:
//!
//! 1. Detect the platform from the user agent (or the `force` tag)
//! 2. Evaluate the eligibility gate once
//! 3. Render and mount the banner, then mark the document root as showing it
//!
//! After that the only transitions are the two user actions. Closing or
//! tapping install hides the banner (the DOM node stays) and may persist a
//! cookie that blocks the gate on later page loads.
//!
//! ```text
//! Hidden ──(gate passes, mounted)──▶ Shown ──close───▶ ClosedByUser
//!                                      └────install──▶ InstalledByUser
//! ```

mod markup;
mod shared;

pub use markup::{BANNER_CLASS, BUTTON_CLASS, BannerView, CLOSE_CLASS, resolve_icon};
pub use shared::SharedController;

use serde::Serialize;

use crate::config::{BannerConfig, BannerOverrides};
use crate::cookie::{Cookie, CookieStore, closed_cookie_name, installed_cookie_name};
use crate::host::{BannerHost, Clock, Environment, Mounted, SystemClock};
use crate::platform::{ParsedAgent, PlatformProfile, PlatformTag};

/// Class toggled on the document root while the banner is visible.
pub const SHOW_CLASS: &str = "smartbanner-show";

/// Outcome of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// The banner may be shown
    Eligible,
    /// Unknown platform, no store entry, or no built-in profile for the tag
    Unsupported,
    /// The page runs as an installed standalone app
    Standalone,
    /// The visitor dismissed the banner recently
    Dismissed,
    /// The visitor tapped install recently
    Installed,
    /// No app id configured for the platform
    MissingAppId,
}

impl Eligibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "eligible",
            Eligibility::Unsupported => "unsupported",
            Eligibility::Standalone => "standalone",
            Eligibility::Dismissed => "dismissed",
            Eligibility::Installed => "installed",
            Eligibility::MissingAppId => "missing_app_id",
        }
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visibility state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerState {
    /// Never shown (gate failed or mount failed)
    Hidden,
    /// Visible and waiting for a user action
    Shown,
    /// Dismissed through the close control
    ClosedByUser,
    /// Hidden after the install/open control was activated
    InstalledByUser,
}

impl BannerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerState::Hidden => "hidden",
            BannerState::Shown => "shown",
            BannerState::ClosedByUser => "closed_by_user",
            BannerState::InstalledByUser => "installed_by_user",
        }
    }
}

impl std::fmt::Display for BannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user action on a shown banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// The close control
    Close,
    /// The install/open control
    Install,
}

/// Optional lifecycle callbacks.
#[derive(Default)]
pub struct Callbacks {
    on_show: Option<Box<dyn FnMut()>>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once when the banner becomes visible.
    pub fn on_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_show = Some(Box::new(f));
        self
    }

    /// Called once when the banner is closed or the install control is used.
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_show", &self.on_show.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Effectful dependencies of a controller.
pub struct Services<H, C> {
    pub host: H,
    pub cookies: C,
    pub clock: Box<dyn Clock>,
}

impl<H: BannerHost, C: CookieStore> Services<H, C> {
    /// Services using the system clock.
    pub fn new(host: H, cookies: C) -> Self {
        Self {
            host,
            cookies,
            clock: Box::new(SystemClock),
        }
    }

    /// Builder-style clock override.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

/// Evaluate the eligibility gate.
///
/// On success returns the resolved app id and the platform's profile.
pub fn check_eligibility(
    config: &BannerConfig,
    platform: &PlatformTag,
    standalone: bool,
    cookies: &impl CookieStore,
) -> Result<(String, PlatformProfile), Eligibility> {
    if *platform == PlatformTag::Unsupported || !config.store.contains(platform.as_str()) {
        return Err(Eligibility::Unsupported);
    }
    let profile = PlatformProfile::for_tag(platform).ok_or(Eligibility::Unsupported)?;
    let app_id = config.app_id.get(platform.as_str()).unwrap_or_default();

    if standalone {
        return Err(Eligibility::Standalone);
    }
    let is_set = |name: String| cookies.get(&name).is_some_and(|value| !value.is_empty());
    if is_set(closed_cookie_name(app_id)) {
        return Err(Eligibility::Dismissed);
    }
    if is_set(installed_cookie_name(app_id)) {
        return Err(Eligibility::Installed);
    }
    if app_id.is_empty() {
        return Err(Eligibility::MissingAppId);
    }
    Ok((app_id.to_string(), profile))
}

/// Drives one banner from detection to the user's choice.
pub struct BannerController<H, C> {
    config: BannerConfig,
    platform: PlatformTag,
    eligibility: Eligibility,
    app_id: Option<String>,
    view: Option<BannerView>,
    mounted: Option<Mounted>,
    state: BannerState,
    services: Services<H, C>,
    callbacks: Callbacks,
}

impl<H: BannerHost, C: CookieStore> BannerController<H, C> {
    /// Merge overrides onto the defaults for this environment, then start.
    pub fn from_overrides(
        overrides: BannerOverrides,
        env: &Environment,
        services: Services<H, C>,
        callbacks: Callbacks,
    ) -> Self {
        let config = BannerConfig::resolve(overrides, &env.store_language());
        Self::new(config, env, services, callbacks)
    }

    /// Detect, gate, render and show. Never fails: an ineligible banner
    /// leaves the document untouched.
    pub fn new(
        config: BannerConfig,
        env: &Environment,
        services: Services<H, C>,
        callbacks: Callbacks,
    ) -> Self {
        let agent = ParsedAgent::parse(&env.user_agent);
        let platform = PlatformTag::detect(&agent, config.force.as_deref());

        let mut controller = Self {
            config,
            platform,
            eligibility: Eligibility::Unsupported,
            app_id: None,
            view: None,
            mounted: None,
            state: BannerState::Hidden,
            services,
            callbacks,
        };

        match check_eligibility(
            &controller.config,
            &controller.platform,
            env.standalone,
            &controller.services.cookies,
        ) {
            Ok((app_id, profile)) => {
                controller.eligibility = Eligibility::Eligible;
                controller.app_id = Some(app_id.clone());
                if controller.create(&app_id, &profile) {
                    controller.show();
                }
            }
            Err(reason) => {
                tracing::debug!(platform = %controller.platform, %reason, "banner suppressed");
                controller.eligibility = reason;
            }
        }

        controller
    }

    fn create(&mut self, app_id: &str, profile: &PlatformProfile) -> bool {
        let icon = resolve_icon(&self.config, profile, &self.services.host);
        let view = BannerView::build(&self.config, &self.platform, profile, app_id, icon);

        match self.services.host.mount(&view) {
            Ok(mounted) => {
                tracing::debug!(platform = %self.platform, ?mounted, "banner mounted");
                self.view = Some(view);
                self.mounted = Some(mounted);
                true
            }
            Err(e) => {
                tracing::warn!("failed to mount banner: {}", e);
                false
            }
        }
    }

    fn show(&mut self) {
        if let Err(e) = self.services.host.add_root_class(SHOW_CLASS) {
            tracing::warn!("failed to show banner: {}", e);
            return;
        }
        self.state = BannerState::Shown;
        if let Some(on_show) = self.callbacks.on_show.as_mut() {
            on_show();
        }
    }

    fn hide(&mut self) {
        if let Err(e) = self.services.host.remove_root_class(SHOW_CLASS) {
            tracing::warn!("failed to hide banner: {}", e);
        }
    }

    /// Apply a user action. Returns false when the banner is not shown.
    ///
    /// Both actions hide the banner and call `on_close`. When `daysHidden`
    /// is positive a cookie is written: close uses `daysHidden` for the
    /// expiry, install uses `daysReminder`.
    pub fn handle(&mut self, action: UserAction) -> bool {
        if self.state != BannerState::Shown {
            tracing::debug!(state = %self.state, ?action, "ignoring action on inactive banner");
            return false;
        }
        let app_id = self.app_id.clone().unwrap_or_default();

        self.hide();
        let (cookie_name, days, next) = match action {
            UserAction::Close => (
                closed_cookie_name(&app_id),
                self.config.days_hidden,
                BannerState::ClosedByUser,
            ),
            UserAction::Install => (
                installed_cookie_name(&app_id),
                self.config.days_reminder,
                BannerState::InstalledByUser,
            ),
        };
        if self.config.days_hidden > 0 {
            let cookie = Cookie::flag(cookie_name, self.services.clock.now(), days);
            if let Err(e) = self.services.cookies.set(cookie) {
                tracing::warn!("failed to persist banner choice: {}", e);
            }
        }
        self.state = next;
        tracing::debug!(state = %self.state, "banner hidden");

        if let Some(on_close) = self.callbacks.on_close.as_mut() {
            on_close();
        }
        true
    }

    /// Dismiss the banner.
    pub fn close(&mut self) -> bool {
        self.handle(UserAction::Close)
    }

    /// Follow the store link.
    pub fn install(&mut self) -> bool {
        self.handle(UserAction::Install)
    }

    pub fn platform(&self) -> &PlatformTag {
        &self.platform
    }

    pub fn eligibility(&self) -> Eligibility {
        self.eligibility
    }

    /// App id resolved for the platform, once the gate passed.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// The rendered banner, if one was mounted.
    pub fn view(&self) -> Option<&BannerView> {
        self.view.as_ref()
    }

    pub fn mounted(&self) -> Option<Mounted> {
        self.mounted
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == BannerState::Shown
    }

    pub fn host(&self) -> &H {
        &self.services.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.services.host
    }

    pub fn cookies(&self) -> &C {
        &self.services.cookies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformMap;
    use crate::cookie::MemoryCookieJar;
    use crate::host::{FixedClock, MemoryHost};
    use crate::{Error, Result};
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    fn config() -> BannerConfig {
        let mut config = BannerConfig::defaults("us");
        config.app_id = PlatformMap::from([("ios", "123456"), ("android", "com.example.app")]);
        config
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap())
    }

    fn start(
        config: BannerConfig,
        env: &Environment,
        cookies: MemoryCookieJar,
        callbacks: Callbacks,
    ) -> BannerController<MemoryHost, MemoryCookieJar> {
        let services = Services::new(MemoryHost::new(), cookies).with_clock(clock());
        BannerController::new(config, env, services, callbacks)
    }

    #[test]
    fn test_gate_unsupported_platform() {
        let jar = MemoryCookieJar::new();
        assert_eq!(
            check_eligibility(&config(), &PlatformTag::Unsupported, false, &jar).unwrap_err(),
            Eligibility::Unsupported
        );
    }

    #[test]
    fn test_gate_missing_store_entry() {
        let mut config = config();
        config.store = PlatformMap::new().with("ios", "App Store");
        let jar = MemoryCookieJar::new();
        assert_eq!(
            check_eligibility(&config, &PlatformTag::Android, false, &jar).unwrap_err(),
            Eligibility::Unsupported
        );
        assert!(check_eligibility(&config, &PlatformTag::Ios, false, &jar).is_ok());
    }

    #[test]
    fn test_gate_custom_tag_without_profile() {
        let mut config = config();
        config.app_id.insert("windows", "9WZDNCRFJ3TJ");
        let jar = MemoryCookieJar::new();
        let tag = PlatformTag::Custom("windows".to_string());
        assert_eq!(
            check_eligibility(&config, &tag, false, &jar).unwrap_err(),
            Eligibility::Unsupported
        );
    }

    #[test]
    fn test_gate_reasons_in_order() {
        let jar = MemoryCookieJar::from_header(
            "123456-smartbanner-closed=true; 123456-smartbanner-installed=true",
        );
        assert_eq!(
            check_eligibility(&config(), &PlatformTag::Ios, true, &jar).unwrap_err(),
            Eligibility::Standalone
        );
        assert_eq!(
            check_eligibility(&config(), &PlatformTag::Ios, false, &jar).unwrap_err(),
            Eligibility::Dismissed
        );

        let jar = MemoryCookieJar::from_header("123456-smartbanner-installed=true");
        assert_eq!(
            check_eligibility(&config(), &PlatformTag::Ios, false, &jar).unwrap_err(),
            Eligibility::Installed
        );
    }

    #[test]
    fn test_gate_ignores_empty_cookie_values() {
        let jar = MemoryCookieJar::from_header(
            "123456-smartbanner-closed=; 123456-smartbanner-installed=",
        );
        assert!(check_eligibility(&config(), &PlatformTag::Ios, false, &jar).is_ok());
    }

    #[test]
    fn test_gate_missing_app_id() {
        let jar = MemoryCookieJar::new();
        assert_eq!(
            check_eligibility(&BannerConfig::defaults("us"), &PlatformTag::Ios, false, &jar)
                .unwrap_err(),
            Eligibility::MissingAppId
        );
    }

    #[test]
    fn test_gate_pass_returns_app_id_and_profile() {
        let jar = MemoryCookieJar::new();
        let (app_id, profile) =
            check_eligibility(&config(), &PlatformTag::Android, false, &jar).unwrap();
        assert_eq!(app_id, "com.example.app");
        assert_eq!(profile.icon_rels[0], "android-touch-icon");
    }

    #[test]
    fn test_shows_on_eligible_platform() {
        let shown = Rc::new(Cell::new(0));
        let counter = shown.clone();
        let controller = start(
            config(),
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new().on_show(move || counter.set(counter.get() + 1)),
        );

        assert_eq!(controller.eligibility(), Eligibility::Eligible);
        assert_eq!(controller.state(), BannerState::Shown);
        assert_eq!(controller.mounted(), Some(Mounted::Attached));
        assert!(controller.host().has_root_class(SHOW_CLASS));
        assert_eq!(controller.host().banners().len(), 1);
        assert_eq!(controller.app_id(), Some("123456"));
        assert_eq!(shown.get(), 1);
    }

    #[test]
    fn test_inert_on_desktop() {
        let controller = start(
            config(),
            &Environment::new(DESKTOP),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert_eq!(controller.eligibility(), Eligibility::Unsupported);
        assert_eq!(controller.state(), BannerState::Hidden);
        assert!(controller.host().banners().is_empty());
        assert!(!controller.host().has_root_class(SHOW_CLASS));
        assert!(controller.view().is_none());
    }

    #[test]
    fn test_inert_in_standalone_mode() {
        let controller = start(
            config(),
            &Environment::new(IPHONE).with_standalone(true),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert_eq!(controller.eligibility(), Eligibility::Standalone);
        assert!(controller.host().banners().is_empty());
    }

    #[test]
    fn test_close_sets_dismissal_cookie() {
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let mut controller = start(
            config(),
            &Environment::new(ANDROID_UA),
            MemoryCookieJar::new(),
            Callbacks::new().on_close(move || counter.set(counter.get() + 1)),
        );

        assert!(controller.close());
        assert_eq!(controller.state(), BannerState::ClosedByUser);
        assert!(!controller.host().has_root_class(SHOW_CLASS));
        // Hidden, not removed
        assert_eq!(controller.host().banners().len(), 1);

        let cookie = controller
            .cookies()
            .cookie("com.example.app-smartbanner-closed")
            .unwrap();
        assert_eq!(cookie.value, "true");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.expires, Some(clock().0 + Duration::days(15)));
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_install_uses_reminder_days_and_close_callback() {
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let mut controller = start(
            config(),
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new().on_close(move || counter.set(counter.get() + 1)),
        );

        assert!(controller.install());
        assert_eq!(controller.state(), BannerState::InstalledByUser);
        assert!(!controller.host().has_root_class(SHOW_CLASS));
        let cookie = controller
            .cookies()
            .cookie("123456-smartbanner-installed")
            .unwrap();
        assert_eq!(cookie.expires, Some(clock().0 + Duration::days(90)));
        assert!(controller.cookies().cookie("123456-smartbanner-closed").is_none());
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_negative_days_hidden_shows_and_writes_nothing() {
        let mut config = config();
        config.days_hidden = -1;
        let mut controller = start(
            config,
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(controller.is_shown());
        assert!(controller.close());
        assert!(controller.cookies().written().is_empty());
    }

    #[test]
    fn test_negative_reminder_writes_expired_install_cookie() {
        let mut config = config();
        config.days_reminder = -1;
        let mut controller = start(
            config,
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(controller.install());
        let cookie = controller
            .cookies()
            .cookie("123456-smartbanner-installed")
            .unwrap();
        assert_eq!(cookie.expires, Some(clock().0 - Duration::days(1)));
    }

    #[test]
    fn test_huge_days_hidden_does_not_overflow() {
        let mut config = config();
        config.days_hidden = i64::MAX;
        let mut controller = start(
            config,
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(controller.close());
        let cookie = controller.cookies().cookie("123456-smartbanner-closed").unwrap();
        assert_eq!(cookie.expires, Some(chrono::DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_install_guard_checks_days_hidden() {
        let mut config = config();
        config.days_hidden = 0;
        config.days_reminder = 90;
        let mut controller = start(
            config,
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(controller.install());
        assert!(controller.cookies().written().is_empty());
        assert!(!controller.host().has_root_class(SHOW_CLASS));
    }

    #[test]
    fn test_reminder_zero_still_writes_install_cookie() {
        let mut config = config();
        config.days_reminder = 0;
        let mut controller = start(
            config,
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(controller.install());
        let written = controller.cookies().written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].expires, Some(clock().0));
    }

    #[test]
    fn test_actions_are_terminal() {
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let mut controller = start(
            config(),
            &Environment::new(IPHONE),
            MemoryCookieJar::new(),
            Callbacks::new().on_close(move || counter.set(counter.get() + 1)),
        );
        assert!(controller.close());
        assert!(!controller.install());
        assert!(!controller.close());
        assert_eq!(controller.state(), BannerState::ClosedByUser);
        assert_eq!(controller.cookies().written().len(), 1);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_action_on_inert_banner_is_ignored() {
        let mut controller = start(
            config(),
            &Environment::new(DESKTOP),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert!(!controller.close());
        assert!(controller.cookies().written().is_empty());
    }

    #[test]
    fn test_forced_platform() {
        let mut config = config();
        config.force = Some("android".to_string());
        let controller = start(
            config,
            &Environment::new(DESKTOP),
            MemoryCookieJar::new(),
            Callbacks::new(),
        );
        assert_eq!(controller.platform(), &PlatformTag::Android);
        assert!(controller.is_shown());
        assert_eq!(
            controller.view().unwrap().link,
            "http://play.google.com/store/apps/details?id=com.example.app"
        );
    }

    #[test]
    fn test_from_overrides_uses_environment_language() {
        let overrides = BannerOverrides {
            app_id: Some(PlatformMap::from([("ios", "42")])),
            ..Default::default()
        };
        let env = Environment::new(IPHONE).with_language("fr-FR");
        let services = Services::new(MemoryHost::new(), MemoryCookieJar::new());
        let controller = BannerController::from_overrides(overrides, &env, services, Callbacks::new());
        assert_eq!(
            controller.view().unwrap().link,
            "https://itunes.apple.com/FR/app/id42?mt=8"
        );
    }

    #[test]
    fn test_deferred_mount() {
        let services = Services::new(MemoryHost::without_body(), MemoryCookieJar::new());
        let mut controller =
            BannerController::new(config(), &Environment::new(IPHONE), services, Callbacks::new());
        assert_eq!(controller.mounted(), Some(Mounted::Deferred));
        assert!(controller.is_shown());
        assert!(controller.host().banners().is_empty());
        assert_eq!(controller.host().pending().len(), 1);

        controller.host_mut().fire_content_loaded();
        assert_eq!(controller.host().banners().len(), 1);
    }

    struct BrokenHost;

    impl BannerHost for BrokenHost {
        fn link_href(&self, _rel: &str) -> Option<String> {
            None
        }

        fn mount(&mut self, _view: &BannerView) -> Result<Mounted> {
            Err(Error::Dom("no document".to_string()))
        }

        fn add_root_class(&mut self, _class: &str) -> Result<()> {
            Ok(())
        }

        fn remove_root_class(&mut self, _class: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mount_failure_stays_hidden() {
        let shown = Rc::new(Cell::new(false));
        let flag = shown.clone();
        let services = Services::new(BrokenHost, MemoryCookieJar::new());
        let controller = BannerController::new(
            config(),
            &Environment::new(IPHONE),
            services,
            Callbacks::new().on_show(move || flag.set(true)),
        );
        assert_eq!(controller.eligibility(), Eligibility::Eligible);
        assert_eq!(controller.state(), BannerState::Hidden);
        assert!(!shown.get());
    }
}
