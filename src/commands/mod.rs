//! Command implementations for the Smartbanner CLI.
//!
//! Each command runs the library against in-memory fakes and returns a
//! result that can be printed as JSON or as human-readable text:
//! - `detect` - Platform detection for a user agent
//! - `render` - Full controller run for a simulated visit
//! - `action` - Render followed by a close/install action
//! - `defaults` - The built-in configuration

use std::path::PathBuf;

use serde::Serialize;

use crate::banner::{BannerController, BannerView, Callbacks, Eligibility, SHOW_CLASS, Services, UserAction};
use crate::config::{BannerConfig, BannerOverrides};
use crate::cookie::MemoryCookieJar;
use crate::host::{Environment, MemoryHost, Mounted};
use crate::platform::{OsInfo, ParsedAgent, PlatformTag};
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

/// Result of `smartbanner detect`.
#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub user_agent: String,
    pub platform: PlatformTag,
    pub os: OsInfo,
    pub forced: bool,
}

impl CommandResult for DetectResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let os = match (&self.os.name, &self.os.version) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name.clone(),
            _ => "unknown".to_string(),
        };
        let mut out = format!("Platform: {}\nOS: {}", self.platform, os);
        if self.forced {
            out.push_str("\n(forced)");
        }
        out
    }
}

/// Detect the platform for a user agent.
pub fn detect(user_agent: &str, force: Option<&str>) -> Result<DetectResult> {
    let agent = ParsedAgent::parse(user_agent);
    let platform = PlatformTag::detect(&agent, force);
    Ok(DetectResult {
        user_agent: agent.ua,
        platform,
        os: agent.os,
        forced: force.is_some_and(|f| !f.is_empty()),
    })
}

/// A simulated page visit.
#[derive(Debug, Clone, Default)]
pub struct VisitOptions {
    pub user_agent: String,
    pub config: Option<PathBuf>,
    pub language: String,
    pub standalone: bool,
    /// `NAME=VALUE` pairs already in the jar
    pub cookies: Vec<String>,
    /// `REL=HREF` pairs in the document head
    pub links: Vec<String>,
    pub no_body: bool,
}

/// Result of `smartbanner render`.
#[derive(Debug, Serialize)]
pub struct RenderResult {
    pub platform: PlatformTag,
    pub eligibility: Eligibility,
    pub state: String,
    pub app_id: Option<String>,
    pub mounted: Option<Mounted>,
    pub visible: bool,
    pub banner: Option<BannerView>,
    pub html: Option<String>,
}

impl CommandResult for RenderResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Platform: {}", self.platform),
            format!("Eligibility: {}", self.eligibility),
            format!("State: {}", self.state),
        ];
        if let Some(app_id) = &self.app_id {
            lines.push(format!("App id: {}", app_id));
        }
        if let Some(banner) = &self.banner {
            lines.push(format!("Link: {}", banner.link));
            lines.push(format!(
                "Icon: {}",
                banner.icon.as_deref().unwrap_or("(none)")
            ));
        }
        if let Some(html) = &self.html {
            lines.push(String::new());
            lines.push(html.clone());
        }
        lines.join("\n")
    }
}

type MemoryController = BannerController<MemoryHost, MemoryCookieJar>;

fn split_pair<'a>(pair: &'a str, what: &str) -> Result<(&'a str, &'a str)> {
    pair.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| Error::InvalidInput(format!("{} must be NAME=VALUE, got '{}'", what, pair)))
}

fn visit(options: &VisitOptions) -> Result<MemoryController> {
    let overrides = match &options.config {
        Some(path) => BannerOverrides::from_path(path)?,
        None => BannerOverrides::default(),
    };
    let env = Environment::new(&options.user_agent)
        .with_language(&options.language)
        .with_standalone(options.standalone);
    let config = BannerConfig::resolve(overrides, &env.store_language());

    let mut host = if options.no_body {
        MemoryHost::without_body()
    } else {
        MemoryHost::new()
    };
    for link in &options.links {
        let (rel, href) = split_pair(link, "--link")?;
        host = host.with_link(rel, href);
    }

    let mut cookies = MemoryCookieJar::new();
    for cookie in &options.cookies {
        let (name, value) = split_pair(cookie, "--cookie")?;
        cookies.insert(name, value);
    }

    Ok(BannerController::new(
        config,
        &env,
        Services::new(host, cookies),
        Callbacks::new(),
    ))
}

fn summarize(controller: &MemoryController) -> RenderResult {
    let host = controller.host();
    RenderResult {
        platform: controller.platform().clone(),
        eligibility: controller.eligibility(),
        state: controller.state().to_string(),
        app_id: controller.app_id().map(str::to_string),
        mounted: controller.mounted(),
        visible: host.has_root_class(SHOW_CLASS),
        banner: controller.view().cloned(),
        html: host
            .banners()
            .first()
            .or_else(|| host.pending().first())
            .cloned(),
    }
}

/// Run the banner for a simulated visit.
pub fn render(options: &VisitOptions) -> Result<RenderResult> {
    let controller = visit(options)?;
    tracing::debug!(eligibility = %controller.eligibility(), "render finished");
    Ok(summarize(&controller))
}

/// Result of `smartbanner action`.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub action: String,
    /// Whether the action applied (false when no banner was shown)
    pub applied: bool,
    pub state: String,
    pub visible: bool,
    /// Cookies written, in `document.cookie` assignment form
    pub cookies: Vec<String>,
}

impl CommandResult for ActionResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if !self.applied {
            return format!("No banner shown; {} ignored (state: {})", self.action, self.state);
        }
        let mut out = format!("Applied {}; state: {}", self.action, self.state);
        if self.cookies.is_empty() {
            out.push_str("\nNo cookies written");
        } else {
            for cookie in &self.cookies {
                out.push_str("\nSet-Cookie: ");
                out.push_str(cookie);
            }
        }
        out
    }
}

/// Run the banner, then apply a user action.
pub fn action(options: &VisitOptions, action: UserAction) -> Result<ActionResult> {
    let mut controller = visit(options)?;
    let applied = controller.handle(action);
    let cookies = controller
        .cookies()
        .written()
        .iter()
        .map(|cookie| cookie.to_cookie_string())
        .collect();

    Ok(ActionResult {
        action: match action {
            UserAction::Close => "close".to_string(),
            UserAction::Install => "install".to_string(),
        },
        applied,
        state: controller.state().to_string(),
        visible: controller.host().has_root_class(SHOW_CLASS),
        cookies,
    })
}

/// Result of `smartbanner defaults`.
#[derive(Debug, Serialize)]
pub struct DefaultsResult {
    pub config: BannerConfig,
}

impl CommandResult for DefaultsResult {
    fn to_json(&self) -> String {
        json(&self.config)
    }

    fn to_human(&self) -> String {
        let c = &self.config;
        let mut lines = vec![
            format!("daysHidden: {}", c.days_hidden),
            format!("daysReminder: {}", c.days_reminder),
            format!("appStoreLanguage: {}", c.app_store_language),
            format!("button: {}", c.button),
        ];
        for (tag, store) in c.store.iter() {
            lines.push(format!(
                "store.{}: {} ({})",
                tag,
                store,
                c.price.get(tag).unwrap_or("-")
            ));
        }
        lines.join("\n")
    }
}

/// The default configuration for a visitor language.
pub fn defaults(language: &str) -> Result<DefaultsResult> {
    let env = Environment::new("").with_language(language);
    Ok(DefaultsResult {
        config: BannerConfig::defaults(&env.store_language()),
    })
}
