//! CLI argument definitions for Smartbanner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Smartbanner - preview and debug the smart app banner outside a browser.
///
/// Runs the same detection, eligibility and rendering logic as the WASM
/// build against an in-memory document and cookie jar.
#[derive(Parser, Debug)]
#[command(name = "smartbanner")]
#[command(author, version, long_version = long_version(), about = "Preview the smart app banner for a given device", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("SMARTBANNER_GIT_COMMIT"),
        " ",
        env!("SMARTBANNER_BUILD_TIMESTAMP"),
        ")"
    )
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the platform for a user agent
    Detect {
        /// User-agent string
        user_agent: String,

        /// Platform tag that bypasses detection (e.g. ios, android)
        #[arg(long)]
        force: Option<String>,
    },

    /// Run the banner for a simulated visit and print the result
    Render(VisitArgs),

    /// Render, then apply a user action and print the cookies written
    Action {
        /// The control the visitor activates
        #[arg(value_enum)]
        action: ActionKind,

        #[command(flatten)]
        visit: VisitArgs,
    },

    /// Print the default configuration
    Defaults {
        /// Visitor language used to derive the store language (e.g. en-US)
        #[arg(short, long, default_value = "")]
        language: String,
    },
}

/// A simulated page visit.
#[derive(Args, Debug, Clone)]
pub struct VisitArgs {
    /// User-agent string of the visiting device
    #[arg(short = 'u', long, env = "SMARTBANNER_USER_AGENT")]
    pub user_agent: String,

    /// Banner configuration file (.toml or .json)
    #[arg(short, long, env = "SMARTBANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Visitor language (e.g. en-US)
    #[arg(short, long, default_value = "")]
    pub language: String,

    /// Simulate running as an installed standalone app
    #[arg(long)]
    pub standalone: bool,

    /// Existing cookie (NAME=VALUE). Repeatable.
    #[arg(long = "cookie", value_name = "NAME=VALUE")]
    pub cookies: Vec<String>,

    /// `<link rel>` tag in the document head (REL=HREF). Repeatable.
    #[arg(long = "link", value_name = "REL=HREF")]
    pub links: Vec<String>,

    /// Simulate a script running before the body exists
    #[arg(long)]
    pub no_body: bool,
}

/// User action on the banner.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The close control
    Close,
    /// The install/open control
    Install,
}
