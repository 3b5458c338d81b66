//! User-agent parsing.
//!
//! Only the operating system is extracted; that is all the banner needs.
//! Rules are tried in order and the first match wins, so more specific
//! agents (Windows Phone pretends to be Android and iPhone) come first.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Operating system recognised in a user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    /// OS name ("iOS", "Android", "Windows Phone", "Mac OS", "Windows", "Linux")
    pub name: Option<String>,
    /// Dotted version string, when the agent carries one
    pub version: Option<String>,
}

/// A parsed user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedAgent {
    /// The raw agent string
    pub ua: String,
    /// Recognised operating system
    pub os: OsInfo,
}

struct OsRule {
    name: &'static str,
    pattern: Regex,
}

static OS_RULES: LazyLock<Vec<OsRule>> = LazyLock::new(|| {
    let rule = |name, pattern: &str| OsRule {
        name,
        pattern: Regex::new(pattern).expect("valid OS pattern"),
    };
    vec![
        rule("Windows Phone", r"(?i)windows phone(?: os)?[\s/]?([\d.]+)?"),
        rule("iOS", r"(?i)(?:iphone|ipod|ipad).*?\bos ([\d_]+)"),
        rule("iOS", r"(?i)\b(?:iphone|ipod|ipad)\b()"),
        rule("Android", r"(?i)\bandroid[-\s/]?([\d.]*)"),
        rule("Mac OS", r"(?i)mac os x ?([\d_.]*)"),
        rule("Windows", r"(?i)windows nt ([\d.]+)"),
        rule("Linux", r"(?i)\blinux\b()"),
    ]
});

impl ParsedAgent {
    /// Parse a user-agent string.
    pub fn parse(ua: &str) -> Self {
        let os = OS_RULES
            .iter()
            .find_map(|rule| {
                rule.pattern.captures(ua).map(|caps| OsInfo {
                    name: Some(rule.name.to_string()),
                    version: caps
                        .get(1)
                        .map(|m| m.as_str().replace('_', "."))
                        .filter(|v| !v.is_empty()),
                })
            })
            .unwrap_or_default();

        Self {
            ua: ua.to_string(),
            os,
        }
    }

    /// Recognised OS name, if any.
    pub fn os_name(&self) -> Option<&str> {
        self.os.name.as_deref()
    }
}
