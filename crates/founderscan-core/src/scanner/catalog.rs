//! Every check the scanner can emit, with its static category and impact tiers.
//!
//! Check modules build results exclusively through these definitions, so
//! severity ordering never depends on the scanned data.

use super::{Category, CheckResult, Impact};
use Category::{Compliance, Performance, Security, Seo};
use Impact::{Critical, High, Low, Medium};

/// Static definition of a single named check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDef {
    pub name: &'static str,
    pub category: Category,
    /// Tier for a pass and for an absent element.
    pub impact: Impact,
    /// Tier for an element that exists but is out of range.
    pub partial_impact: Impact,
}

impl CheckDef {
    const fn new(name: &'static str, category: Category, impact: Impact) -> Self {
        Self {
            name,
            category,
            impact,
            partial_impact: impact,
        }
    }

    const fn with_partial(self, partial_impact: Impact) -> Self {
        Self {
            partial_impact,
            ..self
        }
    }

    fn result(&self, passed: bool, impact: Impact) -> CheckResult {
        CheckResult {
            name: self.name,
            passed,
            impact,
            category: self.category,
            detail: None,
        }
    }

    pub fn outcome(&self, passed: bool) -> CheckResult {
        self.result(passed, self.impact)
    }

    pub fn pass(&self) -> CheckResult {
        self.outcome(true)
    }

    pub fn fail(&self) -> CheckResult {
        self.outcome(false)
    }

    /// Failure for an element that is present but malformed.
    pub fn partial(&self) -> CheckResult {
        self.result(false, self.partial_impact)
    }
}

pub const HSTS: CheckDef = CheckDef::new("HSTS", Security, High);
pub const CONTENT_TYPE_OPTIONS: CheckDef = CheckDef::new("X-Content-Type-Options", Security, Medium);
pub const FRAME_OPTIONS: CheckDef = CheckDef::new("X-Frame-Options", Security, Medium);
pub const CSP: CheckDef = CheckDef::new("CSP", Security, High);
pub const REFERRER_POLICY: CheckDef = CheckDef::new("Referrer-Policy", Security, Low);
pub const PERMISSIONS_POLICY: CheckDef = CheckDef::new("Permissions-Policy", Security, Low);
pub const HTTPS: CheckDef = CheckDef::new("HTTPS/SSL", Security, Critical);
pub const MIXED_CONTENT: CheckDef = CheckDef::new("No mixed content", Security, High);

/// Response header (lowercase) whose presence satisfies each header check.
pub const SECURITY_HEADERS: [(&str, CheckDef); 6] = [
    ("strict-transport-security", HSTS),
    ("x-content-type-options", CONTENT_TYPE_OPTIONS),
    ("x-frame-options", FRAME_OPTIONS),
    ("content-security-policy", CSP),
    ("referrer-policy", REFERRER_POLICY),
    ("permissions-policy", PERMISSIONS_POLICY),
];

pub const TITLE: CheckDef = CheckDef::new("Title tag", Seo, Critical).with_partial(High);
pub const META_DESCRIPTION: CheckDef =
    CheckDef::new("Meta description", Seo, High).with_partial(Medium);
pub const H1: CheckDef = CheckDef::new("H1 tag", Seo, Critical).with_partial(High);
pub const CANONICAL: CheckDef = CheckDef::new("Canonical tag", Seo, High);
pub const SCHEMA: CheckDef = CheckDef::new("Schema markup", Seo, High);
pub const OPEN_GRAPH: CheckDef = CheckDef::new("Open Graph tags", Seo, Medium);
pub const ROBOTS_TXT: CheckDef = CheckDef::new("robots.txt", Seo, Medium);
pub const SITEMAP_XML: CheckDef = CheckDef::new("sitemap.xml", Seo, High);

pub const LOAD_UNDER_2S: CheckDef = CheckDef::new("Load time (<2s)", Performance, High);
pub const LOAD_UNDER_3S: CheckDef = CheckDef::new("Load time (<3s)", Performance, Critical);
pub const VIEWPORT: CheckDef = CheckDef::new("Mobile viewport", Performance, High);
pub const IMAGE_ALT: CheckDef = CheckDef::new("Image alt text", Performance, Medium);
pub const NOT_BLOATED: CheckDef = CheckDef::new("HTML not bloated", Performance, Low);

pub const PRIVACY_POLICY: CheckDef = CheckDef::new("Privacy policy", Compliance, High);
pub const COOKIE_NOTICE: CheckDef = CheckDef::new("Cookie notice", Compliance, Medium);
pub const TERMS: CheckDef = CheckDef::new("Terms of service", Compliance, Medium);
pub const CONTACT: CheckDef = CheckDef::new("Contact info", Compliance, Low);

pub static ALL: [CheckDef; 25] = [
    HSTS,
    CONTENT_TYPE_OPTIONS,
    FRAME_OPTIONS,
    CSP,
    REFERRER_POLICY,
    PERMISSIONS_POLICY,
    HTTPS,
    MIXED_CONTENT,
    TITLE,
    META_DESCRIPTION,
    H1,
    CANONICAL,
    SCHEMA,
    OPEN_GRAPH,
    ROBOTS_TXT,
    SITEMAP_XML,
    LOAD_UNDER_2S,
    LOAD_UNDER_3S,
    VIEWPORT,
    IMAGE_ALT,
    NOT_BLOATED,
    PRIVACY_POLICY,
    COOKIE_NOTICE,
    TERMS,
    CONTACT,
];
