//! Stateless check modules. Each takes slices of the fetched page and returns
//! a [`CheckSet`]; none of them can fail.
//!
//! Markup is inspected with regular expressions over the raw text rather than a
//! parsed DOM, so nested or malformed markup can be misread.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::{AuxiliaryProbes, CheckSet, ScanContext};

pub mod compliance;
pub mod infra;
pub mod performance;
pub mod security;
pub mod seo;

/// Number of characters kept when a check echoes page text back as detail.
pub(crate) const PREVIEW_CHARS: usize = 50;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Remove anything that looks like a tag and trim surrounding whitespace.
pub(crate) fn strip_tags(fragment: &str) -> String {
    TAG_RE.replace_all(fragment, "").trim().to_string()
}

pub(crate) fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Run every check module against the page and merge their results.
pub fn run_all(ctx: &ScanContext, probes: &AuxiliaryProbes) -> CheckSet {
    let mut checks = CheckSet::new();
    for (module, set) in [
        (
            "security",
            security::check_security(&ctx.url, &ctx.body, &ctx.headers),
        ),
        ("seo", seo::check_seo(&ctx.body)),
        (
            "performance",
            performance::check_performance(ctx.load_time, &ctx.body),
        ),
        ("compliance", compliance::check_compliance(&ctx.body)),
        ("infra", infra::check_infra(probes)),
    ] {
        trace!(module, count = set.len(), passed = set.passed_count(), "check module finished");
        checks.merge(set);
    }
    checks
}
