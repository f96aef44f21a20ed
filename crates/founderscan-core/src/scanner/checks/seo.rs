use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{preview, strip_tags};
use crate::scanner::{catalog, CheckResult, CheckSet};

pub const TITLE_CHARS: RangeInclusive<usize> = 30..=60;
pub const DESCRIPTION_CHARS: RangeInclusive<usize> = 70..=160;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));
static META_DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+name=["']description["'][^>]+content=["']([^"']*)["']"#)
        .expect("valid meta description regex")
});
static H1_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid h1 regex"));
static CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)rel=["']canonical["']"#).expect("valid canonical regex"));

/// Title, description, heading and structured-data checks on the page body.
pub fn check_seo(body: &str) -> CheckSet {
    let lowered = body.to_lowercase();
    let mut results = CheckSet::new();
    results.insert(title_check(body));
    results.insert(description_check(body));
    results.insert(h1_check(body));
    results.insert(catalog::CANONICAL.outcome(CANONICAL_RE.is_match(body)));
    results.insert(catalog::SCHEMA.outcome(body.contains("application/ld+json")));
    results.insert(catalog::OPEN_GRAPH.outcome(
        lowered.contains(r#"property="og:title""#) || lowered.contains("property='og:title'"),
    ));
    results
}

/// Text of the first `<title>` element with nested tags removed.
pub fn extract_title(body: &str) -> Option<String> {
    TITLE_RE
        .captures(body)
        .map(|caps| strip_tags(&caps[1]))
        .filter(|title| !title.is_empty())
}

pub fn extract_description(body: &str) -> Option<String> {
    META_DESCRIPTION_RE
        .captures(body)
        .map(|caps| caps[1].to_string())
        .filter(|desc| !desc.is_empty())
}

/// Text of every `<h1>` element, tags stripped.
pub fn extract_h1s(body: &str) -> Vec<String> {
    H1_RE
        .captures_iter(body)
        .map(|caps| strip_tags(&caps[1]))
        .collect()
}

fn title_check(body: &str) -> CheckResult {
    let def = catalog::TITLE;
    let Some(title) = extract_title(body) else {
        return def.fail().with_detail("Missing");
    };
    let len = title.chars().count();
    if TITLE_CHARS.contains(&len) {
        def.pass().with_detail(preview(&title))
    } else {
        def.partial().with_detail(format!(
            "{len} chars (target: {}-{})",
            TITLE_CHARS.start(),
            TITLE_CHARS.end()
        ))
    }
}

fn description_check(body: &str) -> CheckResult {
    let def = catalog::META_DESCRIPTION;
    let Some(desc) = extract_description(body) else {
        return def.fail().with_detail("Missing");
    };
    let len = desc.chars().count();
    if DESCRIPTION_CHARS.contains(&len) {
        def.pass().with_detail(format!("{len} chars ✓"))
    } else {
        def.partial().with_detail(format!(
            "{len} chars (target: {}-{})",
            DESCRIPTION_CHARS.start(),
            DESCRIPTION_CHARS.end()
        ))
    }
}

fn h1_check(body: &str) -> CheckResult {
    let def = catalog::H1;
    match extract_h1s(body).as_slice() {
        [] => def.fail().with_detail("Missing"),
        [only] => def.pass().with_detail(preview(only)),
        many => def
            .partial()
            .with_detail(format!("{} H1s found (should be 1)", many.len())),
    }
}
