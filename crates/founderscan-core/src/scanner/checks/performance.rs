use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::{catalog, CheckResult, CheckSet};

pub const FAST_LOAD_SECS: f64 = 2.0;
pub const MAX_LOAD_SECS: f64 = 3.0;
/// Indented-line count at which markup is considered bloated.
pub const BLOAT_LIMIT: usize = 50;

static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]+>").expect("valid img regex"));
static ALT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)alt=["'][^"']+["']"#).expect("valid alt regex"));
static DEEP_INDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s{10,}").expect("valid indentation regex"));

/// Seconds rounded to the two decimals the report shows.
pub fn round_load_time(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// Load-time, viewport, image alt text and markup size checks.
///
/// Thresholds compare the rounded time so the verdict matches the detail.
pub fn check_performance(load_time: f64, body: &str) -> CheckSet {
    let load_time = round_load_time(load_time);
    let timing = format!("{load_time:.2}s");
    let lowered = body.to_lowercase();

    let mut results = CheckSet::new();
    results.insert(
        catalog::LOAD_UNDER_2S
            .outcome(load_time < FAST_LOAD_SECS)
            .with_detail(timing.clone()),
    );
    results.insert(
        catalog::LOAD_UNDER_3S
            .outcome(load_time < MAX_LOAD_SECS)
            .with_detail(timing),
    );
    results.insert(catalog::VIEWPORT.outcome(
        lowered.contains(r#"name="viewport""#) || lowered.contains("name='viewport'"),
    ));
    if let Some(result) = image_alt_check(body) {
        results.insert(result);
    }
    results.insert(catalog::NOT_BLOATED.outcome(deep_indent_count(body) < BLOAT_LIMIT));
    results
}

/// `(missing_alt, total)` over every `<img>` tag in the body.
pub fn image_alt_counts(body: &str) -> (usize, usize) {
    IMG_RE.find_iter(body).fold((0, 0), |(missing, total), img| {
        let has_alt = ALT_RE.is_match(img.as_str());
        (missing + usize::from(!has_alt), total + 1)
    })
}

/// Newlines followed by ten or more whitespace characters.
pub fn deep_indent_count(body: &str) -> usize {
    DEEP_INDENT_RE.find_iter(body).count()
}

/// `None` for pages without images; the check is omitted rather than passed.
fn image_alt_check(body: &str) -> Option<CheckResult> {
    let (missing, total) = image_alt_counts(body);
    if total == 0 {
        return None;
    }
    let detail = if missing > 0 {
        format!("{missing}/{total} missing alt")
    } else {
        format!("All {total} have alt text")
    };
    Some(catalog::IMAGE_ALT.outcome(missing == 0).with_detail(detail))
}
