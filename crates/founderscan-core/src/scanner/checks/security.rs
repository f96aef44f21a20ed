use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header::HeaderMap, Url};

use crate::scanner::{catalog, CheckSet};

/// Opening of a `<script>` tag loading from plain http, up to and including `http://`.
static HTTP_SCRIPT_SRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<script[^>]*src=["']http://"#).expect("valid script src regex")
});

/// Header presence, HTTPS and mixed-content checks.
pub fn check_security(url: &Url, body: &str, headers: &HeaderMap) -> CheckSet {
    let mut results: CheckSet = catalog::SECURITY_HEADERS
        .iter()
        .map(|(header, def)| def.outcome(headers.contains_key(*header)))
        .collect();

    results.insert(catalog::HTTPS.outcome(url.scheme() == "https"));
    results.insert(catalog::MIXED_CONTENT.outcome(!has_mixed_content(body)));
    results
}

/// True if `http://` survives once plain-http script sources are discounted.
///
/// Any mention of `http://`, including visible text, counts.
pub fn has_mixed_content(body: &str) -> bool {
    HTTP_SCRIPT_SRC_RE
        .replace_all(body, "")
        .contains("http://")
}
