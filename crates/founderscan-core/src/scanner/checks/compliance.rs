use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::scanner::{catalog, catalog::CheckDef, CheckSet};

/// Lowercase substrings, any one of which satisfies the check.
pub const TRIGGERS: [(CheckDef, &[&str]); 4] = [
    (
        catalog::PRIVACY_POLICY,
        &[
            "privacy policy",
            "privacy-policy",
            "/privacy",
            "gdpr",
            "data protection",
        ],
    ),
    (
        catalog::COOKIE_NOTICE,
        &["cookie", "consent", "gdpr", "we use cookies"],
    ),
    (
        catalog::TERMS,
        &[
            "terms of service",
            "terms and conditions",
            "/terms",
            "terms of use",
        ],
    ),
    // "@" alone satisfies this, so nearly every page passes.
    (catalog::CONTACT, &["contact", "email", "@", "mailto:"]),
];

static AUTOMATA: Lazy<Vec<(CheckDef, AhoCorasick)>> = Lazy::new(|| {
    TRIGGERS
        .iter()
        .map(|(def, patterns)| {
            let automaton =
                AhoCorasick::new(patterns.iter()).expect("compliance triggers are valid patterns");
            (*def, automaton)
        })
        .collect()
});

/// Privacy, cookie, terms and contact disclosures anywhere in the body.
pub fn check_compliance(body: &str) -> CheckSet {
    let lowered = body.to_lowercase();
    AUTOMATA
        .iter()
        .map(|(def, automaton)| def.outcome(automaton.is_match(&lowered)))
        .collect()
}
