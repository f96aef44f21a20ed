use std::collections::BTreeMap;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Url};
use serde::{Deserialize, Serialize};

use crate::{fetch::FetchedPage, target::Target};

pub mod catalog;
pub mod checks;
pub mod default_scanner;

/// Static severity tier attached to a check definition.
///
/// Variants are declared most severe first so the derived `Ord` ranks
/// `Critical` ahead of `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
}

impl Impact {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

/// Grouping used for per-category scores and report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Security,
    Seo,
    Performance,
    Compliance,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 4] = [
        Category::Security,
        Category::Seo,
        Category::Performance,
        Category::Compliance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Seo => "seo",
            Self::Performance => "performance",
            Self::Compliance => "compliance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Security => "🔒 SECURITY",
            Self::Seo => "🔍 SEO",
            Self::Performance => "⚡ PERFORMANCE",
            Self::Compliance => "📋 COMPLIANCE",
        }
    }
}

/// Outcome of evaluating one named check against the fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub impact: Impact,
    pub category: Category,
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Check results keyed by name. Inserting a name twice keeps the later result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckSet(BTreeMap<&'static str, CheckResult>);

impl CheckSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, returning the one it replaced if the name was taken.
    pub fn insert(&mut self, result: CheckResult) -> Option<CheckResult> {
        self.0.insert(result.name, result)
    }

    pub fn merge(&mut self, other: CheckSet) {
        self.0.extend(other.0);
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.0.values()
    }

    pub fn passed_count(&self) -> usize {
        self.iter().filter(|result| result.passed).count()
    }
}

impl Extend<CheckResult> for CheckSet {
    fn extend<I: IntoIterator<Item = CheckResult>>(&mut self, iter: I) {
        for result in iter {
            self.insert(result);
        }
    }
}

impl FromIterator<CheckResult> for CheckSet {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// The fetched artifact every check module reads from.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Final URL after redirects.
    pub url: Url,
    pub domain: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
    /// Seconds until the response headers arrived, rounded to hundredths.
    pub load_time: f64,
}

impl ScanContext {
    pub fn from_page(domain: impl Into<String>, page: FetchedPage) -> Self {
        Self {
            url: page.url,
            domain: domain.into(),
            status: page.status,
            headers: page.headers,
            body: page.body,
            load_time: checks::performance::round_load_time(page.elapsed.as_secs_f64()),
        }
    }
}

/// Outcome of the best-effort `robots.txt` / `sitemap.xml` probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuxiliaryProbes {
    pub robots_txt: bool,
    pub sitemap_xml: bool,
}

/// Lower bounds (inclusive) of each verdict band.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictThresholds {
    pub excellent: u8,
    pub good: u8,
    pub needs_work: u8,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 65,
            needs_work: 45,
        }
    }
}

/// Coarse classification of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    NeedsWork,
    Critical,
}

impl Verdict {
    /// Map a 0–100 score into a verdict using the default bands.
    pub fn from_score(score: u8) -> Self {
        Self::from_score_with_thresholds(score, &VerdictThresholds::default())
    }

    pub fn from_score_with_thresholds(score: u8, thresholds: &VerdictThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.needs_work {
            Self::NeedsWork
        } else {
            Self::Critical
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "🟢",
            Self::Good => "🟡",
            Self::NeedsWork => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - well-built site",
            Self::Good => "Good - a few things to fix",
            Self::NeedsWork => "Needs work - multiple issues detected",
            Self::Critical => "Critical - significant problems found",
        }
    }
}

/// Integer percentage `round(100 * passed / total)`; zero when there is nothing to count.
pub fn percentage(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (passed as f64 * 100.0 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub passed: usize,
    pub total: usize,
    pub score: u8,
}

/// Aggregate of one scan: every check plus the derived scores.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub domain: String,
    pub load_time: f64,
    pub checks: CheckSet,
    pub score: u8,
    pub verdict: Verdict,
    /// Only categories with at least one check, in [`Category::ALL`] order.
    pub category_scores: Vec<CategoryScore>,
}

impl ScanReport {
    pub fn from_checks(
        domain: impl Into<String>,
        load_time: f64,
        checks: CheckSet,
        thresholds: &VerdictThresholds,
    ) -> Self {
        let score = percentage(checks.passed_count(), checks.len());
        let category_scores = Category::ALL
            .iter()
            .filter_map(|&category| {
                let (passed, total) = checks
                    .iter()
                    .filter(|result| result.category == category)
                    .fold((0, 0), |(passed, total), result| {
                        (passed + usize::from(result.passed), total + 1)
                    });
                (total > 0).then(|| CategoryScore {
                    category,
                    passed,
                    total,
                    score: percentage(passed, total),
                })
            })
            .collect();
        Self {
            domain: domain.into(),
            load_time,
            verdict: Verdict::from_score_with_thresholds(score, thresholds),
            score,
            checks,
            category_scores,
        }
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn passed_count(&self) -> usize {
        self.checks.passed_count()
    }

    /// Failed checks by category, most severe first within each category.
    pub fn failed(&self) -> Vec<&CheckResult> {
        let mut failed: Vec<_> = self.checks.iter().filter(|r| !r.passed).collect();
        failed.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.impact.cmp(&b.impact))
                .then_with(|| a.name.cmp(b.name))
        });
        failed
    }

    /// Passed checks by category, then by name.
    pub fn passed(&self) -> Vec<&CheckResult> {
        let mut passed: Vec<_> = self.checks.iter().filter(|r| r.passed).collect();
        passed.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(b.name)));
        passed
    }
}

/// Runs the full fetch, check and score pipeline for a target.
#[async_trait]
pub trait Scanner: Send + Sync {
    async fn scan(&self, target: &Target) -> AnyResult<ScanReport>;
}
