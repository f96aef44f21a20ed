use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::scanner::{Category, CheckResult, Impact, ScanReport, Verdict};

const BANNER_WIDTH: usize = 62;
const RULE_WIDTH: usize = 55;
const BAR_SEGMENTS: u8 = 10;
const LABEL_WIDTH: usize = 22;
const PRODUCT_URL: &str = "https://founderscan.dev";

/// Presentation switches for [`render_report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI colours. Off yields plain, byte-stable text.
    pub color: bool,
}

/// Render the human-readable health report.
///
/// With `color` set, ANSI styling is emitted even when stdout is not a
/// terminal; the caller owns that decision.
pub fn render_report(report: &ScanReport, options: &RenderOptions) -> anyhow::Result<String> {
    if options.color {
        colored::control::set_override(true);
    }
    let paint = Painter {
        enabled: options.color,
    };
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);
    let divider = "─".repeat(BANNER_WIDTH);

    writeln!(out, "\n{banner}")?;
    writeln!(
        out,
        "  {}",
        paint.bold("🔬 FounderScan - Website Health Report")
    )?;
    writeln!(
        out,
        "  Site: {}   |   Load time: {:.2}s",
        report.domain, report.load_time
    )?;
    writeln!(out, "{banner}")?;

    let verdict = format!("{} {}", report.verdict.icon(), report.verdict.summary());
    writeln!(
        out,
        "\n  OVERALL SCORE: {}/100  -  {}",
        report.score,
        paint.verdict(report.verdict, &verdict)
    )?;
    writeln!(out, "\n  {}", "─".repeat(RULE_WIDTH))?;
    for category in &report.category_scores {
        writeln!(
            out,
            "  {label:<width$} [{bar}] {score}%",
            label = category.category.label(),
            width = LABEL_WIDTH,
            bar = score_bar(category.score),
            score = category.score
        )?;
    }

    let failed = report.failed();
    if !failed.is_empty() {
        writeln!(out, "\n{divider}")?;
        writeln!(
            out,
            "  {}",
            paint.bold(&format!(
                "ISSUES FOUND ({})  -  ordered by impact",
                failed.len()
            ))
        )?;
        writeln!(out, "{divider}")?;
        for category in Category::ALL {
            let in_category: Vec<_> = failed
                .iter()
                .filter(|result| result.category == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            writeln!(out, "\n  {}", category.label())?;
            for result in in_category {
                writeln!(out, "    {}", paint.failure(result))?;
            }
        }
    }

    let passed = report.passed();
    writeln!(out, "\n{divider}")?;
    writeln!(
        out,
        "  {}",
        paint.bold(&format!(
            "PASSING ({}/{})",
            passed.len(),
            report.total()
        ))
    )?;
    writeln!(out, "{divider}")?;
    for category in Category::ALL {
        let names: Vec<_> = passed
            .iter()
            .filter(|result| result.category == category)
            .map(|result| result.name)
            .collect();
        if !names.is_empty() {
            writeln!(out, "  {}: {}", category.label(), names.join(", "))?;
        }
    }

    writeln!(out, "\n{banner}")?;
    writeln!(out, "  📊 Get the full FounderScan report:")?;
    writeln!(out, "  Detailed fixes, priority order, compliance checklist,")?;
    writeln!(out, "  performance recommendations & PDF export:")?;
    writeln!(out, "  👉  {PRODUCT_URL}")?;
    writeln!(out, "{banner}")?;

    Ok(out)
}

/// Ten-segment bar, filled in whole 10% steps (rounded down).
pub fn score_bar(score: u8) -> String {
    let filled = (score.min(100) / BAR_SEGMENTS) as usize;
    let empty = BAR_SEGMENTS as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn failure_line(result: &CheckResult) -> String {
    let detail = result
        .detail
        .as_deref()
        .map(|detail| format!("  ({detail})"))
        .unwrap_or_default();
    format!("{} {}{}", result.impact.icon(), result.name, detail)
}

struct Painter {
    enabled: bool,
}

impl Painter {
    fn apply(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.apply(text, |t| t.bold())
    }

    fn verdict(&self, verdict: Verdict, text: &str) -> String {
        self.apply(text, |t| match verdict {
            Verdict::Excellent => t.green().bold(),
            Verdict::Good => t.yellow().bold(),
            Verdict::NeedsWork => t.bright_red().bold(),
            Verdict::Critical => t.red().bold(),
        })
    }

    fn failure(&self, result: &CheckResult) -> String {
        let line = failure_line(result);
        self.apply(&line, |t| match result.impact {
            Impact::Critical => t.red(),
            Impact::High => t.bright_red(),
            Impact::Medium => t.yellow(),
            Impact::Low => t.normal(),
        })
    }
}
