use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument, warn};

use super::{
    checks::{self, infra},
    AuxiliaryProbes, ScanContext, ScanReport, Scanner, VerdictThresholds,
};
use crate::{fetch::PageFetcher, target::Target};

/// Scanner that fetches the page, runs every check module and scores the result.
pub struct DefaultScanner<F: PageFetcher> {
    fetcher: Arc<F>,
    thresholds: VerdictThresholds,
}

impl<F: PageFetcher> DefaultScanner<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self::with_thresholds(fetcher, VerdictThresholds::default())
    }

    pub fn with_thresholds(fetcher: Arc<F>, thresholds: VerdictThresholds) -> Self {
        Self {
            fetcher,
            thresholds,
        }
    }

    /// True only for an HTTP 200; errors and timeouts collapse into `false`.
    async fn probe(&self, url: &str) -> bool {
        match self.fetcher.probe(url).await {
            Ok(status) => {
                debug!(url, status, "auxiliary probe");
                status == 200
            }
            Err(err) => {
                warn!(url, error = %err, "auxiliary probe failed");
                false
            }
        }
    }

    async fn probe_all(&self, target: &Target) -> AuxiliaryProbes {
        let robots_txt = self.probe(&target.url_for(infra::ROBOTS_PATH)).await;
        let sitemap_xml = self.probe(&target.url_for(infra::SITEMAP_PATH)).await;
        AuxiliaryProbes {
            robots_txt,
            sitemap_xml,
        }
    }
}

#[async_trait::async_trait]
impl<F> Scanner for DefaultScanner<F>
where
    F: PageFetcher + 'static,
{
    #[instrument(name = "scan_site", skip(self, target), fields(domain = %target.domain()))]
    async fn scan(&self, target: &Target) -> Result<ScanReport> {
        let page = self.fetcher.fetch(target.base_url()).await?;
        let ctx = ScanContext::from_page(target.domain(), page);
        let probes = self.probe_all(target).await;

        let checks = checks::run_all(&ctx, &probes);
        let report = ScanReport::from_checks(ctx.domain, ctx.load_time, checks, &self.thresholds);
        debug!(
            checks = report.total(),
            passed = report.passed_count(),
            score = report.score,
            verdict = ?report.verdict,
            "scan completed"
        );
        Ok(report)
    }
}
