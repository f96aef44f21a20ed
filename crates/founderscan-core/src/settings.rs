use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_USER_AGENT: &str = "FounderScan/1.0 (https://founderscan.dev)";

/// Network tunables for a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSettings {
    pub user_agent: String,
    /// Timeout for the page fetch; expiry aborts the scan.
    pub timeout_secs: u64,
    /// Timeout for the `robots.txt` / `sitemap.xml` probes; expiry fails the check.
    pub probe_timeout_secs: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 12,
            probe_timeout_secs: 8,
        }
    }
}

impl ScanSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
