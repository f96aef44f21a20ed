use crate::scanner::{catalog, AuxiliaryProbes, CheckSet};

pub const ROBOTS_PATH: &str = "/robots.txt";
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// `robots.txt` and `sitemap.xml` presence. A probe that failed for any reason
/// reads the same as a missing file.
pub fn check_infra(probes: &AuxiliaryProbes) -> CheckSet {
    [
        catalog::ROBOTS_TXT.outcome(probes.robots_txt),
        catalog::SITEMAP_XML.outcome(probes.sitemap_xml),
    ]
    .into_iter()
    .collect()
}
