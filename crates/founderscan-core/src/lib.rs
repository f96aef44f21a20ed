pub mod fetch;
pub mod report;
pub mod scanner;
pub mod settings;
pub mod target;

pub use fetch::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use report::{render_report, RenderOptions};
pub use scanner::{
    catalog::CheckDef, default_scanner::DefaultScanner, AuxiliaryProbes, Category, CategoryScore,
    CheckResult, CheckSet, Impact, ScanContext, ScanReport, Scanner, Verdict, VerdictThresholds,
};
pub use settings::ScanSettings;
pub use target::{Target, TargetError};
