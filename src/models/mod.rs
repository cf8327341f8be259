pub mod finding;
pub mod scan;

pub use finding::{FileReport, Finding, Severity};
pub use scan::{OutputFormat, ScanConfig, WcagLevel, WcagVersion};
