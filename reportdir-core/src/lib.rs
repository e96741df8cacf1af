pub mod config;
pub mod paths;
pub mod report;

#[cfg(test)]
#[path = "tests/common.rs"]
mod tests;

pub use config::Config;
pub use report::{
    DEFAULT_SKILL_NAME,
    ReportPaths,
    create_report_structure,
    create_report_structure_on,
};
