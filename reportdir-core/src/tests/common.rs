use crate::Config;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Test helper to create a `Config` rooted at a temporary directory.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(root: PathBuf) -> Config {
    Config { root }
}

/// Fixed date used by tests that need a predictable date stamp.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date")
}
