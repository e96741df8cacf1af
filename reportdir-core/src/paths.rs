use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Directory directly under the root that holds every skill's reports.
pub const REPORTS_DIR: &str = "Claude";
pub const DATA_DIR: &str = "data";
pub const ASSETS_DIR: &str = "assets";
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Formats `date` as an 8 digit, zero-padded `YYYYMMDD` stamp.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use reportdir_core::paths::date_stamp;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(date_stamp(date), "20240307");
/// ```
pub fn date_stamp(date: NaiveDate) -> String {
    date.format(DATE_STAMP_FORMAT).to_string()
}

/// `{root}/Claude/{skill_name}/{YYYYMMDD}`
pub fn base_dir(root: &Path, skill_name: &str, date: NaiveDate) -> PathBuf {
    root.join(REPORTS_DIR)
        .join(skill_name)
        .join(date_stamp(date))
}

pub fn data_dir(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

pub fn assets_dir(base: &Path) -> PathBuf {
    base.join(ASSETS_DIR)
}
