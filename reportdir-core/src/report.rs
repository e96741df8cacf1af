//! Creation of the dated `Claude/<skill>/<YYYYMMDD>` report directory tree.

use crate::paths::{assets_dir, base_dir, data_dir, date_stamp};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Skill name used when the caller does not provide one.
pub const DEFAULT_SKILL_NAME: &str = "Update";

/// Paths of one report structure, as created by [`create_report_structure`].
///
/// `data` and `assets` are always direct children of `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub base: PathBuf,
    pub data: PathBuf,
    pub assets: PathBuf,
    pub date_stamp: String,
}

impl fmt::Display for ReportPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[OK] Created report structure:")?;
        writeln!(f, "   Base: {}", self.base.display())?;
        writeln!(f, "   Data: {}", self.data.display())?;
        write!(f, "   Assets: {}", self.assets.display())
    }
}

/// Creates (or verifies) today's report structure for `skill_name` under `base_root`.
///
/// The local date is read on every call, so calls on either side of midnight
/// land in different `{YYYYMMDD}` directories.
pub fn create_report_structure(skill_name: &str, base_root: &Path) -> Result<ReportPaths> {
    create_report_structure_on(skill_name, base_root, Local::now().date_naive())
}

/// Same as [`create_report_structure`], for an explicit `date`.
///
/// - Ensures `{root}/Claude/{skill_name}/{YYYYMMDD}/` exists, ancestors included.
/// - Ensures `data/` and `assets/` exist directly under it.
///
/// Existing directories are left untouched. The first failure aborts the call
/// and directories created before it are kept.
///
/// Nothing is printed here; the confirmation block is the `Display` of the returned [`ReportPaths`].
pub fn create_report_structure_on(
    skill_name: &str,
    base_root: &Path,
    date: NaiveDate,
) -> Result<ReportPaths> {
    let base = base_dir(base_root, skill_name, date);
    let data = data_dir(&base);
    let assets = assets_dir(&base);

    fs::create_dir_all(&base).with_context(|| format!("creating {}", base.display()))?;
    debug!(path = %base.display(), "base directory ready");
    ensure_dir(&data)?;
    ensure_dir(&assets)?;

    let paths = ReportPaths {
        base,
        data,
        assets,
        date_stamp: date_stamp(date),
    };
    info!(
        base = %paths.base.display(),
        date_stamp = %paths.date_stamp,
        "report structure ready"
    );
    Ok(paths)
}

/// Single-level create-if-absent. Losing a creation race to another process is fine,
/// finding something other than a directory is not.
fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {}
        Err(e) => return Err(e).with_context(|| format!("creating {}", path.display())),
    }
    debug!(path = %path.display(), "directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{anchor_date, mk_config};
    use regex::Regex;
    use tempfile::tempdir;

    fn mk_root() -> (PathBuf, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("reports"));
        (config.root, tmp)
    }

    #[test]
    fn creates_base_data_and_assets() {
        let (root, _tmp) = mk_root();
        let paths = create_report_structure_on("Analysis", &root, anchor_date()).unwrap();

        assert_eq!(paths.base, root.join("Claude").join("Analysis").join("20240307"));
        assert_eq!(paths.data, paths.base.join("data"));
        assert_eq!(paths.assets, paths.base.join("assets"));
        assert_eq!(paths.date_stamp, "20240307");
        assert!(paths.base.is_dir());
        assert!(paths.data.is_dir());
        assert!(paths.assets.is_dir());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let (root, _tmp) = mk_root();
        let first = create_report_structure_on("Update", &root, anchor_date()).unwrap();
        let marker = first.data.join("keep.csv");
        fs::write(&marker, "a,b\n").unwrap();

        let second = create_report_structure_on("Update", &root, anchor_date()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&marker).unwrap(), "a,b\n");
        let mut children: Vec<_> = fs::read_dir(&second.base)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        children.sort();
        assert_eq!(children, ["assets", "data"]);
    }

    #[test]
    fn different_dates_get_different_bases() {
        let (root, _tmp) = mk_root();
        let day = anchor_date();
        let next = day.succ_opt().unwrap();
        let a = create_report_structure_on("Update", &root, day).unwrap();
        let b = create_report_structure_on("Update", &root, next).unwrap();
        assert_ne!(a.base, b.base);
        assert_eq!(a.base.parent(), b.base.parent());
        assert_eq!(b.date_stamp, "20240308");
    }

    #[test]
    fn today_uses_local_date_stamp() {
        let (root, _tmp) = mk_root();
        let paths = create_report_structure(DEFAULT_SKILL_NAME, &root).unwrap();

        let re = Regex::new(r"^[0-9]{8}$").unwrap();
        assert!(re.is_match(&paths.date_stamp));
        assert_eq!(
            paths.date_stamp,
            Local::now().date_naive().format("%Y%m%d").to_string()
        );
        assert!(paths.base.ends_with(Path::new("Claude/Update").join(&paths.date_stamp)));
    }

    #[test]
    fn root_that_is_a_file_fails_without_creating_anything() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("not-a-dir");
        fs::write(&root, "").unwrap();

        let err = create_report_structure_on("Analysis", &root, anchor_date()).unwrap_err();

        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert!(format!("{err:#}").contains("creating"));
        assert!(root.is_file());
    }

    #[test]
    fn file_in_place_of_data_dir_fails() {
        let (root, _tmp) = mk_root();
        let base = base_dir(&root, "Analysis", anchor_date());
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("data"), "").unwrap();

        let err = create_report_structure_on("Analysis", &root, anchor_date()).unwrap_err();

        assert!(format!("{err:#}").contains("data"));
        assert!(!base.join("assets").exists());
    }

    #[test]
    fn display_lists_the_three_paths() {
        let (root, _tmp) = mk_root();
        let paths = create_report_structure_on("Analysis", &root, anchor_date()).unwrap();
        let text = paths.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[OK] Created report structure:");
        assert_eq!(lines[1], format!("   Base: {}", paths.base.display()));
        assert_eq!(lines[2], format!("   Data: {}", paths.data.display()));
        assert_eq!(lines[3], format!("   Assets: {}", paths.assets.display()));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn serializes_as_label_to_path_mapping() {
        let paths = ReportPaths {
            base: PathBuf::from("/t/Claude/Analysis/20240307"),
            data: PathBuf::from("/t/Claude/Analysis/20240307/data"),
            assets: PathBuf::from("/t/Claude/Analysis/20240307/assets"),
            date_stamp: "20240307".to_string(),
        };
        let json = serde_json::to_value(&paths).unwrap();
        assert_eq!(json["base"], "/t/Claude/Analysis/20240307");
        assert_eq!(json["data"], "/t/Claude/Analysis/20240307/data");
        assert_eq!(json["assets"], "/t/Claude/Analysis/20240307/assets");
        assert_eq!(json["date_stamp"], "20240307");
    }
}
