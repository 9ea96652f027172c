// src/report.rs
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Label used for files whose name carries no extension.
pub const NO_EXTENSION: &str = "[no extension]";

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB"];

/// One summary row of the report: an extension key, how many files carry it,
/// and their formatted total size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub file_type: String,
    pub count: usize,
    pub total_size: String,
}

/// Group paths by lowercased extension and compute per-group count and total
/// size. Rows come out in the order extensions were first seen.
///
/// Sizes are read here, not cached from traversal time; a file that vanished
/// between the walk and this pass surfaces as [`ReportError::FileSize`] and
/// aborts the run.
pub fn aggregate<I>(paths: I) -> Result<Vec<ReportRow>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut groups: IndexMap<String, (usize, u64)> = IndexMap::new();

    for path in paths {
        let size = std::fs::metadata(&path)
            .map_err(|source| ReportError::FileSize {
                path: path.clone(),
                source,
            })?
            .len();
        let entry = groups.entry(extension_key(&path)).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += size;
    }

    log::debug!("aggregated {} extension groups", groups.len());

    Ok(groups
        .into_iter()
        .map(|(file_type, (count, bytes))| ReportRow {
            file_type,
            count,
            total_size: format_size(bytes),
        })
        .collect())
}

/// Lowercased suffix of the file name from its last `.` onwards, dot
/// included. Names without a dot, or ending in one, map to the
/// `[no extension]` sentinel; a leading dot counts (`.gitignore` is its own
/// extension).
pub fn extension_key(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => name[pos..].to_lowercase(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Human readable byte size: largest unit keeping at least one integer
/// digit, scaling by 1000 per step, at most two decimals with trailing
/// zeros trimmed. The decimal scaling behind binary-looking unit names is
/// deliberate and kept for report compatibility.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let mut formatted = format!("{value:.2}");
    if formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.').len();
        formatted.truncate(trimmed);
    }
    format!("{} {}", formatted, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn format_size_boundaries() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1 KB");
        assert_eq!(format_size(1023), "1.02 KB");
        assert_eq!(format_size(2000), "2 KB");
        assert_eq!(format_size(3_955_623), "3.96 MB");
        assert_eq!(format_size(1_000_000_000_000), "1 TB");
    }

    #[test]
    fn format_size_trims_trailing_zeros() {
        assert_eq!(format_size(1100), "1.1 KB");
        assert_eq!(format_size(1500), "1.5 KB");
        assert_eq!(format_size(10), "10 B");
    }

    #[test]
    fn format_size_caps_at_largest_unit() {
        // u64::MAX is ~18.4 EB; the table still caps rather than overflowing.
        assert_eq!(format_size(u64::MAX), "18.45 EB");
    }

    #[test]
    fn extension_key_variants() {
        assert_eq!(extension_key(Path::new("a.txt")), ".txt");
        assert_eq!(extension_key(Path::new("B.TXT")), ".txt");
        assert_eq!(extension_key(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_key(Path::new(".gitignore")), ".gitignore");
        assert_eq!(extension_key(Path::new("noext")), NO_EXTENSION);
        assert_eq!(extension_key(Path::new("trailing.")), NO_EXTENSION);
        assert_eq!(extension_key(Path::new("dir/nested.RS")), ".rs");
    }

    #[test]
    fn groups_case_insensitively_and_sums_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.TXT");
        let c = dir.path().join("c");
        fs::write(&a, vec![0u8; 500]).unwrap();
        fs::write(&b, vec![0u8; 1500]).unwrap();
        fs::write(&c, vec![0u8; 10]).unwrap();

        let rows = aggregate([a, b, c]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].file_type, ".txt");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].total_size, "2 KB");
        assert_eq!(rows[1].file_type, NO_EXTENSION);
        assert_eq!(rows[1].count, 1);
        assert_eq!(rows[1].total_size, "10 B");
    }

    #[test]
    fn rows_keep_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        let names = ["z.md", "a.rs", "z2.md", "b.toml"];
        let mut paths = Vec::new();
        for name in names {
            let p = dir.path().join(name);
            fs::write(&p, "x").unwrap();
            paths.push(p);
        }

        let rows = aggregate(paths).unwrap();
        let order: Vec<&str> = rows.iter().map(|r| r.file_type.as_str()).collect();
        assert_eq!(order, [".md", ".rs", ".toml"]);
        assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), 4);
    }

    #[test]
    fn vanished_file_aborts_aggregation() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone.txt");
        let err = aggregate([gone.clone()]).unwrap_err();
        match err {
            ReportError::FileSize { path, .. } => assert_eq!(path, gone),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(aggregate(Vec::new()).unwrap().is_empty());
    }
}
