//! Path utilities: expand ~, derive sibling files of the data file.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `dir/tasklog.csv` + `.backup.csv` -> `dir/tasklog.backup.csv`
pub fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "worklog".to_string());
    path.with_file_name(format!("{stem}{suffix}"))
}
