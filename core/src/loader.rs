use crate::error::{QaError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Only load files with this extension (without the dot). `None` loads every file.
    pub extension: Option<String>,
}

impl LoaderConfig {
    fn accepts(&self, path: &Path) -> bool {
        match &self.extension {
            Some(wanted) => path
                .extension()
                .and_then(|s| s.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.'))),
            None => true,
        }
    }
}

fn is_hidden(name: &str) -> bool { name.starts_with('.') }

/// Read every regular file directly inside `dir`, keyed by file name.
///
/// Subdirectories are not descended into and hidden files are skipped.
pub fn load_files<P: AsRef<Path>>(dir: P, config: &LoaderConfig) -> Result<BTreeMap<String, String>> {
    let dir = dir.as_ref();
    let mut contents = BTreeMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| QaError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || is_hidden(&name) || !config.accepts(path) {
            tracing::debug!(path = %path.display(), "skipping");
            continue;
        }

        let bytes = fs::read(path).map_err(|source| QaError::Io { path: path.to_path_buf(), source })?;
        let text = String::from_utf8(bytes).map_err(|_| QaError::Encoding { path: path.to_path_buf() })?;
        contents.insert(name, text);
    }

    tracing::info!(dir = %dir.display(), num_files = contents.len(), "loaded corpus");
    Ok(contents)
}
