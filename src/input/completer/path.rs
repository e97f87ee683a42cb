use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes path arguments against the session's cursor rather than the
/// process working directory, which this shell never changes.
#[derive(Clone)]
pub struct PathCompleter;

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, base: &Path, incomplete: &str) -> Vec<Pair> {
        let (dir_fragment, file_prefix) = Self::parse_path_input(incomplete);
        let dir_to_search = if Path::new(incomplete).is_absolute() {
            dir_fragment.clone()
        } else {
            base.join(&dir_fragment)
        };

        self.matches_in(&dir_to_search, &dir_fragment, &file_prefix)
    }

    fn parse_path_input(incomplete: &str) -> (PathBuf, String) {
        let path = Path::new(incomplete);

        if incomplete.is_empty() {
            (PathBuf::new(), String::new())
        } else if incomplete.ends_with('/') {
            (PathBuf::from(incomplete), String::new())
        } else {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let prefix = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            (parent, prefix)
        }
    }

    fn matches_in(&self, dir_to_search: &Path, dir_fragment: &Path, file_prefix: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(file_prefix) {
                        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                        let mut replacement = dir_fragment
                            .join(name)
                            .to_string_lossy()
                            .into_owned();
                        if is_dir {
                            replacement.push('/');
                        }
                        matches.push(Pair {
                            display: name.to_string(),
                            replacement,
                        });
                    }
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
