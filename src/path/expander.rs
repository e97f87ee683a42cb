use crate::error::ShellError;
use std::path::{Component, Path, PathBuf};

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw path argument against a base directory: `~` expands to
    /// the home directory, absolute paths override the base, and relative
    /// paths are joined onto it. `.` and `..` components collapse lexically.
    pub fn resolve(&self, base: &Path, raw: &str) -> Result<PathBuf, ShellError> {
        let candidate = if raw.starts_with('~') {
            self.expand_tilde(raw)?
        } else {
            let path = Path::new(raw);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            }
        };

        Ok(Self::normalize(&candidate))
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.len() == 1 {
            // Just "~"
            dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
        } else {
            let without_tilde = &path[1..];
            if let Some(stripped) = without_tilde.strip_prefix('/') {
                // "~/path"
                let mut home_path = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            } else {
                // "~username/path" - not handling this case for now
                Ok(Path::new(path).to_path_buf())
            }
        }
    }

    /// Collapse `.` and `..` without touching the filesystem. Popping past
    /// the root is a no-op, so "/.." stays at "/".
    fn normalize(path: &Path) -> PathBuf {
        let mut resolved = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other.as_os_str()),
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_joins_base() {
        let expander = PathExpander::new();
        let resolved = expander.resolve(Path::new("/srv/data"), "logs/today").expect("resolve");
        assert_eq!(resolved, PathBuf::from("/srv/data/logs/today"));
    }

    #[test]
    fn test_absolute_overrides_base() {
        let expander = PathExpander::new();
        let resolved = expander.resolve(Path::new("/srv/data"), "/etc/hosts").expect("resolve");
        assert_eq!(resolved, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_parent_components_collapse() {
        let expander = PathExpander::new();
        let resolved = expander.resolve(Path::new("/srv/data"), "../backup/./old").expect("resolve");
        assert_eq!(resolved, PathBuf::from("/srv/backup/old"));
    }

    #[test]
    fn test_parent_of_root_stays_root() {
        let expander = PathExpander::new();
        let resolved = expander.resolve(Path::new("/"), "../../..").expect("resolve");
        assert_eq!(resolved, PathBuf::from("/"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let expander = PathExpander::new();
        let home = dirs::home_dir().expect("home dir");
        let resolved = expander.resolve(Path::new("/srv"), "~").expect("resolve");
        assert_eq!(resolved, home);

        let resolved = expander.resolve(Path::new("/srv"), "~/notes.txt").expect("resolve");
        assert_eq!(resolved, home.join("notes.txt"));
    }
}
