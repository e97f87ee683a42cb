use crate::core::commands::CommandError;
use crate::path::PathExpander;
use std::fs;
use std::path::{Path, PathBuf};

/// The shell's working state: the current-directory cursor and the display
/// name. Handlers receive it explicitly so tests can run independent
/// sessions rooted in temp directories.
pub struct Session {
    current_dir: PathBuf,
    username: String,
    path_expander: PathExpander,
}

impl Session {
    pub fn new(username: String, start_dir: PathBuf) -> Self {
        Session {
            current_dir: start_dir,
            username,
            path_expander: PathExpander::new(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.current_dir
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Resolve a path argument against the cursor.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, CommandError> {
        self.path_expander
            .resolve(&self.current_dir, raw)
            .map_err(|e| {
                CommandError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    e.to_string(),
                ))
            })
    }

    /// Move the cursor; it only moves if the target is an existing directory.
    pub fn change_dir(&mut self, raw: &str) -> Result<(), CommandError> {
        let target = self.resolve(raw)?;
        let metadata = fs::metadata(&target).map_err(|_| CommandError::NotFound(target.clone()))?;
        if !metadata.is_dir() {
            return Err(CommandError::WrongType(format!(
                "not a directory: {}",
                target.display()
            )));
        }
        self.current_dir = target;
        Ok(())
    }

    /// Move the cursor to its parent. At the filesystem root this is a no-op.
    pub fn ascend(&mut self) {
        self.current_dir.pop();
        if self.current_dir.as_os_str().is_empty() {
            self.current_dir = PathBuf::from("/");
        }
    }
}
