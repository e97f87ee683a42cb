use super::{Command, CommandError};
use crate::core::session::Session;
use std::fs;
use std::path::Path;

#[derive(Clone)]
pub struct RnCommand;

impl Default for RnCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RnCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RnCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let new_name = args.get(1).ok_or(CommandError::MissingArgument("newName"))?;

        let source = session.resolve(raw)?;
        if !source.exists() {
            return Err(CommandError::NotFound(source));
        }

        // The new name lands next to the source; overwrite behavior is
        // whatever fs::rename does on this platform.
        let parent = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| session.cwd().to_path_buf());
        let target = parent.join(new_name);
        fs::rename(&source, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rename_in_place() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("old.txt"), b"data").expect("write");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        RnCommand::new()
            .execute(&mut session, &["old.txt".to_string(), "new.txt".to_string()])
            .expect("rn");

        assert!(!tmp.path().join("old.txt").exists());
        assert_eq!(fs::read(tmp.path().join("new.txt")).expect("read"), b"data");
    }

    #[test]
    fn test_rename_entry_in_subdir_stays_there() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("sub")).expect("mkdir");
        fs::write(tmp.path().join("sub/old.txt"), b"x").expect("write");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        RnCommand::new()
            .execute(
                &mut session,
                &["sub/old.txt".to_string(), "new.txt".to_string()],
            )
            .expect("rn");

        assert!(tmp.path().join("sub/new.txt").is_file());
        assert!(!tmp.path().join("sub/old.txt").exists());
    }

    #[test]
    fn test_rename_missing_source() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = RnCommand::new().execute(
            &mut session,
            &["ghost.txt".to_string(), "new.txt".to_string()],
        );
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }

    #[test]
    fn test_rename_missing_arguments() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = RnCommand::new().execute(&mut session, &["only.txt".to_string()]);
        assert!(matches!(result, Err(CommandError::MissingArgument(_))));
    }
}
