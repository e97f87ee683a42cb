use super::{Command, CommandError};
use crate::core::session::Session;
use std::fs::OpenOptions;

#[derive(Clone)]
pub struct AddCommand;

impl Default for AddCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl AddCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AddCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
        let path = session.resolve(name)?;

        // create_new refuses to clobber any existing entry, whatever its type
        OpenOptions::new().write(true).create_new(true).open(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_creates_empty_file() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        AddCommand::new()
            .execute(&mut session, &["fresh.txt".to_string()])
            .expect("add");

        let created = tmp.path().join("fresh.txt");
        assert!(created.is_file());
        assert_eq!(fs::metadata(&created).expect("metadata").len(), 0);
    }

    #[test]
    fn test_add_refuses_existing_file() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("kept.txt"), b"contents").expect("write");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = AddCommand::new().execute(&mut session, &["kept.txt".to_string()]);
        assert!(result.is_err());
        assert_eq!(
            fs::read(tmp.path().join("kept.txt")).expect("read"),
            b"contents"
        );
    }

    #[test]
    fn test_add_refuses_existing_directory() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("taken")).expect("mkdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = AddCommand::new().execute(&mut session, &["taken".to_string()]);
        assert!(result.is_err());
        assert!(tmp.path().join("taken").is_dir());
    }

    #[test]
    fn test_add_missing_argument() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = AddCommand::new().execute(&mut session, &[]);
        assert!(matches!(result, Err(CommandError::MissingArgument(_))));
    }
}
