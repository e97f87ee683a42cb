use super::{Command, CommandError};
use crate::core::session::Session;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingArgument("path"))?;
        session.change_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cd_into_subdir() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("docs")).expect("mkdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        CdCommand::new()
            .execute(&mut session, &["docs".to_string()])
            .expect("cd");
        assert_eq!(session.cwd(), tmp.path().join("docs"));
    }

    #[test]
    fn test_cd_missing_argument() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = CdCommand::new().execute(&mut session, &[]);
        assert!(matches!(result, Err(CommandError::MissingArgument(_))));
    }

    #[test]
    fn test_cd_dotdot() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("inner")).expect("mkdir");
        let mut session = Session::new("User".to_string(), tmp.path().join("inner"));

        CdCommand::new()
            .execute(&mut session, &["..".to_string()])
            .expect("cd ..");
        assert_eq!(session.cwd(), tmp.path());
    }
}
