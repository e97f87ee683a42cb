use super::{Command, CommandError};
use crate::core::session::Session;

#[derive(Clone)]
pub struct UpCommand;

impl Default for UpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UpCommand {
    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        session.ascend();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_up_moves_to_parent() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("child")).expect("mkdir");
        let mut session = Session::new("User".to_string(), tmp.path().join("child"));

        UpCommand::new().execute(&mut session, &[]).expect("up");
        assert_eq!(session.cwd(), tmp.path());
    }

    #[test]
    fn test_up_never_fails_at_root() {
        let mut session = Session::new("User".to_string(), "/".into());
        assert!(UpCommand::new().execute(&mut session, &[]).is_ok());
        assert_eq!(session.cwd(), std::path::Path::new("/"));
    }
}
