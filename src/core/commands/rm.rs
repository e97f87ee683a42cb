use super::{require_file, Command, CommandError};
use crate::core::session::Session;
use std::fs;

#[derive(Clone)]
pub struct RmCommand;

impl Default for RmCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let path = session.resolve(raw)?;
        require_file(&path)?;
        fs::remove_file(&path)?;
        Ok(())
    }
}
