use super::{cp::copy_into, Command, CommandError};
use crate::core::session::Session;
use std::fs;

#[derive(Clone)]
pub struct MvCommand;

impl Default for MvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MvCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw_src = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let raw_dest = args.get(1).ok_or(CommandError::MissingArgument("destDir"))?;

        let source = session.resolve(raw_src)?;
        let dest_dir = session.resolve(raw_dest)?;

        // Copy first; only delete the source once the copy has fully landed.
        // If the delete itself fails the duplicate is left in place, with no
        // rollback of the copy.
        copy_into(&source, &dest_dir)?;
        fs::remove_file(&source)?;
        Ok(())
    }
}
