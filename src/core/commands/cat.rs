use super::{require_file, Command, CommandError};
use crate::core::session::Session;
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Clone)]
pub struct CatCommand;

impl Default for CatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CatCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CatCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let path = session.resolve(raw)?;
        require_file(&path)?;

        let mut reader = BufReader::new(File::open(&path)?);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        io::copy(&mut reader, &mut handle)?;
        handle.flush()?;
        Ok(())
    }
}
