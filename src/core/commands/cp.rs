use super::{require_file, Command, CommandError};
use crate::core::session::Session;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct CpCommand;

impl Default for CpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CpCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Streamed byte-copy of `source` into `dest_dir`, preserving the base name.
/// Returns the path of the new file.
pub(crate) fn copy_into(source: &Path, dest_dir: &Path) -> Result<PathBuf, CommandError> {
    require_file(source)?;

    if !dest_dir.is_dir() {
        return Err(CommandError::WrongType(format!(
            "not a directory: {}",
            dest_dir.display()
        )));
    }

    let base_name = source
        .file_name()
        .ok_or_else(|| CommandError::WrongType(format!("no file name: {}", source.display())))?;
    let target = dest_dir.join(base_name);

    // Creating the target truncates it, so copying a file onto itself would
    // wipe it before a single byte is read. Canonicalize both sides; the
    // target only canonicalizes if it already exists.
    if let (Ok(source_real), Ok(target_real)) = (fs::canonicalize(source), fs::canonicalize(&target))
    {
        if source_real == target_real {
            return Err(CommandError::WrongType(format!(
                "source and destination are the same file: {}",
                source.display()
            )));
        }
    }

    let mut reader = BufReader::new(File::open(source)?);
    let mut writer = BufWriter::new(File::create(&target)?);
    io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(target)
}

impl Command for CpCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw_src = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let raw_dest = args.get(1).ok_or(CommandError::MissingArgument("destDir"))?;

        let source = session.resolve(raw_src)?;
        let dest_dir = session.resolve(raw_dest)?;
        copy_into(&source, &dest_dir)?;
        Ok(())
    }
}
