use super::{Command, CommandError};
use crate::core::session::Session;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn as_str(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Clone)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Direct children of `dir`: directories first, then files, each group
/// alphabetical. Symlinks and special files count as files.
pub fn collect_entries(dir: &Path) -> Result<Vec<Entry>, CommandError> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        if is_dir {
            dirs.push(Entry {
                name,
                kind: EntryKind::Directory,
            });
        } else {
            files.push(Entry {
                name,
                kind: EntryKind::File,
            });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    Ok(dirs)
}

fn print_table(entries: &[Entry]) {
    let width = entries
        .iter()
        .map(|e| e.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);

    println!("{:<width$}  {}", "Name", "Type", width = width);
    for entry in entries {
        println!("{:<width$}  {}", entry.name, entry.kind.as_str(), width = width);
    }
}

impl Command for LsCommand {
    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<(), CommandError> {
        let entries = collect_entries(session.cwd())?;
        print_table(&entries);
        Ok(())
    }
}
