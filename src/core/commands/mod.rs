use std::collections::BTreeMap;
use std::path::PathBuf;

mod add;
mod cat;
mod cd;
mod compress;
mod cp;
mod hash;
mod ls;
mod mv;
mod os;
mod rm;
mod rn;
mod up;

pub use add::AddCommand;
pub use cat::CatCommand;
pub use cd::CdCommand;
pub use compress::{CompressCommand, DecompressCommand};
pub use cp::CpCommand;
pub use hash::HashCommand;
pub use ls::LsCommand;
pub use mv::MvCommand;
pub use os::OsCommand;
pub use rm::RmCommand;
pub use rn::RnCommand;
pub use up::UpCommand;

use crate::core::session::Session;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    NotFound(PathBuf),
    WrongType(String),
    Io(std::io::Error),
    UnknownCommand(String),
    UnknownFlag(String),
}

impl CommandError {
    /// Parse-level errors render as "Invalid input"; everything else is an
    /// execution failure and renders as "Operation failed".
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CommandError::MissingArgument(_)
                | CommandError::UnknownCommand(_)
                | CommandError::UnknownFlag(_)
        )
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(name) => write!(f, "missing argument: {}", name),
            CommandError::NotFound(path) => write!(f, "no such entry: {}", path.display()),
            CommandError::WrongType(msg) => write!(f, "wrong entry type: {}", msg),
            CommandError::Io(err) => write!(f, "IO error: {}", err),
            CommandError::UnknownCommand(cmd) => write!(f, "unknown command: {}", cmd),
            CommandError::UnknownFlag(flag) => write!(f, "unknown flag: {}", flag),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl std::error::Error for CommandError {}

pub trait Command {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError>;
}

/// Shared precondition for the commands that only accept regular files.
pub(crate) fn require_file(path: &std::path::Path) -> Result<(), CommandError> {
    let metadata =
        std::fs::metadata(path).map_err(|_| CommandError::NotFound(path.to_path_buf()))?;
    if !metadata.is_file() {
        return Err(CommandError::WrongType(format!(
            "not a regular file: {}",
            path.display()
        )));
    }
    Ok(())
}

#[derive(Clone)]
enum CommandType {
    Up(UpCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Cat(CatCommand),
    Add(AddCommand),
    Rn(RnCommand),
    Cp(CpCommand),
    Mv(MvCommand),
    Rm(RmCommand),
    Os(OsCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
}

impl Command for CommandType {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Up(cmd) => cmd.execute(session, args),
            CommandType::Cd(cmd) => cmd.execute(session, args),
            CommandType::Ls(cmd) => cmd.execute(session, args),
            CommandType::Cat(cmd) => cmd.execute(session, args),
            CommandType::Add(cmd) => cmd.execute(session, args),
            CommandType::Rn(cmd) => cmd.execute(session, args),
            CommandType::Cp(cmd) => cmd.execute(session, args),
            CommandType::Mv(cmd) => cmd.execute(session, args),
            CommandType::Rm(cmd) => cmd.execute(session, args),
            CommandType::Os(cmd) => cmd.execute(session, args),
            CommandType::Hash(cmd) => cmd.execute(session, args),
            CommandType::Compress(cmd) => cmd.execute(session, args),
            CommandType::Decompress(cmd) => cmd.execute(session, args),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor.commands.insert("up".to_string(), CommandType::Up(UpCommand::new()));
        executor.commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        executor.commands.insert("ls".to_string(), CommandType::Ls(LsCommand::new()));
        executor.commands.insert("cat".to_string(), CommandType::Cat(CatCommand::new()));
        executor.commands.insert("add".to_string(), CommandType::Add(AddCommand::new()));
        executor.commands.insert("rn".to_string(), CommandType::Rn(RnCommand::new()));
        executor.commands.insert("cp".to_string(), CommandType::Cp(CpCommand::new()));
        executor.commands.insert("mv".to_string(), CommandType::Mv(MvCommand::new()));
        executor.commands.insert("rm".to_string(), CommandType::Rm(RmCommand::new()));
        executor.commands.insert("os".to_string(), CommandType::Os(OsCommand::new()));
        executor
            .commands
            .insert("hash".to_string(), CommandType::Hash(HashCommand::new()));
        executor.commands.insert(
            "compress".to_string(),
            CommandType::Compress(CompressCommand::new()),
        );
        executor.commands.insert(
            "decompress".to_string(),
            CommandType::Decompress(DecompressCommand::new()),
        );

        executor
    }

    pub fn execute(
        &self,
        session: &mut Session,
        command: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(session, args),
            None => Err(CommandError::UnknownCommand(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
