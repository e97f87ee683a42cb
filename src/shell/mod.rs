use rustyline::{config::Configurer, history::FileHistory, Editor};
use std::path::PathBuf;

use crate::{
    core::{commands::CommandExecutor, session::Session},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

const DEFAULT_USERNAME: &str = "User";

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        editor.set_auto_add_history(true);

        let username = flags
            .get_value("username")
            .cloned()
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let session = Session::new(username, Self::start_dir()?);

        // SIGINT during a running command takes the same farewell path as
        // .exit; Ctrl-C at the prompt surfaces as ReadlineError::Interrupted
        // and is handled in the loop.
        let farewell_name = session.username().to_string();
        ctrlc::set_handler(move || {
            println!();
            print_farewell(&farewell_name);
            std::process::exit(0);
        })?;

        Ok(Shell {
            editor,
            session,
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
            flags,
        })
    }

    /// The cursor starts at the desktop directory when the platform has one,
    /// otherwise at the home directory.
    fn start_dir() -> Result<PathBuf, ShellError> {
        dirs::desktop_dir()
            .filter(|p| p.is_dir())
            .or_else(dirs::home_dir)
            .ok_or(ShellError::HomeDirNotFound)
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            let greeting = format!(
                "Welcome to the File Manager, {}!",
                self.session.username()
            );
            println!("{}", self.highlighter.highlight_banner(&greeting));
        }
        self.report_location();

        loop {
            if let Some(helper) = self.editor.helper_mut() {
                helper.set_cwd(self.session.cwd());
            }

            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line == ".exit" {
                        self.farewell();
                        break;
                    }

                    self.dispatch(line);
                    self.report_location();
                }
                Err(rustyline::error::ReadlineError::Interrupted)
                | Err(rustyline::error::ReadlineError::Eof) => {
                    self.farewell();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// One command, fully processed before the next prompt. Handler errors
    /// are reported with a single generic line and never escape the loop.
    fn dispatch(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let name = match parts.next() {
            Some(name) => name,
            None => return,
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        if let Err(e) = self.executor.execute(&mut self.session, name, &args) {
            let message = if e.is_invalid_input() {
                "Invalid input"
            } else {
                "Operation failed"
            };
            println!("{}", self.highlighter.highlight_error(message));
            if self.flags.is_set("debug") {
                eprintln!("{}", e);
            }
        }
    }

    fn report_location(&self) {
        let path = self.session.cwd().display().to_string();
        println!(
            "You are currently in {}",
            self.highlighter.highlight_path(&path)
        );
    }

    fn farewell(&self) {
        print_farewell(self.session.username());
    }
}

fn print_farewell(username: &str) {
    println!("Thank you for using File Manager, {}, goodbye!", username);
}
