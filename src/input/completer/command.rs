use std::{borrow::Cow, collections::BTreeSet};

use rustyline::completion::Pair;

/// Completes the shell's built-in command names. The set is fixed; there are
/// no external commands to scan for.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
}

const BUILTINS: &[&str] = &[
    ".exit",
    "add",
    "cat",
    "cd",
    "compress",
    "cp",
    "decompress",
    "hash",
    "ls",
    "mv",
    "os",
    "rm",
    "rn",
    "up",
];

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self {
            commands: BUILTINS.iter().map(|name| Cow::Borrowed(*name)).collect(),
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let completer = CommandCompleter::new();
        let matches = completer.complete_command("c");
        let names: Vec<&str> = matches.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(names, vec!["cat", "cd", "compress", "cp"]);
    }

    #[test]
    fn test_empty_prefix_lists_all() {
        let completer = CommandCompleter::new();
        assert_eq!(completer.complete_command("").len(), BUILTINS.len());
    }

    #[test]
    fn test_no_match() {
        let completer = CommandCompleter::new();
        assert!(completer.complete_command("zz").is_empty());
    }
}
