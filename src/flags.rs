use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "username".to_string(),
            Flag {
                short: "-u".to_string(),
                long: "--username".to_string(),
                description: "Display name for the greeting and farewell banners".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress banners and warnings".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Print detailed error output".to_string(),
                takes_value: false,
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            // Split the "--flag=value" form up front.
            let (name_part, inline_value) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (arg.as_str(), None),
            };

            for flag in self.flags.values_mut() {
                if name_part != flag.short && name_part != flag.long {
                    continue;
                }

                if flag.takes_value {
                    if let Some(value) = inline_value {
                        flag.value = Some(value.to_string());
                    } else if i + 1 < args.len() {
                        flag.value = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                } else {
                    flag.value = Some("true".to_string());
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: fmsh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Flags {
        let mut flags = Flags::new();
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&owned).expect("parse should succeed");
        flags
    }

    #[test]
    fn test_username_equals_form() {
        let flags = parse(&["--username=alice"]);
        assert_eq!(flags.get_value("username").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_username_separate_form() {
        let flags = parse(&["--username", "bob"]);
        assert_eq!(flags.get_value("username").map(String::as_str), Some("bob"));
    }

    #[test]
    fn test_username_missing_value() {
        let mut flags = Flags::new();
        let result = flags.parse(&["--username".to_string()]);
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_boolean_flags() {
        let flags = parse(&["-q", "--debug"]);
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_unknown_args_ignored() {
        let flags = parse(&["--unknown", "stray"]);
        assert!(!flags.is_set("help"));
        assert!(flags.get_value("username").is_none());
    }

    #[test]
    fn test_default_username_unset() {
        let flags = Flags::new();
        assert!(flags.get_value("username").is_none());
    }
}
