use super::{Command, CommandError};
use crate::core::session::Session;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

#[derive(Clone)]
pub struct OsCommand;

impl Default for OsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl OsCommand {
    pub fn new() -> Self {
        Self
    }

    fn print_cpus(&self) {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        );
        let cpus = sys.cpus();
        println!("Total CPUs: {}", cpus.len());
        for (index, cpu) in cpus.iter().enumerate() {
            let ghz = cpu.frequency() as f64 / 1000.0;
            println!("  {}: {} @ {:.2} GHz", index, cpu.brand(), ghz);
        }
    }

    fn print_homedir(&self) -> Result<(), CommandError> {
        let home = dirs::home_dir().ok_or_else(|| {
            CommandError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Home directory not found",
            ))
        })?;
        println!("{}", home.display());
        Ok(())
    }
}

impl Command for OsCommand {
    fn execute(&self, _session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let flag = args.first().ok_or(CommandError::MissingArgument("flag"))?;

        match flag.as_str() {
            "--EOL" => println!("{:?}", EOL),
            "--cpus" => self.print_cpus(),
            "--homedir" => self.print_homedir()?,
            "--username" => println!("{}", whoami::username()),
            "--architecture" => println!("{}", std::env::consts::ARCH),
            other => return Err(CommandError::UnknownFlag(other.to_string())),
        }
        Ok(())
    }
}
