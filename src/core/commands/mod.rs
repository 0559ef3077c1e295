use log::debug;

mod alias;
mod cd;
mod env;
mod exit;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetenvCommand, UnsetenvCommand};
pub use exit::ExitCommand;

use crate::core::env::EnvError;
use crate::core::state::{SessionState, STATUS_FAILURE, STATUS_NOT_FOUND, STATUS_SUCCESS};
use crate::error::ShellError;
use crate::flags::Flags;
use crate::path::ExecutableResolver;
use crate::process::{Launcher, SystemLauncher};

/// Built-in names in dispatch priority order.
pub const BUILTIN_NAMES: [&str; 6] = ["exit", "cd", "alias", "setenv", "unsetenv", "env"];

/// What the chain should do after a link ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue(i32),
    Exit(i32),
}

#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    NoHome,
    NoOldPwd,
    ChangeDir(String, std::io::Error),
    CurrentDir(std::io::Error),
    Env(EnvError),
}

impl CommandError {
    /// Status recorded for the failed link. Usage mistakes leave it at 0.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::Usage(_) => STATUS_SUCCESS,
            _ => STATUS_FAILURE,
        }
    }

    /// The session cannot continue without a working directory.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::CurrentDir(_))
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "Usage: {}", usage),
            CommandError::NoHome => write!(f, "cd: No $HOME variable set"),
            CommandError::NoOldPwd => write!(f, "cd: No previous working directory"),
            CommandError::ChangeDir(dir, err) => write!(f, "cd: {}: {}", dir, err),
            CommandError::CurrentDir(err) => write!(f, "getcwd: {}", err),
            CommandError::Env(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, args: &[String], session: &mut SessionState)
        -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Alias(AliasCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    Env(EnvCommand),
}

impl Command for CommandType {
    fn name(&self) -> &'static str {
        match self {
            CommandType::Exit(cmd) => cmd.name(),
            CommandType::Cd(cmd) => cmd.name(),
            CommandType::Alias(cmd) => cmd.name(),
            CommandType::Setenv(cmd) => cmd.name(),
            CommandType::Unsetenv(cmd) => cmd.name(),
            CommandType::Env(cmd) => cmd.name(),
        }
    }

    fn execute(
        &self,
        args: &[String],
        session: &mut SessionState,
    ) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, session),
            CommandType::Cd(cmd) => cmd.execute(args, session),
            CommandType::Alias(cmd) => cmd.execute(args, session),
            CommandType::Setenv(cmd) => cmd.execute(args, session),
            CommandType::Unsetenv(cmd) => cmd.execute(args, session),
            CommandType::Env(cmd) => cmd.execute(args, session),
        }
    }
}

/// Runs one command segment: a built-in in-process, anything else through
/// the resolver and the launcher.
pub struct CommandExecutor {
    builtins: Vec<CommandType>,
    launcher: Box<dyn Launcher>,
    quiet: bool,
}

impl CommandExecutor {
    pub fn new(flags: &Flags) -> Self {
        Self::with_launcher(flags, Box::new(SystemLauncher::new()))
    }

    pub fn with_launcher(flags: &Flags, launcher: Box<dyn Launcher>) -> Self {
        let quiet = flags.is_set("quiet");
        let builtins = vec![
            CommandType::Exit(ExitCommand::new(quiet)),
            CommandType::Cd(CdCommand::new()),
            CommandType::Alias(AliasCommand::new()),
            CommandType::Setenv(SetenvCommand::new()),
            CommandType::Unsetenv(UnsetenvCommand::new()),
            CommandType::Env(EnvCommand::new()),
        ];

        Self {
            builtins,
            launcher,
            quiet,
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.builtins.iter().any(|cmd| cmd.name() == command)
    }

    pub fn execute(
        &mut self,
        words: &[String],
        session: &mut SessionState,
    ) -> Result<Outcome, ShellError> {
        let Some((command, args)) = words.split_first() else {
            return Ok(Outcome::Continue(session.last_status()));
        };

        if let Some(builtin) = self.builtins.iter().find(|cmd| cmd.name() == command) {
            debug!("builtin {} {:?}", command, args);
            return match builtin.execute(args, session) {
                Ok(outcome) => Ok(outcome),
                Err(e) if e.is_fatal() => Err(e.into()),
                Err(e) => {
                    eprintln!("{}", e);
                    Ok(Outcome::Continue(e.status()))
                }
            };
        }

        self.run_external(command, words)
    }

    fn run_external(&mut self, command: &str, argv: &[String]) -> Result<Outcome, ShellError> {
        let Some(program) = ExecutableResolver::from_env().resolve(command) else {
            eprintln!("husk: command not found: {}", command);
            return Ok(Outcome::Continue(STATUS_NOT_FOUND));
        };

        let status = self.launcher.launch(&program, argv)?;
        if !self.quiet {
            println!("Child process exited with status {}", status);
        }
        Ok(Outcome::Continue(status))
    }
}
