use std::env;

use log::{info, warn};
use rustyline::{error::ReadlineError, history::FileHistory, Editor};

pub mod chain;
pub mod environment;
mod executor;

use crate::{
    core::{
        aliases::AliasTable,
        commands::{CommandExecutor, ExitCommand, Outcome},
        config::Config,
        state::SessionState,
    },
    error::ShellError,
    flags::Flags,
    input::ShellCompleter,
    process::{signal, Launcher, SystemLauncher},
};

pub use executor::CommandHandler;

pub struct Shell {
    pub(crate) session: SessionState,
    pub(crate) executor: CommandExecutor,
    pub(crate) config: Config,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Self {
        Self::with_launcher(flags, Box::new(SystemLauncher::new()))
    }

    pub fn with_launcher(flags: Flags, launcher: Box<dyn Launcher>) -> Self {
        Shell {
            session: SessionState::new(),
            executor: CommandExecutor::with_launcher(&flags, launcher),
            config: Config::new(&flags),
            flags,
        }
    }

    pub fn last_status(&self) -> i32 {
        self.session.last_status()
    }

    pub fn aliases(&self) -> &AliasTable {
        self.session.aliases()
    }

    /// Runs the startup file, then either the `--command` line or the
    /// interactive loop. Returns the status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        if let Some(code) = self.load_startup()? {
            return Ok(code);
        }

        if let Some(line) = self.flags.get_value("command").cloned() {
            return Ok(match self.execute_line(&line)? {
                Outcome::Continue(status) => status,
                Outcome::Exit(code) => code,
            });
        }

        self.interactive()
    }

    /// `Some(code)` when a startup line ended the session.
    pub fn load_startup(&mut self) -> Result<Option<i32>, ShellError> {
        for line in self.config.startup_lines()? {
            if let Outcome::Exit(code) = self.execute_line(&line)? {
                info!("startup file requested exit {}", code);
                return Ok(Some(code));
            }
        }
        Ok(None)
    }

    fn prompt(&self) -> Result<String, ShellError> {
        let current_dir = env::current_dir().map_err(ShellError::CurrentDir)?;
        Ok(format!("husk:{}$ ", current_dir.display()))
    }

    fn interactive(&mut self) -> Result<i32, ShellError> {
        signal::setup_signal_handlers()?;

        let mut completer = ShellCompleter::new();
        completer.update_aliases(self.session.aliases());

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));

        if let Some(path) = self.config.history_path() {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    warn!("Couldn't load history from {}: {}", path.display(), e);
                }
            }
        }

        let quiet = self.flags.is_set("quiet");
        let code = loop {
            let prompt = self.prompt()?;
            match editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            warn!("Couldn't add to history: {}", e);
                        }
                    }

                    if let Outcome::Exit(code) = self.execute_line(&line)? {
                        break code;
                    }

                    if let Some(helper) = editor.helper_mut() {
                        helper.update_aliases(self.session.aliases());
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!();
                    ExitCommand::new(quiet).announce(0);
                    break 0;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if let Some(path) = self.config.history_path() {
            if let Err(e) = editor.save_history(path) {
                warn!("Couldn't save history to {}: {}", path.display(), e);
            }
        }

        Ok(code)
    }
}
