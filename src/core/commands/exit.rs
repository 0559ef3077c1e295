use super::{Command, CommandError, Outcome};
use crate::core::state::SessionState;

#[derive(Clone)]
pub struct ExitCommand {
    quiet: bool,
}

impl ExitCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn announce(&self, status: i32) {
        if !self.quiet {
            println!("Exiting the shell with status {}.", status);
        }
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<Outcome, CommandError> {
        let status = args
            .first()
            .and_then(|arg| arg.parse::<i32>().ok())
            .unwrap_or(0);

        self.announce(status);
        Ok(Outcome::Exit(status))
    }
}
