use super::{Command, CommandError, Outcome};
use crate::core::env as vars;
use crate::core::state::{SessionState, STATUS_SUCCESS};

#[derive(Clone, Default)]
pub struct SetenvCommand;

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetenvCommand {
    fn name(&self) -> &'static str {
        "setenv"
    }

    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<Outcome, CommandError> {
        let [name, value, ..] = args else {
            return Err(CommandError::Usage("setenv VARIABLE VALUE"));
        };

        vars::set(name, value)?;
        Ok(Outcome::Continue(STATUS_SUCCESS))
    }
}

#[derive(Clone, Default)]
pub struct UnsetenvCommand;

impl UnsetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetenvCommand {
    fn name(&self) -> &'static str {
        "unsetenv"
    }

    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<Outcome, CommandError> {
        let Some(name) = args.first() else {
            return Err(CommandError::Usage("unsetenv VARIABLE"));
        };

        vars::unset(name)?;
        Ok(Outcome::Continue(STATUS_SUCCESS))
    }
}

/// Prints the environment as `NAME=VALUE`, sorted by name.
#[derive(Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<Outcome, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::Usage("env"));
        }

        for (name, value) in vars::sorted_vars() {
            println!("{}={}", name, value);
        }
        Ok(Outcome::Continue(STATUS_SUCCESS))
    }
}
