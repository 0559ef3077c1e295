use log::debug;

use super::chain::Chain;
use super::environment::EnvironmentHandler;
use crate::core::commands::Outcome;
use crate::error::ShellError;

pub trait CommandHandler {
    /// Expands, splits and runs one input line. `Err` is fatal to the session.
    fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let expanded = self.expand_variables(line);
        if expanded != line {
            debug!("expanded {:?} to {:?}", line, expanded);
        }

        let chain = Chain::parse(&expanded);
        debug!("parsed {} link(s)", chain.links().len());

        let session = &mut self.session;
        let executor = &mut self.executor;
        let outcome = chain.evaluate(session.last_status(), |words| {
            let words = session.aliases().expand(words);
            let outcome = executor.execute(&words, session)?;
            if let Outcome::Continue(status) = outcome {
                session.set_last_status(status);
            }
            Ok::<_, ShellError>(outcome)
        })?;

        Ok(outcome)
    }
}
