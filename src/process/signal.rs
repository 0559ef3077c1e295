use log::trace;

use crate::process::ProcessError;

/// Keeps SIGINT from killing the shell while a foreground child runs.
///
/// A real handler (not SIG_IGN) is installed so the default disposition is
/// restored in the child across exec.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    match ctrlc::try_set_handler(|| trace!("SIGINT delivered to foreground child")) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(ProcessError::SignalError(e.to_string())),
    }
}
