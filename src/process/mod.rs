use std::fmt;

pub mod launcher;
pub mod signal;

pub use launcher::{Launcher, SystemLauncher};

/// Failures the shell cannot recover from while running a child.
#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "fork: {}", e),
            ProcessError::Wait(e) => write!(f, "waitpid: {}", e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
