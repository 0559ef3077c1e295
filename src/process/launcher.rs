use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use super::ProcessError;
use crate::core::state::STATUS_ABNORMAL;

/// Spawn-and-wait capability used for every external command.
///
/// Implementations block until the child has been reaped and return its
/// exit status. An `Err` means the shell itself can no longer run children.
pub trait Launcher {
    fn launch(&mut self, program: &Path, argv: &[String]) -> Result<i32, ProcessError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, program: &Path, argv: &[String]) -> Result<i32, ProcessError> {
        let mut command = Command::new(program);
        if let Some(name) = argv.first() {
            command.arg0(name);
        }
        command
            .args(argv.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if is_resource_exhaustion(&e) => return Err(ProcessError::Spawn(e)),
            Err(e) => {
                // The image could not be executed; only this link fails.
                eprintln!("husk: {}: {}", program.display(), e);
                return Ok(STATUS_ABNORMAL);
            }
        };

        debug!("spawned {} as pid {}", program.display(), child.id());

        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(status_code(status))
    }
}

fn is_resource_exhaustion(e: &io::Error) -> bool {
    matches!(e.raw_os_error(), Some(libc::EAGAIN) | Some(libc::ENOMEM))
}

fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        debug!("child exited with {}", code);
        return code;
    }

    match status.signal() {
        Some(signal) => {
            let name = signal_hook::low_level::signal_name(signal).unwrap_or("unknown signal");
            warn!("child terminated by {} ({})", name, signal);
        }
        None => warn!("child terminated abnormally: {}", status),
    }
    STATUS_ABNORMAL
}
