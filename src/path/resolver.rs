use std::collections::BTreeSet;
use std::env;
use std::ffi::{CString, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::{debug, trace};

/// Finds commands in a colon-separated search path.
///
/// Every name goes through the scan, even ones containing `/`; such a name
/// only resolves if `dir/name` happens to exist under a listed directory.
#[derive(Clone, Debug)]
pub struct ExecutableResolver {
    search_path: Option<OsString>,
}

impl ExecutableResolver {
    pub fn new(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    fn directories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.search_path
            .iter()
            .flat_map(env::split_paths)
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        for dir in self.directories() {
            let mut candidate = dir.into_os_string();
            candidate.push("/");
            candidate.push(name);
            let candidate = PathBuf::from(candidate);

            if is_executable(&candidate) {
                debug!("resolved {} to {}", name, candidate.display());
                return Some(candidate);
            }
            trace!("no {} at {}", name, candidate.display());
        }

        debug!("{} not found in search path", name);
        None
    }

    /// Names of every executable reachable through the search path.
    pub fn executables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for dir in self.directories() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if is_executable(&entry.path()) {
                    if let Some(name) = entry.file_name().to_str() {
                        names.insert(name.to_string());
                    }
                }
            }
        }
        names
    }
}

/// Regular file the caller may execute, per access(2) with X_OK.
fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
