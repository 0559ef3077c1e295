use std::path::PathBuf;

use crate::flags::Flags;

const RC_FILE: &str = ".huskrc";
const HISTORY_FILE: &str = ".husk_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new(flags: &Flags) -> Self {
        let home = dirs::home_dir();

        let rc_path = if flags.is_set("norc") {
            None
        } else if let Some(path) = flags.get_value("rc") {
            Some(PathBuf::from(path))
        } else {
            home.as_ref().map(|home| home.join(RC_FILE))
        };

        ConfigPaths {
            rc_path,
            history_path: home.map(|home| home.join(HISTORY_FILE)),
        }
    }
}
