use super::aliases::AliasTable;

pub const STATUS_SUCCESS: i32 = 0;
pub const STATUS_FAILURE: i32 = 1;
pub const STATUS_NOT_FOUND: i32 = 127;
/// Reported when a child dies from a signal or its image could not be executed.
pub const STATUS_ABNORMAL: i32 = -1;

/// Everything a session owns for its lifetime.
///
/// The working directory and environment live in the OS process; this holds
/// the rest. Dropping it frees the alias table in one go.
#[derive(Debug)]
pub struct SessionState {
    aliases: AliasTable,
    last_status: i32,
    pid: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            aliases: AliasTable::new(),
            last_status: STATUS_SUCCESS,
            pid: std::process::id(),
        }
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_last_status(&mut self, status: i32) {
        self.last_status = status;
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = SessionState::new();
        assert_eq!(state.last_status(), 0);
        assert_eq!(state.pid(), std::process::id());
        assert!(state.aliases().is_empty());
    }

    #[test]
    fn test_status_update() {
        let mut state = SessionState::new();
        state.set_last_status(STATUS_NOT_FOUND);
        assert_eq!(state.last_status(), 127);
    }
}
