use std::env;

use log::debug;

use super::{Command, CommandError, Outcome};
use crate::core::env as vars;
use crate::core::state::{SessionState, STATUS_SUCCESS};

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn target(&self, arg: Option<&str>) -> Result<String, CommandError> {
        match arg {
            None => vars::get("HOME").ok_or(CommandError::NoHome),
            Some("-") => vars::get("OLDPWD").ok_or(CommandError::NoOldPwd),
            Some(dir) => Ok(dir.to_string()),
        }
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<Outcome, CommandError> {
        let target = self.target(args.first().map(String::as_str))?;
        let previous = env::current_dir().map_err(CommandError::CurrentDir)?;

        env::set_current_dir(&target).map_err(|e| CommandError::ChangeDir(target.clone(), e))?;

        let current = env::current_dir().map_err(CommandError::CurrentDir)?;
        vars::set("OLDPWD", &previous)?;
        vars::set("PWD", &current)?;
        debug!("cd {} -> {}", previous.display(), current.display());

        Ok(Outcome::Continue(STATUS_SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    fn cd(args: &[&str]) -> Result<Outcome, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        CdCommand::new().execute(&args, &mut SessionState::new())
    }

    fn canonical(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().canonicalize().unwrap()
    }

    /// Puts the working directory and HOME back once a test is done.
    struct Restore {
        dir: PathBuf,
        home: Option<std::ffi::OsString>,
    }

    impl Restore {
        fn new() -> Self {
            Self {
                dir: env::current_dir().unwrap(),
                home: env::var_os("HOME"),
            }
        }
    }

    impl Drop for Restore {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.dir);
            match &self.home {
                Some(home) => env::set_var("HOME", home),
                None => env::remove_var("HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_cd_home() {
        let _restore = Restore::new();
        let home = tempfile::tempdir().unwrap();
        env::set_var("HOME", home.path());

        assert!(cd(&[]).is_ok());
        assert_eq!(env::current_dir().unwrap(), canonical(&home));
    }

    #[test]
    #[serial]
    fn test_cd_without_home() {
        let _restore = Restore::new();
        env::remove_var("HOME");

        assert!(matches!(cd(&[]), Err(CommandError::NoHome)));
    }

    #[test]
    #[serial]
    fn test_cd_dash_returns_to_previous() {
        let _restore = Restore::new();
        let start = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        env::set_current_dir(start.path()).unwrap();

        cd(&[other.path().to_str().unwrap()]).unwrap();
        assert_eq!(env::current_dir().unwrap(), canonical(&other));

        cd(&["-"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), canonical(&start));
        assert_eq!(
            PathBuf::from(env::var("OLDPWD").unwrap()),
            canonical(&other)
        );
        assert_eq!(PathBuf::from(env::var("PWD").unwrap()), canonical(&start));
    }

    #[test]
    #[serial]
    fn test_cd_dash_without_oldpwd() {
        env::remove_var("OLDPWD");
        assert!(matches!(cd(&["-"]), Err(CommandError::NoOldPwd)));
    }

    #[test]
    #[serial]
    fn test_cd_invalid_keeps_pwd_and_oldpwd() {
        env::set_var("OLDPWD", "/marker/old");
        env::set_var("PWD", "/marker/pwd");

        let result = cd(&["/nonexistent/path"]);
        assert!(matches!(result, Err(CommandError::ChangeDir(_, _))));
        assert_eq!(result.unwrap_err().status(), 1);
        assert_eq!(env::var("OLDPWD").unwrap(), "/marker/old");
        assert_eq!(env::var("PWD").unwrap(), "/marker/pwd");
    }
}
