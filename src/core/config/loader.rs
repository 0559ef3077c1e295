use std::{fs, path::Path};

use log::info;

use super::{ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Command lines from the rc file, without blanks and comments.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        match &self.paths.rc_path {
            Some(path) if path.exists() => self.read_lines(path),
            _ => Ok(Vec::new()),
        }
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        info!("loading {}", path.display());

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths(rc_path: Option<PathBuf>) -> ConfigPaths {
        ConfigPaths {
            rc_path,
            history_path: None,
        }
    }

    #[test]
    fn test_load_lines() {
        let dir = tempfile::tempdir().unwrap();
        let rc = dir.path().join("huskrc");
        fs::write(
            &rc,
            "# aliases\n\nalias ll = ls -l\n   setenv EDITOR vi  \n",
        )
        .unwrap();

        let paths = paths(Some(rc));
        let lines = ConfigLoader::new(&paths).load_lines().unwrap();
        assert_eq!(lines, vec!["alias ll = ls -l", "setenv EDITOR vi"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let paths = paths(Some(PathBuf::from("/nonexistent/huskrc")));
        assert!(ConfigLoader::new(&paths).load_lines().unwrap().is_empty());
    }

    #[test]
    fn test_no_rc() {
        let paths = paths(None);
        assert!(ConfigLoader::new(&paths).load_lines().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(Some(dir.path().to_path_buf()));
        assert!(matches!(
            ConfigLoader::new(&paths).load_lines(),
            Err(ConfigError::ReadError(_, _))
        ));
    }
}
