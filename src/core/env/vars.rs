use std::env;
use std::ffi::OsStr;

use log::debug;

use super::EnvError;

fn validate_name(name: &str) -> Result<(), EnvError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(EnvError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Sets or overwrites `name` in the process environment.
pub fn set(name: &str, value: impl AsRef<OsStr>) -> Result<(), EnvError> {
    validate_name(name)?;
    let value = value.as_ref();
    if value.to_string_lossy().contains('\0') {
        return Err(EnvError::InvalidValue(name.to_string()));
    }

    debug!("setenv {}={}", name, value.to_string_lossy());
    env::set_var(name, value);
    Ok(())
}

pub fn unset(name: &str) -> Result<(), EnvError> {
    validate_name(name)?;
    debug!("unsetenv {}", name);
    env::remove_var(name);
    Ok(())
}

pub fn get(name: &str) -> Option<String> {
    env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

pub fn sorted_vars() -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();
    vars.sort();
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_and_get() -> Result<(), EnvError> {
        set("HUSK_TEST_VAR", "test value")?;
        assert_eq!(get("HUSK_TEST_VAR").as_deref(), Some("test value"));
        unset("HUSK_TEST_VAR")?;
        assert_eq!(get("HUSK_TEST_VAR"), None);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_set_twice_keeps_one_entry() -> Result<(), EnvError> {
        set("HUSK_FOO", "bar")?;
        set("HUSK_FOO", "bar")?;
        let count = sorted_vars()
            .iter()
            .filter(|(k, v)| k == "HUSK_FOO" && v == "bar")
            .count();
        assert_eq!(count, 1);
        unset("HUSK_FOO")
    }

    #[test]
    fn test_invalid_var_name() {
        assert!(set("", "value").is_err());
        assert!(set("A=B", "value").is_err());
        assert!(unset("A=B").is_err());
    }

    #[test]
    fn test_invalid_value() {
        assert!(matches!(
            set("HUSK_NUL", "a\0b"),
            Err(EnvError::InvalidValue(_))
        ));
    }

    #[test]
    #[serial]
    fn test_sorted_vars_is_sorted() {
        let vars = sorted_vars();
        assert!(vars.windows(2).all(|w| w[0] <= w[1]));
    }
}
