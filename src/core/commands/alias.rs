use super::{Command, CommandError, Outcome};
use crate::core::aliases::AliasTable;
use crate::core::state::{SessionState, STATUS_SUCCESS};

/// `alias`, `alias name...` and `alias name = value...`.
///
/// The definition form needs `=` as its own word; `name=value` is taken as
/// a name to print.
#[derive(Clone, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn execute(&self, args: &[String], session: &mut SessionState) -> Result<Outcome, CommandError> {
        match args {
            [_, eq] if eq == "=" => return Err(CommandError::Usage("alias name = value")),
            [name, eq, value @ ..] if eq == "=" => {
                session.aliases_mut().add_or_update(name, &value.join(" "));
            }
            names => {
                for line in listing(session.aliases(), names) {
                    println!("{}", line);
                }
            }
        }

        Ok(Outcome::Continue(STATUS_SUCCESS))
    }
}

/// Lines printed for `alias` (every alias) or `alias name...` (the named
/// ones that exist, in argument order).
fn listing(aliases: &AliasTable, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return aliases
            .list_all()
            .filter_map(|(name, _)| aliases.render(name))
            .collect();
    }

    names.iter().filter_map(|name| aliases.render(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(session: &mut SessionState, line: &str) -> Result<Outcome, CommandError> {
        let args: Vec<String> = line.split_whitespace().map(String::from).collect();
        AliasCommand::new().execute(&args, session)
    }

    #[test]
    fn test_alias_add() {
        let mut session = SessionState::new();
        assert!(alias(&mut session, "ll = ls -l").is_ok());
        assert_eq!(session.aliases().lookup("ll"), Some("ls -l"));
        assert_eq!(session.aliases().render("ll").unwrap(), "ll='ls -l'");
    }

    #[test]
    fn test_alias_update() {
        let mut session = SessionState::new();
        alias(&mut session, "ll = ls -l").unwrap();
        alias(&mut session, "ll = ls -la").unwrap();
        assert_eq!(session.aliases().len(), 1);
        assert_eq!(session.aliases().lookup("ll"), Some("ls -la"));
    }

    #[test]
    fn test_alias_list() {
        let mut session = SessionState::new();
        assert!(listing(session.aliases(), &[]).is_empty());
        assert_eq!(alias(&mut session, "").unwrap(), Outcome::Continue(0));

        alias(&mut session, "ll = ls -l").unwrap();
        alias(&mut session, "gs = git status").unwrap();
        assert_eq!(
            listing(session.aliases(), &[]),
            vec!["gs='git status'", "ll='ls -l'"]
        );
    }

    #[test]
    fn test_alias_print_named() {
        let mut session = SessionState::new();
        alias(&mut session, "ll = ls -l").unwrap();
        alias(&mut session, "gs = git status").unwrap();

        let names: Vec<String> = ["ll", "nope", "gs"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            listing(session.aliases(), &names),
            vec!["ll='ls -l'", "gs='git status'"]
        );
    }

    #[test]
    fn test_alias_print_unknown_is_not_an_error() {
        let mut session = SessionState::new();
        assert_eq!(alias(&mut session, "nope other").unwrap(), Outcome::Continue(0));
        assert!(session.aliases().is_empty());
    }

    #[test]
    fn test_single_token_form_is_not_a_definition() {
        let mut session = SessionState::new();
        alias(&mut session, "ll=ls").unwrap();
        assert!(session.aliases().is_empty());
    }

    #[test]
    fn test_missing_value() {
        let mut session = SessionState::new();
        assert!(matches!(
            alias(&mut session, "ll ="),
            Err(CommandError::Usage(_))
        ));
        assert!(session.aliases().is_empty());
    }
}
