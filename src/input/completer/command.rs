use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::core::aliases::AliasTable;
use crate::core::commands::BUILTIN_NAMES;
use crate::path::ExecutableResolver;

/// Candidates for the first word of a command.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self::default();
        completer.refresh_commands();
        completer
    }

    pub fn refresh_commands(&mut self) {
        self.commands = ExecutableResolver::from_env().executables();
        self.commands
            .extend(BUILTIN_NAMES.iter().map(|name| name.to_string()));
    }

    pub fn update_aliases(&mut self, aliases: &AliasTable) {
        self.aliases = aliases.list_all().map(|(name, _)| name.to_string()).collect();
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let mut matches: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        matches.extend(
            self.aliases
                .iter()
                .filter(|alias| alias.starts_with(input))
                .map(|alias| Pair {
                    display: format!("{} (alias)", alias),
                    replacement: format!("{} ", alias),
                }),
        );

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_offered() {
        let completer = CommandCompleter::new();
        let names: Vec<String> = completer
            .complete_command("unse")
            .into_iter()
            .map(|pair| pair.display)
            .collect();
        assert!(names.contains(&"unsetenv".to_string()));
    }

    #[test]
    fn test_aliases_are_offered() {
        let mut table = AliasTable::new();
        table.add_or_update("zzhusk", "ls -l");

        let mut completer = CommandCompleter::default();
        completer.update_aliases(&table);

        let matches = completer.complete_command("zzh");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display, "zzhusk (alias)");
        assert_eq!(matches[0].replacement, "zzhusk ");
    }
}
