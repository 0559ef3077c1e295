use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::core::aliases::AliasTable;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// rustyline helper: completion and highlighting for the prompt line.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn update_aliases(&mut self, aliases: &AliasTable) {
        self.command_completer.update_aliases(aliases);
    }
}

/// Byte offset where the word under the cursor starts, and whether that
/// word is in command position (first word of a link).
fn word_start(line: &str) -> (usize, bool) {
    let start = line
        .rfind([' ', '\t', '\n'])
        .map_or(0, |pos| pos + 1);

    let before = line[..start].trim_end();
    let command_position =
        before.is_empty() || before.ends_with("&&") || before.ends_with("||");
    (start, command_position)
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(self.highlighter.highlight_prompt(prompt))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let (start, command_position) = word_start(line_up_to_cursor);
        let word = &line_up_to_cursor[start..];

        let matches = if command_position {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((start, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_start() {
        assert_eq!(word_start(""), (0, true));
        assert_eq!(word_start("ec"), (0, true));
        assert_eq!(word_start("ls sr"), (3, false));
        assert_eq!(word_start("ls && ca"), (6, true));
        assert_eq!(word_start("false || "), (9, true));
        assert_eq!(word_start("cat a b"), (6, false));
    }
}
