use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Highlighter that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors a command line word by word. Whitespace is kept as typed so
    /// the cursor position rustyline tracks stays valid.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut command_position = true;

        for (kind, piece) in pieces(input) {
            let style = match kind {
                Piece::Space => None,
                Piece::Operator => {
                    command_position = true;
                    Some(Style::builder().foreground(Color::Magenta).bold().build())
                }
                Piece::Word if command_position => {
                    command_position = false;
                    Some(Style::builder().foreground(Color::Cyan).bold().build())
                }
                Piece::Word if piece.starts_with('-') => {
                    Some(Style::builder().foreground(Color::Yellow).build())
                }
                Piece::Word if piece.contains('$') => {
                    Some(Style::builder().foreground(Color::Green).build())
                }
                Piece::Word => None,
            };

            match style {
                Some(style) => out.push_str(&piece.style(style).to_string()),
                None => out.push_str(piece),
            }
        }

        out
    }

    pub fn highlight_prompt(&self, prompt: &str) -> String {
        if !self.enabled() {
            return prompt.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Blue).bold().build();
        prompt.style(prompt_style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Space,
    Operator,
    Word,
}

/// Splits `input` into whitespace runs, `&&`/`||` operators and words.
/// Operators split words the same way `Chain::parse` does, so `a&&b` is
/// three pieces. Concatenating the pieces gives back `input`.
fn pieces(input: &str) -> Vec<(Piece, &str)> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut current: Option<Piece> = None;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if (c == '&' || c == '|') && chars.peek().map(|&(_, next)| next) == Some(c) {
            if let Some(kind) = current.take() {
                result.push((kind, &input[start..i]));
            }
            chars.next();
            result.push((Piece::Operator, &input[i..i + 2]));
            start = i + 2;
            continue;
        }

        let kind = if c.is_whitespace() {
            Piece::Space
        } else {
            Piece::Word
        };
        match current {
            Some(previous) if previous != kind => {
                result.push((previous, &input[start..i]));
                start = i;
            }
            None => start = i,
            _ => {}
        }
        current = Some(kind);
    }

    if let Some(kind) = current {
        result.push((kind, &input[start..]));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pieces_keep_whitespace() {
        assert_eq!(
            pieces("ls  -l\t&& x"),
            vec![
                (Piece::Word, "ls"),
                (Piece::Space, "  "),
                (Piece::Word, "-l"),
                (Piece::Space, "\t"),
                (Piece::Operator, "&&"),
                (Piece::Space, " "),
                (Piece::Word, "x"),
            ]
        );
        assert!(pieces("").is_empty());
    }

    #[test]
    fn test_operators_split_words() {
        assert_eq!(
            pieces("a&&b||c"),
            vec![
                (Piece::Word, "a"),
                (Piece::Operator, "&&"),
                (Piece::Word, "b"),
                (Piece::Operator, "||"),
                (Piece::Word, "c"),
            ]
        );
        assert_eq!(
            pieces("a&b|c"),
            vec![(Piece::Word, "a&b|c")]
        );
        assert_eq!(
            pieces("&&&"),
            vec![(Piece::Operator, "&&"), (Piece::Word, "&")]
        );
    }

    #[test]
    fn test_pieces_rebuild_input() {
        for line in ["", "echo hi", " a&&b ||  c ", "x|||y", "&&"] {
            let rebuilt: String = pieces(line).into_iter().map(|(_, piece)| piece).collect();
            assert_eq!(rebuilt, line);
        }
    }

    #[test]
    fn test_plain_is_identity() {
        let highlighter = SyntaxHighlighter::plain();
        let line = "  ls -la  && echo $?";
        assert_eq!(highlighter.highlight_command(line), line);
        assert_eq!(highlighter.highlight_error("boom"), "boom");
        assert_eq!(highlighter.highlight_prompt("husk:/$ "), "husk:/$ ");
    }
}
