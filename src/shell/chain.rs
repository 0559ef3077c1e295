use log::debug;

use crate::core::commands::Outcome;

/// How a link connects to the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOperator {
    None, // end of line
    And,  // &&
    Or,   // ||
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub words: Vec<String>,
    pub operator: ChainOperator,
}

/// The links of one input line, in order. The last link's operator is
/// always `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    links: Vec<ChainLink>,
}

/// Splits on runs of space, tab and newline. No quoting.
pub fn split_words(segment: &str) -> Vec<String> {
    segment
        .split([' ', '\t', '\n'])
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

impl Chain {
    /// Only the two-character `&&` and `||` separate links; a lone `&` or
    /// `|` stays in the word it appears in.
    pub fn parse(input: &str) -> Self {
        let mut links = Vec::new();
        let mut current = String::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '&' if chars.peek() == Some(&'&') => {
                    chars.next(); // consume second '&'
                    Self::add_link(&mut links, &current, ChainOperator::And);
                    current.clear();
                }
                '|' if chars.peek() == Some(&'|') => {
                    chars.next(); // consume second '|'
                    Self::add_link(&mut links, &current, ChainOperator::Or);
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        Self::add_link(&mut links, &current, ChainOperator::None);

        Self { links }
    }

    fn add_link(links: &mut Vec<ChainLink>, segment: &str, operator: ChainOperator) {
        links.push(ChainLink {
            words: split_words(segment),
            operator,
        });
    }

    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// Runs the links with `&&`/`||` short-circuiting.
    ///
    /// A skipped link leaves the status alone, so the next operator is
    /// tested against the last link that actually ran (or `status` if none
    /// has). Empty links are skipped without touching the status. An
    /// `Outcome::Exit` stops evaluation immediately.
    pub fn evaluate<F, E>(&self, mut status: i32, mut run: F) -> Result<Outcome, E>
    where
        F: FnMut(&[String]) -> Result<Outcome, E>,
    {
        let mut gate = ChainOperator::None;

        for (index, link) in self.links.iter().enumerate() {
            let runnable = match gate {
                ChainOperator::None => true,
                ChainOperator::And => status == 0,
                ChainOperator::Or => status != 0,
            };
            gate = link.operator;

            if !runnable {
                debug!("skipping link {} {:?} (status {})", index, link.words, status);
                continue;
            }
            if link.words.is_empty() {
                continue;
            }

            match run(&link.words)? {
                Outcome::Continue(next) => status = next,
                Outcome::Exit(code) => return Ok(Outcome::Exit(code)),
            }
        }

        Ok(Outcome::Continue(status))
    }
}
