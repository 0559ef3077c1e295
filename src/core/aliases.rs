use std::collections::BTreeMap;

/// Alias name to replacement text. Iteration order is by name.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    aliases: BTreeMap<Box<str>, Box<str>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    pub fn add_or_update(&mut self, name: &str, value: &str) {
        self.aliases.insert(name.into(), value.into());
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| &**s)
    }

    pub fn list_all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// `name='value'`, the form used when listing.
    pub fn render(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|value| format!("{}='{}'", name, value))
    }

    /// Rewrites word 0 once. The replacement is split on whitespace and is
    /// not itself looked up again.
    pub fn expand(&self, words: &[String]) -> Vec<String> {
        let Some((first, rest)) = words.split_first() else {
            return Vec::new();
        };

        match self.lookup(first) {
            Some(value) => value
                .split_whitespace()
                .map(String::from)
                .chain(rest.iter().cloned())
                .collect(),
            None => words.to_vec(),
        }
    }
}
