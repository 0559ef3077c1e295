use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Filesystem candidates for argument words.
#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix, shown_dir) = split_input(incomplete);

        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(&prefix) || (prefix.is_empty() && name.starts_with('.')) {
                    return None;
                }

                let shown = format!("{}{}", shown_dir, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", shown),
                        replacement: format!("{}/", shown),
                    }
                } else {
                    Pair {
                        display: shown.clone(),
                        replacement: format!("{} ", shown),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// (directory to read, file name prefix, directory part as typed).
fn split_input(incomplete: &str) -> (PathBuf, String, String) {
    match incomplete.rfind('/') {
        Some(slash) => {
            let (shown_dir, prefix) = incomplete.split_at(slash + 1);
            let dir = if shown_dir == "/" {
                PathBuf::from("/")
            } else {
                Path::new(shown_dir).to_path_buf()
            };
            (dir, prefix.to_string(), shown_dir.to_string())
        }
        None => (PathBuf::from("."), incomplete.to_string(), String::new()),
    }
}
