//! Macro argument parsing
//!
//! `[[Movie(sample.webm, style=width:320px; height:240px)]]` arrives as the
//! content string `sample.webm, style=width:320px; height:240px`. Arguments
//! are comma-separated, `\,` escapes a comma, and `name=value` with a plain
//! identifier as name is a named argument.

use indexmap::IndexMap;

/// Parsed macro arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroArgs {
    /// Positional arguments, in order
    pub positional: Vec<String>,
    /// Named arguments; a repeated name keeps the last value
    pub named: IndexMap<String, String>,
}

impl MacroArgs {
    /// Arguments with a single positional reference
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            positional: vec![reference.into()],
            named: IndexMap::new(),
        }
    }

    /// Add a named argument
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Parse macro content
    pub fn parse(content: &str) -> Self {
        let mut args = Self::default();

        for raw in split_unescaped(content) {
            match named_argument(&raw) {
                Some((name, value)) => {
                    args.named.insert(name.to_string(), value.to_string());
                }
                None => {
                    let arg = raw.trim();
                    if !arg.is_empty() {
                        args.positional.push(arg.to_string());
                    }
                }
            }
        }

        args
    }

    /// The movie reference, i.e. the first positional argument
    pub fn first(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    /// A named argument
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }
}

fn split_unescaped(content: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

fn named_argument(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once('=')?;
    let name = name.trim();
    let is_identifier = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some((name, value.trim()))
}
