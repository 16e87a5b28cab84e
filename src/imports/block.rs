//! Import block model and parser.

use std::collections::HashMap;

use super::group::{Classifier, Group};

/// Comment marker recognized inside an import block.
pub const COMMENT_MARKER: &str = "//";

/// A comment attached to one import entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportComment {
    /// Comment text including the leading `//`, verbatim.
    pub text: String,
    /// True when the comment trailed the declaration on the same line.
    pub same_line: bool,
}

/// Structured model of one `import ( ... )` block.
///
/// Paths keep their quote characters; the quoted string is the key for the
/// comment and alias maps. Duplicate paths within one block are not
/// supported, the maps would silently merge their records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportBlock {
    pub(super) groups: [Vec<String>; Group::COUNT],
    pub(super) comments: HashMap<String, Vec<ImportComment>>,
    pub(super) aliases: HashMap<String, String>,
}

impl ImportBlock {
    /// Parses raw block lines in a single backward pass.
    ///
    /// Lines are trimmed first and blank lines dropped. Scanning bottom-up,
    /// a whole-line comment attaches to the nearest declaration below it;
    /// comments with no declaration below (dangling) are discarded. Comment
    /// detection is a plain `//` substring search, so a marker inside a
    /// quoted path is misread as a comment start.
    pub fn parse<I, S>(lines: I, classifier: &Classifier<'_>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        let mut block = Self::default();
        let mut current: Option<String> = None;

        for line in lines.iter().rev() {
            if line.starts_with(COMMENT_MARKER) {
                let Some(path) = &current else { continue };
                block.comments.entry(path.clone()).or_default().push(ImportComment {
                    text: line.clone(),
                    same_line: false,
                });
                continue;
            }

            let (path, alias, comment) = split_declaration(line);
            if let Some(alias) = alias {
                block.aliases.insert(path.clone(), alias);
            }
            if let Some(text) = comment {
                block.comments.entry(path.clone()).or_default().push(ImportComment {
                    text,
                    same_line: true,
                });
            }
            let group = classifier.classify(&path);
            block.groups[group as usize].push(path.clone());
            current = Some(path);
        }

        block
    }

    /// Paths collected into `group`, in parse order (bottom-up, unsorted).
    pub fn paths(&self, group: Group) -> &[String] {
        &self.groups[group as usize]
    }

    /// Comment records attached to `path`, in parse order.
    pub fn comments(&self, path: &str) -> &[ImportComment] {
        self.comments.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Alias recorded for `path`, if any.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    /// True when the block holds no declaration at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

/// Splits one declaration line into `(path, alias, trailing comment)`.
///
/// The comment split happens at the first `//` occurrence and keeps the
/// remainder verbatim (lint directives are spacing-sensitive). The
/// declaration part is whitespace-split: one token is a bare path, two are
/// alias then path, anything past the second token is dropped.
fn split_declaration(line: &str) -> (String, Option<String>, Option<String>) {
    let (declaration, comment) = match line.find(COMMENT_MARKER) {
        Some(at) if at > 0 => {
            let (declaration, rest) = line.split_at(at);
            (declaration.trim_end(), Some(rest.to_string()))
        }
        _ => (line, None),
    };

    let mut tokens = declaration.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    match tokens.next() {
        Some(path) => (path.to_string(), Some(first), comment),
        None => (first, None, comment),
    }
}
