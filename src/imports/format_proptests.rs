use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct RawEntry {
    path: String,
    alias: Option<String>,
    same_line: Option<String>,
    preceding: Vec<String>,
}

/// Quoted import path, one to three lowercase segments.
fn path_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(/[a-z]{1,6}){0,2}".prop_map(|path| format!("\"{path}\""))
}

/// Import alias, including the blank identifier.
fn alias_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9]{0,4}".prop_map(|alias| alias)
}

/// Comment text starting with the marker; may itself contain further `//`.
fn comment_strategy() -> impl Strategy<Value = String> {
    "//[ a-z:/.-]{0,16}".prop_map(|comment| comment)
}

fn entry_strategy() -> impl Strategy<Value = RawEntry> {
    (
        path_strategy(),
        proptest::option::of(alias_strategy()),
        proptest::option::of(comment_strategy()),
        proptest::collection::vec(comment_strategy(), 0..3),
    )
        .prop_map(|(path, alias, same_line, preceding)| RawEntry {
            path,
            alias,
            same_line,
            preceding,
        })
}

/// Entries with unique paths; duplicate paths are outside the contract.
fn entries_strategy() -> impl Strategy<Value = Vec<RawEntry>> {
    proptest::collection::vec(entry_strategy(), 0..6).prop_map(|mut entries| {
        let mut seen = std::collections::HashSet::new();
        entries.retain(|entry| seen.insert(entry.path.clone()));
        entries
    })
}

fn local_prefix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,4}".prop_map(|prefix| prefix)]
}

/// Renders entries as raw block lines, blank-line separated, with trailing
/// dangling comments.
fn raw_block(entries: &[RawEntry], dangling: &[String]) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        for comment in &entry.preceding {
            lines.push(format!("\t{comment}"));
        }
        let mut decl = String::from("\t");
        if let Some(alias) = &entry.alias {
            decl.push_str(alias);
            decl.push(' ');
        }
        decl.push_str(&entry.path);
        if let Some(comment) = &entry.same_line {
            decl.push(' ');
            decl.push_str(comment);
        }
        lines.push(decl);
        lines.push(String::new());
    }
    for comment in dangling {
        lines.push(format!("\t{comment}"));
    }
    lines.join("\n")
}

fn canonical(text: &str, local_prefix: &str) -> String {
    let classifier = Classifier::new(local_prefix);
    format_block(&ImportBlock::parse(text.split('\n'), &classifier))
}

proptest! {
    /// Formatting an already-formatted block changes nothing.
    #[test]
    fn prop_format_parse_is_idempotent(
        entries in entries_strategy(),
        dangling in proptest::collection::vec(comment_strategy(), 0..2),
        prefix in local_prefix_strategy()
    ) {
        let raw = raw_block(&entries, &dangling);
        let once = canonical(&raw, &prefix);
        let twice = canonical(&once, &prefix);

        prop_assert_eq!(once, twice);
    }

    /// Every emitted path sits in the group its classification demands.
    #[test]
    fn prop_entries_land_in_their_group(
        entries in entries_strategy(),
        prefix in local_prefix_strategy()
    ) {
        let once = canonical(&raw_block(&entries, &[]), &prefix);
        let classifier = Classifier::new(&prefix);
        let block = ImportBlock::parse(once.split('\n'), &classifier);

        for &group in Group::all() {
            for path in block.paths(group) {
                prop_assert_eq!(classifier.classify(path), group);
            }
        }
    }

    /// Within each group the emitted paths are in byte order. Reparsing
    /// collects them bottom-up, so the parse order is reversed here first.
    #[test]
    fn prop_groups_are_sorted(
        entries in entries_strategy(),
        prefix in local_prefix_strategy()
    ) {
        let once = canonical(&raw_block(&entries, &[]), &prefix);
        let classifier = Classifier::new(&prefix);
        let block = ImportBlock::parse(once.split('\n'), &classifier);

        for &group in Group::all() {
            let mut paths = block.paths(group).to_vec();
            paths.reverse();
            let mut sorted = paths.clone();
            sorted.sort();
            prop_assert_eq!(paths, sorted);
        }
    }

    /// Paths, aliases, and comments all survive one formatting pass.
    /// Comments are compared trailing-trimmed, line trimming normalizes
    /// that much on the first parse.
    #[test]
    fn prop_declarations_survive_formatting(
        entries in entries_strategy(),
        prefix in local_prefix_strategy()
    ) {
        let once = canonical(&raw_block(&entries, &[]), &prefix);

        for entry in &entries {
            prop_assert!(once.contains(&entry.path));
            if let Some(alias) = &entry.alias {
                let declaration = format!("\t{} {}", alias, entry.path);
                prop_assert!(once.contains(&declaration));
            }
            if let Some(comment) = &entry.same_line {
                let trailer = format!("{} {}\n", entry.path, comment.trim_end());
                prop_assert!(once.contains(&trailer));
            }
            for comment in &entry.preceding {
                let line = format!("\t{}\n", comment.trim_end());
                prop_assert!(once.contains(&line));
            }
        }
    }

    /// One declaration line out per entry in; dangling comments are gone.
    #[test]
    fn prop_declaration_count_is_preserved(
        entries in entries_strategy(),
        dangling in proptest::collection::vec(comment_strategy(), 0..2),
        prefix in local_prefix_strategy()
    ) {
        let once = canonical(&raw_block(&entries, &dangling), &prefix);
        let declarations = once
            .lines()
            .filter(|line| line.starts_with('\t') && !line.starts_with("\t//"))
            .count();

        prop_assert_eq!(declarations, entries.len());
    }
}
