//! Canonical serialization of an [`ImportBlock`].

use super::block::ImportBlock;
use super::group::Group;

const INDENT: &str = "\t";
const BLANK: &str = " ";
const LINEBREAK: &str = "\n";

/// Serializes a block into its canonical text: groups in fixed order, paths
/// sorted bytewise within each group, one blank line between non-empty
/// groups, no trailing blank line.
///
/// Comment records are walked in reverse of collection order, which restores
/// the original top-to-bottom reading order for preceding comments. When
/// several same-line records exist for one path, the earliest collected one
/// wins (later visits in the reverse walk overwrite the remembered text).
pub fn format_block(block: &ImportBlock) -> String {
    let mut segments: Vec<String> = Vec::new();

    for &group in Group::all() {
        let mut paths = block.paths(group).to_vec();
        paths.sort();

        for path in &paths {
            let mut same_line = None;
            for record in block.comments(path).iter().rev() {
                if record.same_line {
                    same_line = Some(record.text.as_str());
                    continue;
                }
                segments.push(format!("{INDENT}{}{LINEBREAK}", record.text));
            }

            let mut line = String::from(INDENT);
            if let Some(alias) = block.alias(path) {
                line.push_str(alias);
                line.push_str(BLANK);
            }
            line.push_str(path);
            if let Some(comment) = same_line {
                line.push_str(BLANK);
                line.push_str(comment);
            }
            line.push_str(LINEBREAK);
            segments.push(line);
        }

        if !paths.is_empty() {
            segments.push(LINEBREAK.to_string());
        }
    }

    // The last non-empty group needs no separator after it.
    if segments.last().map(String::as_str) == Some(LINEBREAK) {
        segments.pop();
    }

    segments.concat()
}
