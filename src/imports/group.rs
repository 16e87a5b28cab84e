//! Import path classification.

/// Quote characters stripped from a path before classification.
const QUOTE_CHARS: [char; 3] = ['"', '`', '\\'];

/// Position of an import path within the canonical block layout.
///
/// Groups are emitted in declaration order: standard library first, then
/// 3rd-party packages, then packages under the configured local prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    /// Go standard library packages.
    Standard,
    /// 3rd-party packages.
    External,
    /// Packages matching the local prefix.
    Local,
}

impl Group {
    /// Number of groups (sizes the per-group storage).
    pub const COUNT: usize = 3;

    /// All groups in canonical emission order.
    pub fn all() -> &'static [Group] {
        &[Group::Standard, Group::External, Group::Local]
    }
}

/// Classifies import paths against a local prefix and a standard-library
/// table.
///
/// The table is injected as a sorted slice so it can be swapped per Go
/// version in tests; [`Classifier::new`] wires in the bundled table.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    local_prefix: &'a str,
    std_packages: &'a [&'a str],
}

impl<'a> Classifier<'a> {
    /// Classifier over the bundled Go standard-library table.
    ///
    /// An empty `local_prefix` disables the `Local` group entirely.
    pub fn new(local_prefix: &'a str) -> Self {
        Self::with_table(local_prefix, super::stdlib::GO_STD_PACKAGES)
    }

    /// Classifier over a caller-supplied table. The slice must be sorted.
    pub fn with_table(local_prefix: &'a str, std_packages: &'a [&'a str]) -> Self {
        Self {
            local_prefix,
            std_packages,
        }
    }

    /// Classifies one literal (quoted) path string.
    ///
    /// The local prefix is tested first: a prefix that happens to equal a
    /// standard-library name still claims the path as [`Group::Local`].
    pub fn classify(&self, path: &str) -> Group {
        let name = path.trim_matches(|c| QUOTE_CHARS.contains(&c));

        if !self.local_prefix.is_empty() && name.starts_with(self.local_prefix) {
            return Group::Local;
        }
        if self.std_packages.binary_search(&name).is_ok() {
            return Group::Standard;
        }
        Group::External
    }
}
