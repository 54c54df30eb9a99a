//! Class-list joining with Tailwind conflict resolution.

use tailwind_fuse::merge::tw_merge;

/// Join class lists, letting later utilities override earlier conflicting ones.
///
/// Each token may hold several space-separated classes; empty tokens are skipped.
/// Conflicts are resolved by `tailwind_fuse`, so the winner is the last class of a
/// group under the same variants. `["px-2 py-1", "p-3"]` -> `"p-3"`, `["a", "b"]` -> `"a b"`.
pub fn merge_classes<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = join_classes(tokens);
    if joined.is_empty() {
        return joined;
    }
    tw_merge(joined.as_str())
}

/// Single-space join of every class in every token, in call order.
pub fn join_classes<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for token in tokens {
        for class in token.as_ref().split_whitespace() {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(class);
        }
    }
    joined
}
