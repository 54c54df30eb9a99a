pub const DEFAULT_PREFIX_LEN: usize = 12;

/// Addresses at or under this many characters are shown whole.
const MAX_UNTRIMMED: usize = 16;
const TAIL_LEN: usize = 4;

/// Shorten a long address to its first `prefix_len` characters, `...`, and its last four.
///
/// `0x1234567890abcdef1234` -> `0x1234567890...1234`. Counts characters, not bytes.
pub fn trim_address(address: &str, prefix_len: usize) -> String {
    let count = address.chars().count();
    if count <= MAX_UNTRIMMED {
        return address.to_string();
    }

    let head_end = address
        .char_indices()
        .nth(prefix_len)
        .map_or(address.len(), |(idx, _)| idx);
    let tail_start = address
        .char_indices()
        .nth(count - TAIL_LEN)
        .map_or(address.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(head_end + 3 + address.len() - tail_start);
    out.push_str(&address[..head_end]);
    out.push_str("...");
    out.push_str(&address[tail_start..]);
    out
}
