//! Various utility functions

pub fn is_hiragana(c: char) -> bool {
    (0x3040..=0x309F).contains(&(c as u32))
}

pub fn is_katakana(c: char) -> bool {
    (0x30A0..=0x30FF).contains(&(c as u32))
}

// the characters isspace() accepts in the "C" locale
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn remove_c_spaces(text: &str) -> String {
    text.chars().filter(|&c| !is_c_space(c)).collect()
}

/// Returns the length in bytes of the characters `left` and `right` start with in common.
/// Returns zero if the strings are equal.
pub fn common_prefix_len(left: &str, right: &str) -> usize {
    if left == right {
        return 0;
    }
    left.chars()
        .zip(right.chars())
        .take_while(|(l, r)| l == r)
        .map(|(l, _)| l.len_utf8())
        .sum()
}
