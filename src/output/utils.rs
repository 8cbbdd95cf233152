//! Shared text helpers

/// Header rule character.
pub const HEADER_RULE: char = '=';

/// File name rule character.
pub const FILE_RULE: char = '-';

/// A run of `rule` as long as `text`, counted in characters.
pub fn underline(text: &str, rule: char) -> String {
    std::iter::repeat_n(rule, text.chars().count()).collect()
}
