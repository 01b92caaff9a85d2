/// Reverse a string over its Unicode scalar values.
///
/// Multi-byte characters are kept intact; combining sequences are not
/// treated as a unit.
pub fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}
