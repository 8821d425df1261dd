//! Char-offset text utilities.
//!
//! Edits and cursors are addressed in Unicode scalar values. These helpers
//! translate those offsets into byte indices for slicing `str`s.

use crate::selection::{EditRange, SelectionRange};

/// Number of Unicode scalar values in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the char at `char_offset`, or `s.len()` for the offset one
/// past the last char. Returns `None` beyond that.
///
/// # Examples
///
/// ```
/// use input_core::byte_index_of_char;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(byte_index_of_char(s, 0), Some(0));
/// assert_eq!(byte_index_of_char(s, 1), Some(1));
/// assert_eq!(byte_index_of_char(s, 2), Some(4));
/// assert_eq!(byte_index_of_char(s, 3), Some(5));
/// assert_eq!(byte_index_of_char(s, 4), None);
/// ```
pub fn byte_index_of_char(s: &str, char_offset: usize) -> Option<usize> {
    let mut count = 0usize;
    for (idx, _) in s.char_indices() {
        if count == char_offset {
            return Some(idx);
        }
        count += 1;
    }
    (count == char_offset).then_some(s.len())
}

/// Replace the chars covered by `range` with `with`.
///
/// Returns `None` when the range does not lie within `s`.
///
/// # Examples
///
/// ```
/// use input_core::{EditRange, replace_char_range};
///
/// assert_eq!(replace_char_range("123", EditRange::new(1, 2), "10").as_deref(), Some("110"));
/// assert_eq!(replace_char_range("10", EditRange::insertion(1), "1.0").as_deref(), Some("11.00"));
/// assert_eq!(replace_char_range("12", EditRange::new(1, 5), "x"), None);
/// ```
pub fn replace_char_range(s: &str, range: EditRange, with: &str) -> Option<String> {
    let start = byte_index_of_char(s, range.start)?;
    let end = start + byte_index_of_char(&s[start..], range.len)?;

    let mut out = String::with_capacity(s.len() - (end - start) + with.len());
    out.push_str(&s[..start]);
    out.push_str(with);
    out.push_str(&s[end..]);
    Some(out)
}

/// Recover the single replacement that turns `before` into `after`.
///
/// The span is the smallest one outside the common prefix and suffix. When
/// the text repeats around the edit ("11" -> "111") several spans fit; passing
/// the selection that was active in `before` keeps the recovered span next to
/// the caret, since the common suffix may not reach past the selection end.
///
/// # Examples
///
/// ```
/// use input_core::{EditRange, SelectionRange, edit_between};
///
/// assert_eq!(edit_between("12", "152", None), (EditRange::insertion(1), "5".to_string()));
/// assert_eq!(edit_between("1.25", "1.5", None), (EditRange::new(2, 1), String::new()));
/// assert_eq!(
///     edit_between("11", "111", Some(SelectionRange::caret(2))),
///     (EditRange::insertion(2), "1".to_string())
/// );
/// ```
pub fn edit_between(
    before: &str,
    after: &str,
    selection: Option<SelectionRange>,
) -> (EditRange, String) {
    let before_chars: Vec<char> = before.chars().collect();
    let after_chars: Vec<char> = after.chars().collect();
    let shorter = before_chars.len().min(after_chars.len());

    let suffix_limit = selection
        .map(|sel| before_chars.len().saturating_sub(sel.end))
        .unwrap_or(shorter)
        .min(shorter);
    let suffix = before_chars
        .iter()
        .rev()
        .zip(after_chars.iter().rev())
        .take(suffix_limit)
        .take_while(|(a, b)| a == b)
        .count();

    // The prefix may not overlap the suffix in either string.
    let prefix = before_chars
        .iter()
        .zip(&after_chars)
        .take(shorter - suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let replaced = before_chars.len() - prefix - suffix;
    let inserted: String = after_chars[prefix..after_chars.len() - suffix]
        .iter()
        .collect();
    (EditRange::new(prefix, replaced), inserted)
}
