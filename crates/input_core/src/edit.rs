//! Keystroke guard: decides whether a proposed edit leaves valid numeric text.
//!
//! Validation always runs on the *resulting* text, i.e. the whole field
//! content after the replacement is applied, never on the inserted fragment
//! alone. Inserting "." is fine in "12" and refused in "1.2".

use crate::selection::EditRange;
use crate::text::replace_char_range;

pub const DECIMAL_POINT: char = '.';

/// `true` if every char of `s` is an ASCII digit. The empty string is valid.
///
/// # Examples
///
/// ```
/// use input_core::is_valid_int;
///
/// assert!(is_valid_int("123"));
/// assert!(is_valid_int(""));
/// assert!(!is_valid_int("1.0"));
/// assert!(!is_valid_int("1a2"));
/// ```
pub fn is_valid_int(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// `true` if `s` consists of ASCII digits and at most one decimal point.
///
/// # Examples
///
/// ```
/// use input_core::is_valid_decimal;
///
/// assert!(is_valid_decimal("1.0"));
/// assert!(is_valid_decimal("."));
/// assert!(!is_valid_decimal("1.0.1"));
/// assert!(!is_valid_decimal("1a2"));
/// ```
pub fn is_valid_decimal(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || c == DECIMAL_POINT) && decimal_point_count(s) <= 1
}

pub fn decimal_point_count(s: &str) -> usize {
    s.chars().filter(|&c| c == DECIMAL_POINT).count()
}

/// Which characters a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    /// Digits only.
    Integer,
    /// Digits and a single decimal point.
    Decimal,
}

impl EditMode {
    #[inline]
    pub fn accepts(self, text: &str) -> bool {
        match self {
            Self::Integer => is_valid_int(text),
            Self::Decimal => is_valid_decimal(text),
        }
    }
}

/// One edit attempt: replace `range` of `current` with `inserted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditProposal<'a> {
    pub current: &'a str,
    pub range: EditRange,
    pub inserted: &'a str,
}

impl<'a> EditProposal<'a> {
    pub fn new(current: &'a str, range: EditRange, inserted: &'a str) -> Self {
        Self {
            current,
            range,
            inserted,
        }
    }

    /// The field content after the edit, or `None` if `range` falls outside
    /// `current`.
    pub fn resulting_text(&self) -> Option<String> {
        replace_char_range(self.current, self.range, self.inserted)
    }

    /// How far text after the edit shifts, in chars.
    pub fn offset_delta(&self) -> isize {
        self.inserted.chars().count() as isize - self.range.len as isize
    }
}

/// Accept or refuse `proposal` under `mode`.
///
/// On acceptance `on_change` receives the resulting text; a refused edit has
/// no side effects.
pub fn should_change(
    proposal: &EditProposal<'_>,
    mode: EditMode,
    on_change: impl FnOnce(&str),
) -> bool {
    let Some(resulting) = proposal.resulting_text() else {
        log::trace!(target: "numfield.edit", "refused out-of-range edit: {proposal:?}");
        return false;
    };

    if !mode.accepts(&resulting) {
        log::trace!(target: "numfield.edit", "refused {resulting:?} in {mode:?} mode");
        return false;
    }

    log::trace!(target: "numfield.edit", "accepted {:?} -> {resulting:?}", proposal.current);
    on_change(&resulting);
    true
}

/// `true` only when both texts parse as `f64` and the numbers differ.
///
/// "1.40" and "1.4" do not change the value; neither does any edit from or
/// to text that is not a complete number ("", ".").
pub fn changes_value(current: &str, resulting: &str) -> bool {
    match (current.parse::<f64>(), resulting.parse::<f64>()) {
        (Ok(before), Ok(after)) => before != after,
        _ => false,
    }
}
