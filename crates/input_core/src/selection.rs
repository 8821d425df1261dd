//! Text selection and replacement spans.

/// A text selection as a char range.
///
/// The range is always normalized such that `start <= end`. Offsets count
/// Unicode scalar values, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start char offset of the selection (inclusive).
    pub start: usize,
    /// End char offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width selection, i.e. a plain caret.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Pull both ends back to at most `len` chars, e.g. after the text under
    /// the selection got shorter.
    #[inline]
    pub fn clamped_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// The span an edit replaces: `len` chars starting at char offset `start`.
///
/// A pure insertion has `len == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditRange {
    pub start: usize,
    pub len: usize,
}

impl EditRange {
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    #[inline]
    pub fn insertion(at: usize) -> Self {
        Self { start: at, len: 0 }
    }

    /// Exclusive end offset, saturating instead of overflowing.
    #[inline]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }
}

impl From<SelectionRange> for EditRange {
    fn from(sel: SelectionRange) -> Self {
        Self::new(sel.start, sel.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn selection_range_len() {
        let range = SelectionRange::new(2, 7);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn selection_range_clamps_to_shorter_text() {
        assert_eq!(SelectionRange::caret(5).clamped_to(1), SelectionRange::caret(1));
        assert_eq!(SelectionRange::new(1, 4).clamped_to(2), SelectionRange::new(1, 2));
        assert_eq!(SelectionRange::new(1, 4).clamped_to(9), SelectionRange::new(1, 4));
    }

    #[test]
    fn edit_range_from_selection_replaces_selected_chars() {
        let range = EditRange::from(SelectionRange::new(4, 1));
        assert_eq!(range, EditRange::new(1, 3));
        assert_eq!(range.end(), 4);
    }

    #[test]
    fn edit_range_end_saturates() {
        assert_eq!(EditRange::new(usize::MAX, 2).end(), usize::MAX);
    }
}
