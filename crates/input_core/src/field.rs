//! Per-field state: display text, deferred commits, and cursor overrides.
//!
//! A [`NumberField`] sits between a host text widget and a [`BoundNumber`].
//! Keystrokes are decided synchronously, but the resulting bound-value writes
//! are queued and only run on the next [`NumberField::tick`], i.e. the next
//! turn of the host's event loop. Writing the value from inside the host's
//! edit callback would mutate observed UI state while that callback is still
//! running.

use crate::cursor::{CursorState, cursor_after_replacement};
use crate::edit::{EditMode, EditProposal, changes_value, should_change};
use crate::number::{BoundNumber, NumberValue};
use crate::selection::{EditRange, SelectionRange};
use std::collections::VecDeque;

pub const DEFAULT_PLACEHOLDER: &str = "Number Entry";

/// Construction options for a [`NumberField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOptions {
    /// Shown by the host while the field is empty.
    pub placeholder: String,
    /// Start with empty text instead of "0" when the bound value is zero.
    pub start_blank_if_zero: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            start_blank_if_zero: true,
        }
    }
}

/// A numeric text field bound to an externally owned number.
///
/// # Example
///
/// ```
/// use input_core::{EditRange, NumberField, SelectionRange};
/// use std::{cell::Cell, rc::Rc};
///
/// let quantity = Rc::new(Cell::new(12_i64));
/// let mut field = NumberField::new(Rc::clone(&quantity), "Quantity", true);
///
/// // Type "5" at the end.
/// assert!(field.should_change_characters(EditRange::insertion(2), "5", Some(SelectionRange::caret(2))));
/// assert_eq!(field.display_text(), "125");
/// assert_eq!(quantity.get(), 12); // not yet: the write is deferred
///
/// field.tick();
/// assert_eq!(quantity.get(), 125);
///
/// // Letters never get in.
/// assert!(!field.should_change_characters(EditRange::insertion(0), "x", None));
/// ```
#[derive(Debug)]
pub struct NumberField {
    bound: BoundNumber,
    text: String,
    options: FieldOptions,
    cursor: Option<CursorState>,
    pending: VecDeque<String>,
    /// Bound value as of this field's last write or resync; anything else
    /// found in the binding was written from outside.
    observed: NumberValue,
}

impl NumberField {
    pub fn new(
        bound: impl Into<BoundNumber>,
        placeholder: impl Into<String>,
        start_blank_if_zero: bool,
    ) -> Self {
        Self::with_options(
            bound,
            FieldOptions {
                placeholder: placeholder.into(),
                start_blank_if_zero,
            },
        )
    }

    pub fn with_options(bound: impl Into<BoundNumber>, options: FieldOptions) -> Self {
        let bound = bound.into();
        let text = if options.start_blank_if_zero && bound.is_zero() {
            String::new()
        } else {
            bound.canonical_string()
        };
        let observed = bound.value();

        Self {
            bound,
            text,
            options,
            cursor: None,
            pending: VecDeque::new(),
            observed,
        }
    }

    /// The text the host should show.
    #[inline]
    pub fn display_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    #[inline]
    pub fn mode(&self) -> EditMode {
        self.bound.mode()
    }

    /// `true` while commits are waiting for the next [`tick`](Self::tick).
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Decide a keystroke: replace `range` of the display text with `inserted`.
    ///
    /// `selection` is the host's selection before the edit, used to place the
    /// caret afterwards. Returns `false` and changes nothing when the
    /// resulting text is not valid for this field's mode.
    ///
    /// On acceptance the display text becomes the resulting text, a commit is
    /// queued, and the cursor override is replaced. It is cleared when the
    /// edit leaves the number unchanged ("1.4" -> "1.40"), so the host's own
    /// caret handling is left alone.
    pub fn should_change_characters(
        &mut self,
        range: EditRange,
        inserted: &str,
        selection: Option<SelectionRange>,
    ) -> bool {
        let proposal = EditProposal::new(&self.text, range, inserted);

        let mut resulting = None;
        if !should_change(&proposal, self.bound.mode(), |text| {
            resulting = Some(text.to_owned())
        }) {
            return false;
        }
        let Some(resulting) = resulting else {
            return false;
        };

        self.cursor = if changes_value(&self.text, &resulting) {
            cursor_after_replacement(&proposal, selection)
        } else {
            None
        };

        self.pending.push_back(resulting.clone());
        self.text = resulting;
        true
    }

    /// The host's field lost focus with `text` showing; settle it once more.
    pub fn did_end_editing(&mut self, text: &str) {
        log::debug!(target: "numfield.sync", "end editing with {text:?}");
        self.pending.push_back(text.to_owned());
    }

    /// Take the saved cursor override, clamped to the current display text.
    pub fn take_cursor(&mut self) -> Option<CursorState> {
        self.cursor.take().map(|c| c.clamped_to(&self.text))
    }

    /// Run every commit queued since the last tick, in order.
    ///
    /// Returns `true` if the display text changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        while let Some(text) = self.pending.pop_front() {
            changed |= self.commit(&text);
        }
        changed
    }

    /// Follow writes made to the bound value by someone else.
    ///
    /// The display switches to the canonical text of the new value unless it
    /// already reads as that value. Returns `true` if the display text changed.
    pub fn sync_external(&mut self) -> bool {
        let current = self.bound.value();
        if current.same_as(&self.observed) {
            return false;
        }
        self.observed = current;

        if self.bound.equals_text(&self.text) {
            return false;
        }

        let canonical = self.bound.canonical_string();
        log::debug!(
            target: "numfield.sync",
            "external change to {current:?}: {:?} -> {canonical:?}",
            self.text
        );
        self.text = canonical;
        true
    }

    fn commit(&mut self, text: &str) -> bool {
        let Some(display) = self.bound.commit_text(text) else {
            return false;
        };
        self.observed = self.bound.value();
        log::debug!(
            target: "numfield.sync",
            "committed {text:?} as {:?}, showing {display:?}",
            self.observed
        );

        // A later keystroke already replaced the text this commit was made from.
        if text != self.text {
            return false;
        }
        let changed = display != self.text;
        self.text = display;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn int_field(v: i64) -> (Rc<Cell<i64>>, NumberField) {
        let cell = Rc::new(Cell::new(v));
        let field = NumberField::new(Rc::clone(&cell), DEFAULT_PLACEHOLDER, true);
        (cell, field)
    }

    fn double_field(v: f64) -> (Rc<Cell<f64>>, NumberField) {
        let cell = Rc::new(Cell::new(v));
        let field = NumberField::new(Rc::clone(&cell), DEFAULT_PLACEHOLDER, true);
        (cell, field)
    }

    fn type_at_end(field: &mut NumberField, s: &str) -> bool {
        let end = field.display_text().chars().count();
        field.should_change_characters(EditRange::insertion(end), s, Some(SelectionRange::caret(end)))
    }

    #[test]
    fn initial_text_follows_value_and_blank_option() {
        assert_eq!(int_field(0).1.display_text(), "");
        assert_eq!(int_field(7).1.display_text(), "7");

        let cell = Rc::new(Cell::new(0_i64));
        let field = NumberField::new(cell, "n", false);
        assert_eq!(field.display_text(), "0");

        assert_eq!(double_field(2.5).1.display_text(), "2.5");
    }

    #[test]
    fn default_options() {
        let options = FieldOptions::default();
        assert_eq!(options.placeholder, "Number Entry");
        assert!(options.start_blank_if_zero);
    }

    #[test]
    fn rejected_edit_changes_nothing() {
        let (cell, mut field) = int_field(123);
        assert!(!field.should_change_characters(
            EditRange::insertion(1),
            "1.0",
            Some(SelectionRange::caret(1))
        ));
        assert_eq!(field.display_text(), "123");
        assert!(!field.has_pending());
        assert_eq!(field.take_cursor(), None);
        field.tick();
        assert_eq!(cell.get(), 123);
    }

    #[test]
    fn value_write_waits_for_tick() {
        let (cell, mut field) = int_field(1);
        assert!(type_at_end(&mut field, "0"));
        assert_eq!(cell.get(), 1);
        assert!(field.has_pending());

        field.tick();
        assert_eq!(cell.get(), 10);
        assert!(!field.has_pending());
    }

    #[test]
    fn stale_commit_keeps_newer_trailing_point() {
        let (cell, mut field) = double_field(0.0);
        assert!(type_at_end(&mut field, "1"));
        assert!(type_at_end(&mut field, "."));
        field.tick();
        assert_eq!(cell.get(), 1.0);
        assert_eq!(field.display_text(), "1.");

        assert!(type_at_end(&mut field, "5"));
        field.tick();
        assert_eq!(cell.get(), 1.5);
        assert_eq!(field.display_text(), "1.5");
    }

    #[test]
    fn trailing_zero_after_fraction_is_preserved() {
        let (cell, mut field) = double_field(1.4);
        assert!(type_at_end(&mut field, "0"));
        assert_eq!(field.take_cursor(), None);
        field.tick();
        assert_eq!(cell.get(), 1.4);
        assert_eq!(field.display_text(), "1.40");
    }

    #[test]
    fn leading_zero_is_kept_while_value_is_zero() {
        let (cell, mut field) = double_field(0.0);
        assert!(type_at_end(&mut field, "0"));
        field.tick();
        assert_eq!(field.display_text(), "0");
        assert!(type_at_end(&mut field, "."));
        field.tick();
        assert_eq!(field.display_text(), "0.");
        assert!(type_at_end(&mut field, "2"));
        field.tick();
        assert_eq!(cell.get(), 0.2);
        assert_eq!(field.display_text(), "0.2");
    }

    #[test]
    fn integer_commit_drops_leading_zeros_once_nonzero() {
        let (cell, mut field) = int_field(0);
        assert!(type_at_end(&mut field, "0"));
        field.tick();
        assert_eq!(field.display_text(), "0");

        assert!(type_at_end(&mut field, "7"));
        field.tick();
        assert_eq!(cell.get(), 7);
        assert_eq!(field.display_text(), "7");
    }

    #[test]
    fn cursor_is_saved_only_when_value_changes() {
        let (_cell, mut field) = int_field(12);
        assert!(field.should_change_characters(
            EditRange::insertion(1),
            "5",
            Some(SelectionRange::caret(1))
        ));
        assert_eq!(field.take_cursor(), Some(CursorState::at(2)));
        assert_eq!(field.take_cursor(), None);
    }

    #[test]
    fn value_preserving_edit_clears_earlier_cursor() {
        let (_cell, mut field) = double_field(12.0);
        assert!(type_at_end(&mut field, "5"));
        assert!(type_at_end(&mut field, "."));
        assert_eq!(field.display_text(), "125.");
        assert_eq!(field.take_cursor(), None);
    }

    #[test]
    fn taken_cursor_is_clamped_after_normalization() {
        let (_cell, mut field) = int_field(0);
        assert!(type_at_end(&mut field, "0"));
        field.tick();
        assert!(type_at_end(&mut field, "0"));
        field.tick();
        // "00" -> "007": value changes, caret saved at 3.
        assert!(type_at_end(&mut field, "7"));
        field.tick();
        assert_eq!(field.display_text(), "7");
        assert_eq!(field.take_cursor(), Some(CursorState::at(1)));
    }

    #[test]
    fn focus_loss_commit_is_deferred_and_idempotent() {
        let (cell, mut field) = double_field(0.0);
        assert!(type_at_end(&mut field, "2"));
        field.tick();

        field.did_end_editing("2");
        field.did_end_editing("2");
        field.tick();
        assert_eq!(cell.get(), 2.0);
        assert_eq!(field.display_text(), "2");
    }

    #[test]
    fn keystrokes_within_one_frame_are_committed_in_order() {
        let (cell, mut field) = double_field(0.0);
        assert!(type_at_end(&mut field, "1"));
        assert!(type_at_end(&mut field, "."));
        assert!(type_at_end(&mut field, "7"));
        field.tick();
        assert_eq!(cell.get(), 1.7);
        assert_eq!(field.display_text(), "1.7");
    }

    #[test]
    fn external_change_resyncs_display() {
        let (cell, mut field) = double_field(2.0);
        cell.set(3.0);
        assert!(field.sync_external());
        assert_eq!(field.display_text(), "3");
        assert!(!field.sync_external());
    }

    #[test]
    fn external_noop_change_keeps_typed_text() {
        let (cell, mut field) = double_field(1.5);
        assert!(type_at_end(&mut field, "0"));
        field.tick();
        assert_eq!(field.display_text(), "1.50");

        cell.set(2.0);
        cell.set(1.5);
        assert!(!field.sync_external());
        assert_eq!(field.display_text(), "1.50");
    }

    #[test]
    fn own_commits_are_not_mistaken_for_external_changes() {
        let (_cell, mut field) = double_field(0.0);
        assert!(type_at_end(&mut field, "3"));
        assert!(type_at_end(&mut field, "."));
        field.tick();
        assert!(!field.sync_external());
        assert_eq!(field.display_text(), "3.");
    }

    #[test]
    fn float_field_normalizes_fraction() {
        let cell = Rc::new(Cell::new(0.0_f32));
        let mut field = NumberField::new(Rc::clone(&cell), "f", true);
        for s in ["0", ".", "2", "5"] {
            assert!(type_at_end(&mut field, s));
        }
        field.tick();
        assert_eq!(cell.get(), 0.25);
        assert_eq!(field.display_text(), "0.25");
    }
}
