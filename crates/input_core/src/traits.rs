//! Numeric input trait: the surface a host widget drives once per frame.
//!
//! Widgets in the integration layer are written against this trait rather
//! than [`NumberField`] directly, so tests and alternative frontends can put
//! their own state behind the same widget.

use crate::cursor::CursorState;
use crate::edit::EditMode;
use crate::field::NumberField;
use crate::selection::{EditRange, SelectionRange};

/// Trait defining the numeric input interface.
///
/// # Frame order
///
/// ```ignore
/// input.tick();
/// input.sync_external();
/// // draw input.display_text(), route edits through should_change_characters
/// // on blur: input.did_end_editing(text)
/// // apply input.take_cursor(), repaint while input.has_pending()
/// ```
pub trait NumericInput {
    /// Text to show in the field.
    fn display_text(&self) -> &str;

    /// Hint shown while the field is empty.
    fn placeholder(&self) -> &str;

    fn mode(&self) -> EditMode;

    /// Accept or refuse replacing `range` with `inserted`.
    fn should_change_characters(
        &mut self,
        range: EditRange,
        inserted: &str,
        selection: Option<SelectionRange>,
    ) -> bool;

    /// Called when the host field loses focus.
    fn did_end_editing(&mut self, text: &str);

    /// One-shot caret override from the last accepted edit.
    fn take_cursor(&mut self) -> Option<CursorState>;

    fn has_pending(&self) -> bool;

    /// Run deferred commits. Returns `true` if the display text changed.
    fn tick(&mut self) -> bool;

    /// Pick up outside writes to the bound value. Returns `true` if the
    /// display text changed.
    fn sync_external(&mut self) -> bool;
}

impl NumericInput for NumberField {
    #[inline]
    fn display_text(&self) -> &str {
        NumberField::display_text(self)
    }

    #[inline]
    fn placeholder(&self) -> &str {
        NumberField::placeholder(self)
    }

    #[inline]
    fn mode(&self) -> EditMode {
        NumberField::mode(self)
    }

    #[inline]
    fn should_change_characters(
        &mut self,
        range: EditRange,
        inserted: &str,
        selection: Option<SelectionRange>,
    ) -> bool {
        NumberField::should_change_characters(self, range, inserted, selection)
    }

    #[inline]
    fn did_end_editing(&mut self, text: &str) {
        NumberField::did_end_editing(self, text)
    }

    #[inline]
    fn take_cursor(&mut self) -> Option<CursorState> {
        NumberField::take_cursor(self)
    }

    #[inline]
    fn has_pending(&self) -> bool {
        NumberField::has_pending(self)
    }

    #[inline]
    fn tick(&mut self) -> bool {
        NumberField::tick(self)
    }

    #[inline]
    fn sync_external(&mut self) -> bool {
        NumberField::sync_external(self)
    }
}
