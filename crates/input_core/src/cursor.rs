//! Caret placement after an accepted edit.

use crate::edit::EditProposal;
use crate::selection::SelectionRange;
use crate::text::char_len;

/// A caret position the host should apply on its next redraw, as a char
/// offset into the field text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub offset: usize,
}

impl CursorState {
    #[inline]
    pub fn at(offset: usize) -> Self {
        Self { offset }
    }

    /// Clamp into `text`, which may have been normalized since the cursor was
    /// computed.
    pub fn clamped_to(self, text: &str) -> Self {
        Self::at(self.offset.min(char_len(text)))
    }
}

/// Where the caret goes once `proposal` is applied.
///
/// The caret is taken as the end of the host's `selection` and keeps its place
/// relative to the edited region: at or past the replaced span it shifts by the
/// edit's length delta, inside the span it lands right after the inserted
/// text, and before the span it stays put. The result is clamped to the
/// resulting text. Without a selection (the host has no caret) or when the
/// proposal cannot be applied there is nothing to report.
pub fn cursor_after_replacement(
    proposal: &EditProposal<'_>,
    selection: Option<SelectionRange>,
) -> Option<CursorState> {
    let caret = selection?.end;
    let resulting = proposal.resulting_text()?;
    let range = proposal.range;

    let moved = if caret >= range.end() {
        (caret as isize).saturating_add(proposal.offset_delta())
    } else if caret >= range.start {
        (range.start + char_len(proposal.inserted)) as isize
    } else {
        caret as isize
    };
    let offset = moved.clamp(0, char_len(&resulting) as isize) as usize;
    Some(CursorState::at(offset))
}
