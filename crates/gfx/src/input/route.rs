use egui::{Event, Id, ImeEvent, Ui};
use input_core::{EditMode, EditProposal, EditRange, SelectionRange, char_len, should_change};

/// Text an event would insert into a focused single-line `TextEdit`.
pub fn inserted_text(event: &Event) -> Option<&str> {
    match event {
        Event::Text(text) | Event::Paste(text) => Some(text.as_str()),
        Event::Ime(ImeEvent::Commit(text)) => Some(text.as_str()),
        _ => None,
    }
}

/// Drop this frame's insertions that would leave invalid text in the field
/// `id`, before egui's `TextEdit` applies them.
///
/// Insertions are replayed in event order against a scratch copy of `text`,
/// starting from `selection`; each accepted one collapses the selection to a
/// caret after what it inserted. Deletions cannot make valid text invalid, so
/// key events pass through and are not replayed.
///
/// Returns the number of dropped events. Nothing is dropped unless `id` has
/// keyboard focus.
pub fn filter_insertions(
    ui: &mut Ui,
    id: Id,
    text: &str,
    mode: EditMode,
    selection: SelectionRange,
) -> usize {
    if !ui.memory(|m| m.has_focus(id)) {
        return 0;
    }

    let mut scratch = text.to_owned();
    let mut selection = selection;
    let mut dropped = 0usize;

    ui.input_mut(|i| {
        i.events.retain(|event| {
            let Some(inserted) = inserted_text(event) else {
                return true;
            };
            let proposal = EditProposal::new(&scratch, EditRange::from(selection), inserted);

            let mut resulting = None;
            if !should_change(&proposal, mode, |s| resulting = Some(s.to_owned())) {
                dropped += 1;
                return false;
            }
            if let Some(resulting) = resulting {
                selection = SelectionRange::caret(selection.start + char_len(inserted));
                scratch = resulting;
            }
            true
        });
    });

    if dropped > 0 {
        log::trace!(target: "numfield.egui", "dropped {dropped} insertion(s) for {id:?}");
    }
    dropped
}
