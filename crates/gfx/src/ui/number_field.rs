use crate::input::filter_insertions;
use egui::text::{CCursor, CCursorRange};
use egui::{
    Align, Context, CornerRadius, Frame, Id, Margin, Response, Stroke, TextEdit, Ui, Vec2, Widget,
};
use input_core::{NumericInput, SelectionRange, char_len, edit_between};
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
pub struct NumberFieldStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: u8,
    pub margin: Margin,
    pub horizontal_align: Align,
}

impl Default for NumberFieldStyle {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 32.0,
            corner_radius: 6,
            margin: Margin::symmetric(6, 4),
            horizontal_align: Align::Min,
        }
    }
}

/// A single-line `TextEdit` showing a [`NumericInput`].
///
/// Each frame the widget runs the input's deferred commits, picks up outside
/// changes to the bound value, applies a pending cursor override, and then
/// shows the text. Insertions the input would refuse are removed from the
/// frame's events before the `TextEdit` sees them; what remains is diffed
/// against the shown text and handed to the input as a single edit.
///
/// ```ignore
/// ui.add(NumberTextField::new(&mut self.quantity, "quantity"));
/// ```
pub struct NumberTextField<'a, T: NumericInput + ?Sized> {
    input: &'a mut T,
    id_salt: Id,
    id: Option<Id>,
    style: NumberFieldStyle,
}

impl<'a, T: NumericInput + ?Sized> NumberTextField<'a, T> {
    pub fn new(input: &'a mut T, id_salt: impl Hash) -> Self {
        Self {
            input,
            id_salt: Id::new(id_salt),
            id: None,
            style: NumberFieldStyle::default(),
        }
    }

    /// Use exactly `id` for the inner `TextEdit` instead of deriving one from
    /// the parent `Ui`.
    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn style(mut self, style: NumberFieldStyle) -> Self {
        self.style = style;
        self
    }
}

impl<T: NumericInput + ?Sized> Widget for NumberTextField<'_, T> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            input,
            id_salt,
            id,
            style,
        } = self;
        let id = id.unwrap_or_else(|| ui.make_persistent_id(id_salt));
        let ctx = ui.ctx().clone();

        let committed = input.tick();
        let synced = input.sync_external();
        if let Some(cursor) = input.take_cursor() {
            store_selection(&ctx, id, SelectionRange::caret(cursor.offset));
        }

        let before = input.display_text().to_owned();
        let len = char_len(&before);
        // tick/sync may have just shortened the text under a stored caret.
        let selection = TextEdit::load_state(&ctx, id)
            .and_then(|state| state.cursor.char_range())
            .map(|range| SelectionRange::new(range.secondary.index, range.primary.index))
            .unwrap_or_else(|| SelectionRange::caret(len))
            .clamped_to(len);

        filter_insertions(ui, id, &before, input.mode(), selection);

        let mut buffer = before.clone();
        let h = style.height.max(1.0);
        let output = Frame::new()
            .stroke(Stroke::new(
                1.0,
                ui.visuals().widgets.inactive.bg_stroke.color,
            ))
            .corner_radius(CornerRadius::same(style.corner_radius))
            .inner_margin(style.margin)
            .show(ui, |ui| {
                TextEdit::singleline(&mut buffer)
                    .id(id)
                    .hint_text(input.placeholder())
                    .desired_width(style.width)
                    .min_size(Vec2::new(0.0, (h - style.margin.sum().y).max(1.0)))
                    .horizontal_align(style.horizontal_align)
                    .vertical_align(Align::Center)
                    .show(ui)
            })
            .inner;
        let mut response = output.response;

        if buffer != before {
            let (range, inserted) = edit_between(&before, &buffer, Some(selection));
            if !input.should_change_characters(range, &inserted, Some(selection)) {
                // Slipped past the event filter; put the caret back and show
                // the old text on the next frame.
                log::debug!(target: "numfield.egui", "reverted {buffer:?} to {before:?}");
                store_selection(&ctx, id, selection);
                ctx.request_repaint();
            }
        }

        if committed || synced {
            response.mark_changed();
        }

        if response.lost_focus() {
            let text = input.display_text().to_owned();
            input.did_end_editing(&text);
        }

        if input.has_pending() {
            ctx.request_repaint();
        }

        response
    }
}

fn store_selection(ctx: &Context, id: Id, selection: SelectionRange) {
    let mut state = TextEdit::load_state(ctx, id).unwrap_or_default();
    state.cursor.set_char_range(Some(CCursorRange::two(
        CCursor::new(selection.start),
        CCursor::new(selection.end),
    )));
    TextEdit::store_state(ctx, id, state);
}
