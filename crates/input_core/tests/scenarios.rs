use input_core::{
    Binding, BoundNumber, CursorState, EditRange, NumberField, NumericInput, SelectionRange,
    parse_lenient,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn int_field(value: i64) -> (Rc<Cell<i64>>, NumberField) {
    let cell = Rc::new(Cell::new(value));
    let field = NumberField::new(Rc::clone(&cell), "Quantity", true);
    (cell, field)
}

fn double_field(value: f64) -> (Rc<Cell<f64>>, NumberField) {
    let cell = Rc::new(Cell::new(value));
    let field = NumberField::new(Rc::clone(&cell), "Amount", true);
    (cell, field)
}

/// Drive a field the way a widget does: edit, then the next frame.
fn frame(field: &mut dyn NumericInput) {
    field.tick();
    field.sync_external();
}

#[test]
fn integer_field_refuses_decimal_point() {
    let (cell, mut field) = int_field(123);

    let accepted =
        field.should_change_characters(EditRange::insertion(1), "1.0", Some(SelectionRange::caret(1)));
    assert!(!accepted);

    frame(&mut field);
    assert_eq!(field.display_text(), "123");
    assert_eq!(cell.get(), 123);
}

#[test]
fn integer_field_replaces_selected_digits() {
    let (cell, mut field) = int_field(123);

    let accepted = field.should_change_characters(
        EditRange::new(1, 2),
        "10",
        Some(SelectionRange::new(1, 3)),
    );
    assert!(accepted);
    assert_eq!(field.display_text(), "110");
    assert_eq!(cell.get(), 123);

    frame(&mut field);
    assert_eq!(cell.get(), 110);
    assert_eq!(field.display_text(), "110");
}

#[test]
fn pasting_the_same_number_over_itself_keeps_host_cursor() {
    let (cell, mut field) = double_field(1.0);
    // Start from the literal "1.0" a user typed.
    assert!(field.should_change_characters(EditRange::insertion(1), ".", Some(SelectionRange::caret(1))));
    assert!(field.should_change_characters(EditRange::insertion(2), "0", Some(SelectionRange::caret(2))));
    frame(&mut field);
    assert_eq!(field.display_text(), "1.0");
    let _ = field.take_cursor();

    let accepted = field.should_change_characters(
        EditRange::new(0, 3),
        "1.0",
        Some(SelectionRange::new(0, 3)),
    );
    assert!(accepted);
    assert_eq!(field.take_cursor(), None);

    frame(&mut field);
    assert_eq!(field.display_text(), "1.0");
    assert_eq!(cell.get(), 1.0);
}

#[test]
fn decimal_field_accepts_single_point_from_paste() {
    let (cell, mut field) = double_field(10.0);

    let accepted =
        field.should_change_characters(EditRange::insertion(1), "1.0", Some(SelectionRange::caret(1)));
    assert!(accepted);
    assert_eq!(field.display_text(), "11.00");
    assert_eq!(field.take_cursor(), Some(CursorState::at(4)));

    frame(&mut field);
    assert_eq!(cell.get(), 11.0);
    // Whole value: the typed text stays.
    assert_eq!(field.display_text(), "11.00");
}

#[test]
fn zero_integer_starts_blank() {
    let (_cell, field) = int_field(0);
    assert_eq!(field.display_text(), "");
    assert_eq!(field.placeholder(), "Quantity");
}

#[test]
fn external_write_resyncs_stale_text() {
    let (cell, mut field) = double_field(2.0);
    assert_eq!(field.display_text(), "2");

    cell.set(3.0);
    frame(&mut field);
    assert_eq!(field.display_text(), "3");
}

#[test]
fn committing_twice_is_the_same_as_once() {
    for text in ["", "0", "1.", "2.50", "007", "12.125"] {
        let (once_cell, mut once) = double_field(0.0);
        once.did_end_editing(text);
        frame(&mut once);

        let (twice_cell, mut twice) = double_field(0.0);
        twice.did_end_editing(text);
        twice.did_end_editing(text);
        frame(&mut twice);

        assert_eq!(once_cell.get(), twice_cell.get(), "{text:?}");
        assert_eq!(once.display_text(), twice.display_text(), "{text:?}");
    }
}

#[test]
fn bound_value_is_written_one_frame_later() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let value = Rc::new(Cell::new(0_i64));
    let binding = {
        let (get, set) = (Rc::clone(&value), Rc::clone(&value));
        let writes = Rc::clone(&writes);
        Binding::new(move || get.get(), move |v| {
            writes.borrow_mut().push(v);
            set.set(v);
        })
    };
    let mut field = NumberField::new(BoundNumber::from(binding), "n", true);

    for (at, digit) in ["4", "2"].into_iter().enumerate() {
        assert!(field.should_change_characters(
            EditRange::insertion(at),
            digit,
            Some(SelectionRange::caret(at))
        ));
    }
    assert!(writes.borrow().is_empty());
    assert!(field.has_pending());

    frame(&mut field);
    assert_eq!(*writes.borrow(), vec![4, 42]);
    assert_eq!(value.get(), 42);
    assert!(!field.has_pending());
}

#[test]
fn canonical_text_parses_back_to_itself() {
    for v in [0.5_f64, 2.0, 1.0 / 7.0, 1e-7, 123456789.125] {
        let (cell, mut field) = double_field(0.0);
        cell.set(v);
        frame(&mut field);
        let shown = field.display_text();
        assert_eq!(shown, v.to_string());
        assert_eq!(parse_lenient::<f64>(shown).to_string(), shown);
    }
}
