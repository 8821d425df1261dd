//! # input_core
//!
//! UI-agnostic editing/state layer for numeric text fields.
//!
//! This crate provides the building blocks of a number entry field:
//! - [`BoundNumber`]: the externally owned numeric cell a field edits, tagged by kind
//! - [`EditProposal`] and [`EditMode`]: the keystroke guard deciding whether an edit is accepted
//! - [`NumberField`]: display text, deferred commits, and cursor overrides for one field
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! All offsets are counted in Unicode scalar values (`char`s), which is how
//! egui addresses text cursors.
//!
//! ## Integration
//!
//! A host widget drives a field once per frame:
//! ```ignore
//! field.tick();           // run commits deferred from the previous frame
//! field.sync_external();  // pick up changes made to the bound value elsewhere
//! // ... draw field.display_text(), forward edits to should_change_characters ...
//! if let Some(cursor) = field.take_cursor() { /* move the caret */ }
//! ```

mod binding;
mod cursor;
mod edit;
mod field;
mod number;
mod selection;
mod text;
mod traits;

pub use binding::Binding;
pub use cursor::{CursorState, cursor_after_replacement};
pub use edit::{
    DECIMAL_POINT, EditMode, EditProposal, changes_value, decimal_point_count, is_valid_decimal,
    is_valid_int, should_change,
};
pub use field::{DEFAULT_PLACEHOLDER, FieldOptions, NumberField};
pub use number::{BoundNumber, FieldNumber, NumberValue, parse_lenient};
pub use selection::{EditRange, SelectionRange};
pub use traits::NumericInput;

// Re-export text utilities for integration layers that translate between
// their own buffers and char offsets.
pub use text::{byte_index_of_char, char_len, edit_between, replace_char_range};
