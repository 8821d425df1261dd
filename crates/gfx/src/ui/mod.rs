mod number_field;

pub use number_field::{NumberFieldStyle, NumberTextField};
