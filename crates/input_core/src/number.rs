//! The numeric kinds a field can bind to.

use crate::binding::Binding;
use crate::edit::EditMode;
use std::cell::Cell;
use std::fmt::{Debug, Display};
use std::rc::Rc;
use std::str::FromStr;

/// A number type a field can edit.
///
/// Text is produced with `Display` and read back with `FromStr`, so the
/// canonical form of a value is exactly `value.to_string()`.
pub trait FieldNumber: Copy + PartialEq + Debug + Display + FromStr + 'static {
    const ZERO: Self;

    /// `true` when the value has no fractional part.
    fn is_whole(self) -> bool;

    /// Identity comparison used to notice outside writes. Unlike `==` this
    /// treats a NaN as equal to itself.
    fn same_value(self, other: Self) -> bool;
}

impl FieldNumber for i64 {
    const ZERO: Self = 0;

    #[inline]
    fn is_whole(self) -> bool {
        true
    }

    #[inline]
    fn same_value(self, other: Self) -> bool {
        self == other
    }
}

impl FieldNumber for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_whole(self) -> bool {
        self.floor() == self
    }

    #[inline]
    fn same_value(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl FieldNumber for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_whole(self) -> bool {
        self.floor() == self
    }

    #[inline]
    fn same_value(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

/// Parse `text` as `T`, falling back to zero for empty or malformed text.
///
/// # Examples
///
/// ```
/// use input_core::parse_lenient;
///
/// assert_eq!(parse_lenient::<i64>("42"), 42);
/// assert_eq!(parse_lenient::<i64>(""), 0);
/// assert_eq!(parse_lenient::<f64>("1."), 1.0);
/// assert_eq!(parse_lenient::<f64>("."), 0.0);
/// ```
pub fn parse_lenient<T: FieldNumber>(text: &str) -> T {
    text.parse().unwrap_or(T::ZERO)
}

/// A snapshot of a bound value, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Double(f64),
    Float(f32),
}

impl NumberValue {
    /// Kind-aware identity (NaN is the same as NaN).
    pub fn same_as(&self, other: &NumberValue) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.same_value(*b),
            (Self::Double(a), Self::Double(b)) => a.same_value(*b),
            (Self::Float(a), Self::Float(b)) => a.same_value(*b),
            _ => false,
        }
    }
}

/// The number a field is bound to.
///
/// The variant is chosen at construction and decides both the parser and the
/// [`EditMode`] used to guard keystrokes. Nothing changes the variant later.
#[derive(Clone, Debug)]
pub enum BoundNumber {
    Integer(Binding<i64>),
    Double(Binding<f64>),
    Float(Binding<f32>),
}

impl BoundNumber {
    /// Integer fields accept digits only; floating fields also take one `.`.
    pub fn mode(&self) -> EditMode {
        match self {
            Self::Integer(_) => EditMode::Integer,
            Self::Double(_) | Self::Float(_) => EditMode::Decimal,
        }
    }

    pub fn value(&self) -> NumberValue {
        match self {
            Self::Integer(b) => NumberValue::Integer(b.get()),
            Self::Double(b) => NumberValue::Double(b.get()),
            Self::Float(b) => NumberValue::Float(b.get()),
        }
    }

    /// The bound value formatted with its type's `Display`.
    pub fn canonical_string(&self) -> String {
        match self {
            Self::Integer(b) => b.get().to_string(),
            Self::Double(b) => b.get().to_string(),
            Self::Float(b) => b.get().to_string(),
        }
    }

    /// `true` if `text` parses (leniently) to the bound value.
    pub fn equals_text(&self, text: &str) -> bool {
        match self {
            Self::Integer(b) => parse_lenient::<i64>(text) == b.get(),
            Self::Double(b) => parse_lenient::<f64>(text) == b.get(),
            Self::Float(b) => parse_lenient::<f32>(text) == b.get(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(b) => b.get() == 0,
            Self::Double(b) => b.get() == 0.0,
            Self::Float(b) => b.get() == 0.0,
        }
    }

    /// Write the value parsed from `text` into the binding.
    ///
    /// Returns the text the field should display afterwards, or `None` when
    /// the parsed value already equals the bound one (nothing is written).
    pub(crate) fn commit_text(&self, text: &str) -> Option<String> {
        match self {
            // Literal text survives only while it means zero ("0", "00", "").
            Self::Integer(b) => commit_with(b, text, |v| v == 0),
            // Whole numbers keep what was typed, so "1." and "01" stay put.
            Self::Double(b) => commit_with(b, text, |v| v == 0.0 || v.is_whole()),
            Self::Float(b) => commit_with(b, text, |v| v == 0.0 || v.is_whole()),
        }
    }
}

fn commit_with<T: FieldNumber>(
    binding: &Binding<T>,
    text: &str,
    keep_literal: impl Fn(T) -> bool,
) -> Option<String> {
    let proposed = parse_lenient::<T>(text);
    if binding.get() == proposed {
        return None;
    }

    let display = if keep_literal(proposed) {
        text.to_owned()
    } else {
        proposed.to_string()
    };
    binding.set(proposed);
    Some(display)
}

impl From<Binding<i64>> for BoundNumber {
    fn from(binding: Binding<i64>) -> Self {
        Self::Integer(binding)
    }
}

impl From<Binding<f64>> for BoundNumber {
    fn from(binding: Binding<f64>) -> Self {
        Self::Double(binding)
    }
}

impl From<Binding<f32>> for BoundNumber {
    fn from(binding: Binding<f32>) -> Self {
        Self::Float(binding)
    }
}

impl From<Rc<Cell<i64>>> for BoundNumber {
    fn from(cell: Rc<Cell<i64>>) -> Self {
        Self::Integer(Binding::from_cell(cell))
    }
}

impl From<Rc<Cell<f64>>> for BoundNumber {
    fn from(cell: Rc<Cell<f64>>) -> Self {
        Self::Double(Binding::from_cell(cell))
    }
}

impl From<Rc<Cell<f32>>> for BoundNumber {
    fn from(cell: Rc<Cell<f32>>) -> Self {
        Self::Float(Binding::from_cell(cell))
    }
}
