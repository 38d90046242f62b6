use std::fmt;

/// A value that can only be constructed in a valid state.
pub trait Field: fmt::Display {
    type Value: ?Sized;

    fn value(&self) -> &Self::Value;
}
