//! One-way mirrors of host-supplied properties.
//!
//! A [`Watched`] value is the widget's private copy of an input the host
//! owns. The host pushes new values through [`Watched::set`]; the widget
//! never writes back, and a repeated value is not reported as a change.

/// A mirrored property with change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watched<T> {
    value: T,
}

impl<T: PartialEq> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Replace the mirrored value. Returns the previous value when it
    /// differed, `None` when the update was a no-op.
    pub fn set(&mut self, value: T) -> Option<T> {
        if self.value == value {
            return None;
        }
        Some(std::mem::replace(&mut self.value, value))
    }
}

impl<T: PartialEq + Copy> Watched<T> {
    pub fn value(&self) -> T {
        self.value
    }
}
