//! The entries a select offers.

use serde::{Deserialize, Serialize};

/// A (label, value) pair the user can choose.
///
/// `name` is what the trigger and list display; `value` is what the widget
/// reports when the entry is picked. Values are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label.
    pub name: String,
    /// Identifier handed to the host on selection.
    pub value: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for SelectOption {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
