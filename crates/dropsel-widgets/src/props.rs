//! Host-side configuration of a select.
//!
//! Props are what the embedding application hands the widget: the options,
//! which one starts selected, and the cosmetic theme and dark-mode inputs.
//! They can be built in code or read from JSON using the same field names a
//! web host would set as attributes:
//!
//! ```json
//! { "options": [{ "name": "Red", "value": "r" }], "selected": 0,
//!   "theme": "ocean", "darkMode": true }
//! ```

use crate::option::SelectOption;
use crate::theme::Theme;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Errors from loading [`SelectProps`].
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("failed to read props file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid props: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inputs for [`Select::mount`](crate::select::Select::mount).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectProps {
    /// Entries in display order.
    pub options: Vec<SelectOption>,
    /// Index into `options` seeding the selection. Read once, at mount.
    /// Negative indices from JSON are treated like any other miss.
    #[serde(deserialize_with = "lenient_index")]
    pub selected: Option<usize>,
    pub theme: Theme,
    pub dark_mode: bool,
    /// Label shown while nothing is selected.
    pub placeholder: Option<String>,
}

impl SelectProps {
    pub fn new(options: impl IntoIterator<Item = impl Into<SelectOption>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PropsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map(|n| usize::try_from(n).unwrap_or(usize::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_json() {
        let props = SelectProps::from_json(
            r#"{"options":[{"name":"Red","value":"r"},{"name":"Blue","value":"b"}],
                "selected":1,"theme":"ocean","darkMode":true}"#,
        )
        .unwrap();
        assert_eq!(props.options.len(), 2);
        assert_eq!(props.selected, Some(1));
        assert_eq!(props.theme, Theme::Ocean);
        assert!(props.dark_mode);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let props = SelectProps::from_json("{}").unwrap();
        assert!(props.options.is_empty());
        assert_eq!(props.selected, None);
        assert_eq!(props.theme, Theme::Default);
        assert!(!props.dark_mode);
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let props = SelectProps::from_json(r#"{"selected":-1}"#).unwrap();
        assert_eq!(props.selected, Some(usize::MAX));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = SelectProps::from_json(r#"{"theme":"teal"}"#).unwrap_err();
        assert!(matches!(err, PropsError::Json(_)));
    }

    #[test]
    fn builder() {
        let props = SelectProps::new([("Red", "r"), ("Blue", "b")])
            .with_selected(1)
            .with_theme(Theme::Purple)
            .with_dark_mode(true)
            .with_placeholder("Pick one");
        assert_eq!(props.options[1], SelectOption::new("Blue", "b"));
        assert_eq!(props.placeholder.as_deref(), Some("Pick one"));
    }

    #[test]
    fn missing_file() {
        let err = SelectProps::from_path("/nonexistent/dropsel-props.json").unwrap_err();
        assert!(matches!(err, PropsError::Io(_)));
    }
}
