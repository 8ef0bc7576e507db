//! The **dropsel** select widget and its supporting pieces.
//!
//! [`Select`](select::Select) implements [`dropsel_core::Component`], so it
//! can be embedded in any [`dropsel_core::Model`] and placed with ordinary
//! [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | The select widget: trigger, option list, click routing |
//! | [`props`] | Host configuration, buildable in code or from JSON |
//! | [`option`] | The (label, value) entries |
//! | [`theme`] | Named palettes with light and dark renditions |
//! | [`watch`] | One-way mirrors for host-owned inputs |
//! | [`geometry`] | List placement and hit testing |
//! | [`runeutil`] | Width-aware label truncation |

pub mod geometry;
pub mod option;
pub mod props;
pub mod runeutil;
pub mod select;
pub mod theme;
pub mod watch;

pub use option::SelectOption;
pub use props::{PropsError, SelectProps};
pub use select::Select;
pub use theme::{Palette, Theme, UnknownTheme};
