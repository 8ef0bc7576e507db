//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard, mouse, resize,
//!   focus, and paste events from the terminal.
//! - **Document clicks** ([`document_clicks`]) -- every primary-button press
//!   anywhere on screen, the terminal counterpart of a window-level click
//!   listener.
//!
//! Both read from one shared [`EventHub`], so any number of subscriptions can
//! observe the same input without competing for it. The hub reads the
//! terminal only while at least one subscription is running.

mod terminal;

pub use terminal::*;
