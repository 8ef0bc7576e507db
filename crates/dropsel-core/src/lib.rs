//! Runtime for **dropsel**, a select widget for terminal UIs.
//!
//! The design follows the [Elm Architecture]: a [`Model`] is an
//! **init -> update -> view** cycle, widgets are [`Component`]s embedded in
//! it, and everything that reaches in from outside (key presses, clicks
//! anywhere on screen) arrives as a message through a [`Subscription`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Messages and lifecycle actions returned from `update` |
//! | [`Subscription`] | Long-lived event source, diffed after every update |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for tests |
//!
//! The runtime is single-threaded in effect: one message is fully handled,
//! subscriptions are reconciled, and only then is the next message taken.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::{mouse_click, TerminalEvent};
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId, SubscriptionManager};
pub use subscriptions::{document_clicks, terminal_events, EventHub, Listener};

/// Run a dropsel application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options, such as a terminal title or a lower frame rate.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
