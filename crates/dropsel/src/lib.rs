//! **dropsel** -- a themed dropdown select for [`ratatui`] applications.
//!
//! This umbrella crate re-exports everything needed from a single
//! dependency:
//!
//! * All public items from [`dropsel_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Subscription`], [`Program`], [`run`], ...).
//! * The [`widgets`] module, re-exporting [`dropsel_widgets`].
//! * [`logging`] for sending `tracing` output to a file.
//! * [`ratatui`], [`crossterm`] and [`tokio`].
//!
//! # Quick start
//!
//! ```ignore
//! use dropsel::widgets::{select, Select, SelectProps};
//! use dropsel::{Command, Component, Model, Subscription};
//!
//! struct App { color: Select, picked: Option<String> }
//!
//! enum Msg { Color(select::Message) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = SelectProps;
//!
//!     fn init(props: SelectProps) -> (Self, Command<Msg>) {
//!         (App { color: Select::mount(props), picked: None }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Color(select::Message::Changed(v)) => {
//!                 self.picked = Some(v);
//!                 Command::none()
//!             }
//!             Msg::Color(m) => self.color.update(m).map(Msg::Color),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut dropsel::ratatui::Frame) {
//!         let area = frame.area();
//!         self.color.view(frame, area);
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         self.color.subscriptions().into_iter().map(|s| s.map(Msg::Color)).collect()
//!     }
//! }
//! ```

pub mod logging;

pub use dropsel_core::*;
pub mod widgets {
    pub use dropsel_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
