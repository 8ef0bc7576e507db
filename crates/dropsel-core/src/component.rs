use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model), except that
/// [`view`](Component::view) receives the `area` the parent hands it. A
/// component owns its state outright; the parent only reaches it through
/// messages, which keeps every mutation on the single event-loop turn that
/// delivered the message.
///
/// # Composition pattern
///
/// Wrap the component's message in a variant of the parent message and lift
/// commands with [`Command::map`]:
///
/// ```rust,ignore
/// use dropsel_core::{Command, Component, Model};
/// use dropsel_widgets::select::{self, Select};
///
/// struct App { color: Select, picked: Option<String> }
///
/// enum AppMsg { Color(select::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Color(select::Message::Changed(value)) => {
///                 self.picked = Some(value);
///                 Command::none()
///             }
///             AppMsg::Color(m) => self.color.update(m).map(AppMsg::Color),
///         }
///     }
///     // ...
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine drawing to `area`, except for overlays
    /// that deliberately extend below it (such as an open option list).
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these and includes them in its own
    /// [`Model::subscriptions`](crate::Model::subscriptions), mapping messages.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
