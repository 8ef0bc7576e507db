use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands are collected and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Rendering goes to
/// ratatui's `TestBackend`, so geometry recorded during `view` is real.
///
/// # Example
///
/// ```rust,ignore
/// use dropsel_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Picker>::new(props);
/// prog.render_string(30, 6);                 // lay out once
/// prog.send(Msg::Click { column: 1, row: 0 });
/// assert!(prog.model().select.is_open());
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Messages produced by the update are queued, not processed.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process pending messages until the queue stays empty.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Messages queued by the most recent updates and not yet drained.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Identities of the subscriptions the model currently declares.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.model
            .subscriptions()
            .iter()
            .map(|sub| sub.id().clone())
            .collect()
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer into newline-separated rows.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::Subscription;
    use ratatui::widgets::Paragraph;

    struct Lamp {
        lit: bool,
        switches: u32,
    }

    #[derive(Debug)]
    enum LampMsg {
        Flip,
        Flipped,
        Off,
    }

    impl Model for Lamp {
        type Message = LampMsg;
        type Flags = bool;

        fn init(lit: bool) -> (Self, Command<LampMsg>) {
            (Lamp { lit, switches: 0 }, Command::none())
        }

        fn update(&mut self, msg: LampMsg) -> Command<LampMsg> {
            match msg {
                LampMsg::Flip => {
                    self.lit = !self.lit;
                    Command::message(LampMsg::Flipped)
                }
                LampMsg::Flipped => {
                    self.switches += 1;
                    Command::none()
                }
                LampMsg::Off => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = if self.lit { "on" } else { "off" };
            frame.render_widget(Paragraph::new(text), frame.area());
        }

        fn subscriptions(&self) -> Vec<Subscription<LampMsg>> {
            if self.lit {
                vec![Subscription::from_stream(
                    SubscriptionId::of::<Lamp>(),
                    Box::pin(futures::stream::pending()),
                )]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Lamp>::new(true);
        assert!(prog.model().lit);
    }

    #[test]
    fn follow_up_messages_wait_for_drain() {
        let mut prog = TestProgram::<Lamp>::new(false);
        prog.send(LampMsg::Flip);
        assert_eq!(prog.pending().len(), 1);
        assert_eq!(prog.model().switches, 0);

        prog.drain_messages();
        assert!(prog.pending().is_empty());
        assert_eq!(prog.model().switches, 1);
    }

    #[test]
    fn render_reflects_state() {
        let mut prog = TestProgram::<Lamp>::new(false);
        assert!(prog.render_string(10, 1).starts_with("off"));
        prog.send(LampMsg::Flip);
        assert!(prog.render_string(10, 1).starts_with("on"));
    }

    #[test]
    fn subscriptions_follow_state() {
        let mut prog = TestProgram::<Lamp>::new(true);
        assert_eq!(prog.subscription_ids(), vec![SubscriptionId::of::<Lamp>()]);
        prog.send(LampMsg::Flip);
        assert!(prog.subscription_ids().is_empty());
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Lamp>::new(true);
        assert!(!prog.quit_requested());
        prog.send(LampMsg::Off);
        assert!(prog.quit_requested());
    }

    #[test]
    fn buffer_rows_are_newline_separated() {
        let prog = TestProgram::<Lamp>::new(true);
        let out = prog.render_string(4, 2);
        assert_eq!(out, "on  \n    ");
    }
}
