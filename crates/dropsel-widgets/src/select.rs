//! Themed select: a one-line trigger showing the current choice, with a
//! list of every option that opens flush underneath it.
//!
//! The widget is driven entirely by clicks. It holds one
//! [`document_clicks`] listener for as long as its parent keeps declaring
//! its subscriptions, and routes each click itself: the trigger toggles the
//! list, an entry selects it, and anything outside the open list closes it.
//! Picking an entry is the only thing that produces an outward event,
//! [`Message::Changed`], carrying the entry's value.
//!
//! Theme and dark mode are host-owned inputs mirrored one way through
//! [`Select::watch_theme`] and [`Select::watch_dark_mode`].

use crate::geometry;
use crate::option::SelectOption;
use crate::props::SelectProps;
use crate::runeutil::truncate;
use crate::theme::{Palette, Theme, DARK_CLASS};
use crate::watch::Watched;
use dropsel_core::command::Command;
use dropsel_core::component::Component;
use dropsel_core::subscription::Subscription;
use dropsel_core::subscriptions::document_clicks;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for per-instance listener identities.
static SELECT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Label shown when nothing is selected and no placeholder was given.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

const INDICATOR_CLOSED: &str = "▾";
const INDICATOR_OPEN: &str = "▴";
const ELLIPSIS: &str = "…";

/// Messages for the select component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A primary-button press anywhere on screen.
    Click { column: u16, row: u16 },
    /// Flip the list open or closed.
    Toggle,
    /// Pick the option at this index.
    Choose(usize),
    /// A click known to be outside the trigger.
    OutsideClick { column: u16, row: u16 },
    /// The host changed the `theme` input.
    ThemeChanged(Theme),
    /// The host changed the `darkMode` input.
    DarkModeChanged(bool),
    /// Emitted once per pick, carrying the option's value. Intercept it in
    /// the parent; feeding it back is a no-op.
    Changed(String),
}

/// Where the last `view` put things. Click handling reads these so that it
/// always tests against what is on screen now, not what was drawn earlier.
#[derive(Debug, Default)]
struct Regions {
    trigger: Cell<Option<Rect>>,
    list: Cell<Option<Rect>>,
    entries: Cell<Option<Rect>>,
}

/// A dropdown select over a fixed list of [`SelectOption`]s.
///
/// # Example
///
/// ```
/// use dropsel_widgets::props::SelectProps;
/// use dropsel_widgets::select::Select;
///
/// let mut select = Select::mount(
///     SelectProps::new([("Red", "r"), ("Blue", "b")]).with_selected(1),
/// );
/// assert_eq!(select.label(), "Blue");
///
/// select.toggle();
/// assert_eq!(select.choose(0).as_deref(), Some("r"));
/// assert!(!select.is_open());
/// ```
pub struct Select {
    id: u64,
    options: Vec<SelectOption>,
    selection: Option<usize>,
    open: bool,
    theme: Watched<Theme>,
    dark_mode: Watched<bool>,
    list_offset: u16,
    placeholder: String,
    bordered: bool,
    regions: Regions,
}

impl Select {
    /// Build the widget from host props.
    ///
    /// The selection is seeded from `props.selected` exactly once. An index
    /// past the end of `options` (or no index at all) leaves nothing
    /// selected and the trigger shows the placeholder.
    pub fn mount(props: SelectProps) -> Self {
        let SelectProps {
            options,
            selected,
            theme,
            dark_mode,
            placeholder,
        } = props;

        let selection = match selected {
            Some(idx) if idx < options.len() => Some(idx),
            Some(idx) => {
                tracing::warn!(
                    index = idx,
                    options = options.len(),
                    "initial selection out of range, showing placeholder"
                );
                None
            }
            None => None,
        };

        let id = SELECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id, options = options.len(), ?selection, %theme, dark_mode, "select mounted");

        Self {
            id,
            options,
            selection,
            open: false,
            theme: Watched::new(theme),
            dark_mode: Watched::new(dark_mode),
            list_offset: 0,
            placeholder: placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            bordered: false,
            regions: Regions::default(),
        }
    }

    /// Draw the trigger with a rounded border, making it three rows tall.
    pub fn with_border(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Identity of this instance's click listener.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// All options in display order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The selected option, if any.
    pub fn selection(&self) -> Option<&SelectOption> {
        self.selection.and_then(|i| self.options.get(i))
    }

    /// Index of the selected option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    /// Value of the selected option, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selection().map(|o| o.value.as_str())
    }

    /// Text the trigger shows before truncation.
    pub fn label(&self) -> &str {
        self.selection()
            .map(|o| o.name.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// The theme last pushed by the host.
    pub fn theme(&self) -> Theme {
        self.theme.value()
    }

    /// The dark-mode flag last pushed by the host.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.value()
    }

    /// Rows between the top of the trigger and the top of the list, as
    /// computed the last time the list opened.
    pub fn list_offset(&self) -> u16 {
        self.list_offset
    }

    /// Styles for the current theme and dark-mode inputs.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme(), self.dark_mode())
    }

    /// Style scope classes in effect, e.g. `["theme-ocean", "dark"]`.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.theme().class_name()];
        if self.dark_mode() {
            classes.push(DARK_CLASS);
        }
        classes
    }

    /// Where the trigger was last drawn.
    pub fn trigger_area(&self) -> Option<Rect> {
        self.regions.trigger.get()
    }

    /// Where the open list was last drawn; `None` while closed.
    pub fn list_area(&self) -> Option<Rect> {
        self.regions.list.get()
    }

    /// Flip the list. On opening, the list offset becomes the trigger's
    /// rendered height so the list sits directly under it.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            let trigger = self
                .regions
                .trigger
                .get()
                .unwrap_or_else(|| Rect::new(0, 0, 0, self.trigger_height()));
            self.list_offset = geometry::list_offset(trigger);
        }
        tracing::debug!(id = self.id, open = self.open, offset = self.list_offset, "toggled");
    }

    /// Pick the option at `index`, close the list and return its value.
    ///
    /// Returns `None`, changing nothing, when `index` is out of range.
    pub fn choose(&mut self, index: usize) -> Option<String> {
        let value = self.options.get(index)?.value.clone();
        self.selection = Some(index);
        self.open = false;
        tracing::debug!(id = self.id, index, value = %value, "option chosen");
        Some(value)
    }

    /// Close the list if it is open and the click missed the list currently
    /// on screen. Returns whether the list closed.
    pub fn outside_click(&mut self, column: u16, row: u16) -> bool {
        if !self.open {
            return false;
        }
        let inside = self
            .regions
            .list
            .get()
            .is_some_and(|list| geometry::contains(list, column, row));
        if inside {
            return false;
        }
        self.open = false;
        tracing::debug!(id = self.id, column, row, "closed by outside click");
        true
    }

    /// Mirror a new `theme` input. Returns whether it changed.
    pub fn watch_theme(&mut self, theme: Theme) -> bool {
        let changed = self.theme.set(theme).is_some();
        if changed {
            tracing::debug!(id = self.id, %theme, "theme changed");
        }
        changed
    }

    /// Mirror a new `darkMode` input. Returns whether it changed.
    pub fn watch_dark_mode(&mut self, dark: bool) -> bool {
        let changed = self.dark_mode.set(dark).is_some();
        if changed {
            tracing::debug!(id = self.id, dark, "dark mode changed");
        }
        changed
    }

    /// Route a raw click to toggle, pick or outside-close.
    pub fn click(&mut self, column: u16, row: u16) -> Command<Message> {
        let on_trigger = self
            .regions
            .trigger
            .get()
            .is_some_and(|t| geometry::contains(t, column, row));
        if on_trigger {
            self.toggle();
            return Command::none();
        }

        if self.open {
            if let (Some(list), Some(entries)) = (self.regions.list.get(), self.regions.entries.get()) {
                if geometry::contains(list, column, row) {
                    return match geometry::entry_at(entries, self.options.len(), column, row) {
                        Some(idx) => self.pick(idx),
                        None => Command::none(),
                    };
                }
            }
        }

        self.outside_click(column, row);
        Command::none()
    }

    fn pick(&mut self, index: usize) -> Command<Message> {
        match self.choose(index) {
            Some(value) => Command::message(Message::Changed(value)),
            None => Command::none(),
        }
    }

    fn trigger_height(&self) -> u16 {
        if self.bordered {
            3
        } else {
            1
        }
    }

    fn trigger_block(&self, palette: &Palette) -> Block<'static> {
        let block = Block::new()
            .style(palette.trigger)
            .padding(Padding::horizontal(1));
        if self.bordered {
            block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.indicator)
        } else {
            block
        }
    }

    fn render_trigger(&self, frame: &mut Frame, trigger: Rect, palette: &Palette) {
        let block = self.trigger_block(palette);
        let inner = block.inner(trigger);
        frame.render_widget(block, trigger);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Label, one space, indicator in the last column.
        let label_width = inner.width.saturating_sub(2);
        let label_style = if self.selection.is_some() {
            palette.trigger
        } else {
            palette.placeholder
        };
        let label = truncate(self.label(), label_width as usize, ELLIPSIS);
        frame.render_widget(
            Paragraph::new(Span::styled(label, label_style)),
            Rect {
                width: label_width,
                height: 1,
                ..inner
            },
        );

        let indicator = if self.open {
            INDICATOR_OPEN
        } else {
            INDICATOR_CLOSED
        };
        frame.render_widget(
            Paragraph::new(Span::styled(indicator, palette.indicator)),
            Rect {
                x: inner.right() - 1,
                width: 1,
                height: 1,
                ..inner
            },
        );
    }

    fn render_list(&self, frame: &mut Frame, trigger: Rect, palette: &Palette) {
        let rows = u16::try_from(self.options.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let list = geometry::list_area(trigger, self.list_offset, rows, frame.area());
        if list.is_empty() {
            self.regions.list.set(None);
            self.regions.entries.set(None);
            return;
        }

        frame.render_widget(Clear, list);
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border)
            .style(palette.list);
        let inner = block.inner(list);
        frame.render_widget(block, list);
        self.regions.list.set(Some(list));
        self.regions.entries.set(Some(inner));

        let text_width = inner.width.saturating_sub(2) as usize;
        for (i, option) in self
            .options
            .iter()
            .enumerate()
            .take(inner.height as usize)
        {
            let is_selected = self.selection == Some(i);
            let (prefix, style) = if is_selected {
                ("▸ ", palette.selected_item)
            } else {
                ("  ", palette.item)
            };
            let row = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };
            let text = format!("{prefix}{}", truncate(&option.name, text_width, ELLIPSIS));
            frame.render_widget(Paragraph::new(Span::styled(text, style)).style(style), row);
        }
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Click { column, row } => self.click(column, row),
            Message::Toggle => {
                self.toggle();
                Command::none()
            }
            Message::Choose(index) => self.pick(index),
            Message::OutsideClick { column, row } => {
                self.outside_click(column, row);
                Command::none()
            }
            Message::ThemeChanged(theme) => {
                self.watch_theme(theme);
                Command::none()
            }
            Message::DarkModeChanged(dark) => {
                self.watch_dark_mode(dark);
                Command::none()
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        let trigger = Rect {
            height: self.trigger_height().min(area.height),
            ..area
        };
        self.regions.trigger.set(Some(trigger));
        self.render_trigger(frame, trigger, &palette);

        if self.open {
            self.render_list(frame, trigger, &palette);
        } else {
            self.regions.list.set(None);
            self.regions.entries.set(None);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        vec![document_clicks(self.id, |column, row| Message::Click { column, row })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropsel_core::testing::buffer_to_string;
    use proptest::prelude::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn colors() -> SelectProps {
        SelectProps::new([("Red", "r"), ("Blue", "b")])
    }

    fn draw(select: &Select, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| select.view(frame, Rect::new(0, 0, width, 1.max(height / 2))))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(select: &Select) -> String {
        buffer_to_string(&draw(select, 24, 8))
    }

    fn row(screen: &str, n: usize) -> &str {
        screen.lines().nth(n).unwrap_or("")
    }

    #[test]
    fn mount_seeds_selection_without_event() {
        let select = Select::mount(colors().with_selected(1));
        assert_eq!(select.label(), "Blue");
        assert_eq!(select.selected_value(), Some("b"));
        assert!(!select.is_open());
        assert!(row(&screen(&select), 0).contains("Blue"));
    }

    #[test]
    fn scenario_select_closes_and_emits() {
        let mut select = Select::mount(colors().with_selected(1));
        screen(&select);

        assert!(select.update(Message::Click { column: 2, row: 0 }).is_none());
        assert!(select.is_open());
        let open = screen(&select);
        assert!(row(&open, 2).contains("Red"));
        assert!(row(&open, 3).contains("Blue"));

        let cmd = select.update(Message::Click { column: 4, row: 2 });
        assert_eq!(cmd.into_messages(), vec![Message::Changed("r".into())]);
        assert!(!select.is_open());
        assert_eq!(select.label(), "Red");
        assert!(row(&screen(&select), 0).contains("Red"));
    }

    #[test]
    fn scenario_outside_click_closes_silently() {
        let mut select = Select::mount(colors().with_selected(0));
        screen(&select);
        select.update(Message::Click { column: 0, row: 0 });
        screen(&select);
        assert!(select.is_open());

        let cmd = select.update(Message::Click { column: 20, row: 7 });
        assert!(cmd.is_none());
        assert!(!select.is_open());
        assert_eq!(select.label(), "Red");
    }

    #[test]
    fn scenario_dark_mode_toggle_is_cosmetic() {
        let mut select = Select::mount(colors().with_selected(0));
        let light = draw(&select, 24, 8);

        let cmd = select.update(Message::DarkModeChanged(true));
        assert!(cmd.is_none());
        assert!(select.dark_mode());
        assert_eq!(select.classes(), vec!["theme-default", "dark"]);
        assert!(!select.is_open());
        assert_eq!(select.selected_index(), Some(0));

        let dark = draw(&select, 24, 8);
        assert_ne!(light, dark);
        assert_eq!(buffer_to_string(&light), buffer_to_string(&dark));
    }

    #[test]
    fn out_of_range_selection_shows_placeholder() {
        let select = Select::mount(colors().with_selected(7));
        assert!(select.selection().is_none());
        assert_eq!(select.label(), DEFAULT_PLACEHOLDER);
        assert!(row(&screen(&select), 0).contains("Select..."));
    }

    #[test]
    fn empty_options_open_to_an_empty_list() {
        let mut select = Select::mount(SelectProps::default().with_placeholder("Nothing here"));
        screen(&select);
        select.toggle();
        let open = screen(&select);
        assert!(row(&open, 0).contains("Nothing here"));
        assert_eq!(select.list_area().map(|a| a.height), Some(2));
        assert!(select.update(Message::Click { column: 3, row: 1 }).is_none());
        assert!(select.is_open());
    }

    #[test]
    fn list_opens_flush_under_trigger() {
        let mut plain = Select::mount(colors());
        screen(&plain);
        plain.toggle();
        assert_eq!(plain.list_offset(), 1);
        screen(&plain);
        assert_eq!(plain.list_area().map(|a| a.y), Some(1));

        let mut boxed = Select::mount(colors()).with_border(true);
        screen(&boxed);
        boxed.toggle();
        assert_eq!(boxed.list_offset(), 3);
        screen(&boxed);
        assert_eq!(boxed.list_area().map(|a| a.y), Some(3));
    }

    #[test]
    fn list_with_more_options_than_rows_still_shows_entries() {
        let many = (0..=u16::MAX as usize).map(|i| (format!("Item {i}"), format!("v{i}")));
        let mut select = Select::mount(SelectProps::new(many));
        draw(&select, 30, 40);
        select.toggle();
        let open = buffer_to_string(&draw(&select, 30, 40));

        assert_eq!(select.list_area(), Some(Rect::new(0, 1, 30, 39)));
        assert!(row(&open, 2).contains("Item 0"));
        assert!(row(&open, 38).contains("Item 36"));

        let cmd = select.update(Message::Click { column: 4, row: 2 });
        assert_eq!(cmd.into_messages(), vec![Message::Changed("v0".into())]);
        assert!(!select.is_open());
    }

    #[test]
    fn offset_before_first_render_uses_natural_height() {
        let mut boxed = Select::mount(colors()).with_border(true);
        boxed.toggle();
        assert_eq!(boxed.list_offset(), 3);
    }

    #[test]
    fn click_on_list_padding_keeps_it_open() {
        let mut select = Select::mount(colors());
        screen(&select);
        select.toggle();
        screen(&select);
        // Top border row of the list.
        assert!(select.update(Message::Click { column: 3, row: 1 }).is_none());
        assert!(select.is_open());
    }

    #[test]
    fn outside_click_while_closed_does_nothing() {
        let mut select = Select::mount(colors().with_selected(1));
        screen(&select);
        assert!(!select.outside_click(10, 5));
        assert!(select.update(Message::Click { column: 10, row: 5 }).is_none());
        assert!(!select.is_open());
        assert_eq!(select.label(), "Blue");
    }

    #[test]
    fn stale_list_region_is_not_used() {
        let mut select = Select::mount(colors());
        screen(&select);
        select.toggle();
        screen(&select);
        let old_list = select.list_area().unwrap();
        select.toggle();
        screen(&select);
        assert_eq!(select.list_area(), None);

        // Reopen without a render: the old region must not swallow the click.
        select.toggle();
        assert!(select.outside_click(old_list.x + 1, old_list.y + 1));
    }

    #[test]
    fn choose_out_of_range_is_ignored() {
        let mut select = Select::mount(colors().with_selected(0));
        select.toggle();
        assert!(select.update(Message::Choose(5)).is_none());
        assert!(select.is_open());
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn duplicate_values_track_the_clicked_entry() {
        let mut select = Select::mount(SelectProps::new([("One", "x"), ("Two", "x")]));
        let cmd = select.update(Message::Choose(1));
        assert_eq!(cmd.into_message(), Some(Message::Changed("x".into())));
        assert_eq!(select.label(), "Two");
    }

    #[test]
    fn changed_fed_back_is_a_noop() {
        let mut select = Select::mount(colors().with_selected(0));
        assert!(select.update(Message::Changed("b".into())).is_none());
        assert_eq!(select.selected_value(), Some("r"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let mut select = Select::mount(
            SelectProps::new([("An extraordinarily long colour name", "long")]).with_selected(0),
        );
        let out = screen(&select);
        let trigger = row(&out, 0);
        assert!(trigger.contains('…'));
        assert!(trigger.contains('▾'));

        select.toggle();
        assert!(row(&screen(&select), 0).contains('▴'));
    }

    #[test]
    fn each_instance_has_its_own_listener() {
        let a = Select::mount(colors());
        let b = Select::mount(colors());
        let sa = a.subscriptions();
        let sb = b.subscriptions();
        assert_eq!(sa.len(), 1);
        assert_ne!(sa[0].id(), sb[0].id());
    }

    #[test]
    fn watch_reports_changes_only() {
        let mut select = Select::mount(colors().with_theme(Theme::Ocean));
        assert!(!select.watch_theme(Theme::Ocean));
        assert!(select.watch_theme(Theme::Purple));
        assert_eq!(select.classes(), vec!["theme-purple"]);
    }

    proptest! {
        #[test]
        fn prop_mount_displays_seeded_name(
            names in prop::collection::vec("[A-Za-z]{1,8}", 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let idx = pick.index(names.len());
            let props = SelectProps::new(names.iter().map(|n| (n.clone(), n.to_lowercase())))
                .with_selected(idx);
            let select = Select::mount(props);
            prop_assert_eq!(select.label(), names[idx].as_str());
        }

        #[test]
        fn prop_toggle_parity(clicks in 0usize..40) {
            let mut select = Select::mount(colors());
            screen(&select);
            for _ in 0..clicks {
                let cmd = select.update(Message::Click { column: 1, row: 0 });
                prop_assert!(cmd.is_none());
                screen(&select);
            }
            prop_assert_eq!(select.is_open(), clicks % 2 == 1);
        }

        #[test]
        fn prop_choose_closes_and_emits_once(
            opens in 0usize..4,
            pick in 0usize..2,
        ) {
            let mut select = Select::mount(colors());
            for _ in 0..opens {
                select.toggle();
            }
            let msgs = select.update(Message::Choose(pick)).into_messages();
            prop_assert!(!select.is_open());
            prop_assert_eq!(msgs, vec![Message::Changed(colors().options[pick].value.clone())]);
        }

        #[test]
        fn prop_theme_mirrors_latest(updates in prop::collection::vec(0usize..4, 1..20)) {
            let mut select = Select::mount(colors());
            for u in updates {
                let theme = Theme::ALL[u];
                prop_assert!(select.update(Message::ThemeChanged(theme)).is_none());
                prop_assert_eq!(select.theme(), theme);
            }
        }
    }
}
