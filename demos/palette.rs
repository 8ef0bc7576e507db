//! # Palette Demo
//!
//! A host application embedding one select:
//! - Mounting the widget from props (built in code or read from a JSON file)
//! - Routing its click subscription and intercepting `Changed`
//! - Pushing `theme` / `darkMode` updates from the host with `t` and `d`
//!
//! Run with: `cargo run --example palette [-- --props props.json]`
//! Set `DROPSEL_LOG=debug` to see widget events in `dropsel-demo.log`.

use clap::Parser;
use dropsel::crossterm::event::{KeyCode, KeyModifiers};
use dropsel::ratatui::layout::{Constraint, Layout};
use dropsel::ratatui::style::{Color, Style};
use dropsel::ratatui::text::{Line, Span};
use dropsel::ratatui::widgets::{Block, Borders, Paragraph};
use dropsel::ratatui::Frame;
use dropsel::widgets::{select, Select, SelectProps, Theme};
use dropsel::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palette", about = "Pick a colour with a themed select")]
struct Args {
    /// JSON file with the select's props (options, selected, theme, darkMode).
    #[arg(long)]
    props: Option<PathBuf>,
}

struct Demo {
    color: Select,
    theme: Theme,
    dark: bool,
    last: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Color(select::Message),
    CycleTheme,
    ToggleDark,
    Quit,
}

impl Model for Demo {
    type Message = Msg;
    type Flags = SelectProps;

    fn init(props: SelectProps) -> (Self, Command<Msg>) {
        let demo = Demo {
            theme: props.theme,
            dark: props.dark_mode,
            color: Select::mount(props).with_border(true),
            last: None,
        };
        (demo, Command::none())
    }

    // The host owns theme and dark mode; the select only ever sees the new
    // values through its watch messages.
    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Color(select::Message::Changed(value)) => {
                tracing::info!(%value, "colour picked");
                self.last = Some(value);
                Command::none()
            }
            Msg::Color(m) => self.color.update(m).map(Msg::Color),
            Msg::CycleTheme => {
                self.theme = self.theme.next();
                self.color
                    .update(select::Message::ThemeChanged(self.theme))
                    .map(Msg::Color)
            }
            Msg::ToggleDark => {
                self.dark = !self.dark;
                self.color
                    .update(select::Message::DarkModeChanged(self.dark))
                    .map(Msg::Color)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [header, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(frame.area());
        let [picker, _] =
            Layout::horizontal([Constraint::Length(28), Constraint::Fill(1)]).areas(body);
        let [_, status] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(body);

        let help = Line::from(vec![
            Span::styled("click", Style::default().fg(Color::Cyan)),
            Span::raw(" choose  "),
            Span::styled("t", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" theme ({})  ", self.theme)),
            Span::styled("d", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" dark ({})  ", if self.dark { "on" } else { "off" })),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(
            Paragraph::new(help).block(Block::default().borders(Borders::ALL).title(" dropsel ")),
            header,
        );

        let last = match &self.last {
            Some(v) => format!("last value: {v}"),
            None => "last value: (none)".to_string(),
        };
        frame.render_widget(
            Paragraph::new(last).style(Style::default().fg(Color::DarkGray)),
            status,
        );

        // Drawn last so the open list covers whatever is beneath it.
        self.color.view(frame, picker);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs: Vec<_> = self
            .color
            .subscriptions()
            .into_iter()
            .map(|s| s.map(Msg::Color))
            .collect();
        subs.push(terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                KeyCode::Char('t') => Some(Msg::CycleTheme),
                KeyCode::Char('d') => Some(Msg::ToggleDark),
                _ => None,
            },
            _ => None,
        }));
        subs
    }
}

fn default_props() -> SelectProps {
    SelectProps::new([
        ("Crimson", "crimson"),
        ("Ocean blue", "ocean-blue"),
        ("Lemon chiffon", "lemon-chiffon"),
        ("Rebecca purple", "rebeccapurple"),
        ("A very long colour name that will not fit", "long"),
    ])
    .with_selected(1)
}

#[dropsel::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dropsel::logging::init_file_logging("dropsel-demo.log")?;

    let props = match args.props {
        Some(path) => SelectProps::from_path(path)?,
        None => default_props(),
    };

    let options = ProgramOptions {
        title: Some("dropsel palette".into()),
        ..ProgramOptions::default()
    };
    let model = dropsel::run_with::<Demo>(props, options).await?;
    match model.last {
        Some(value) => println!("picked: {value}"),
        None => println!("nothing picked"),
    }
    Ok(())
}
