mod render;

use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::{
    Block as MessageBlock, ChatReply, Clipboard, CopyOutcome, ExportError, ParseOptions,
    SystemClipboard, Table, copy_with_fallback, export::save_table, parse_chat_reply,
};
use chrono::{DateTime, Utc};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

/// Reads standard input instead of a file.
const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "chatmark")]
#[command(version, about = "View assistant chat replies in the terminal")]
struct Args {
    /// Reply text file, or `-` to read standard input
    input: String,

    /// Print the parsed reply as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,

    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Fallback "clipboard": keeps the text so the viewer can show it for manual
/// selection.
#[derive(Debug, Default)]
struct SelectionOverlay {
    text: Option<String>,
}

impl Clipboard for SelectionOverlay {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

struct App {
    title: String,
    reply: ChatReply,
    config: Config,
    block_list_state: ListState,
    /// Rendered lines per block, parallel to `reply.blocks`.
    rendered: Vec<Vec<Line<'static>>>,
    status: Option<String>,
    /// CSV shown for manual copying when the clipboard is unavailable.
    overlay: Option<String>,
}

impl App {
    fn new(title: String, reply: ChatReply, config: Config) -> Self {
        let rendered = reply.blocks.iter().map(render::block_lines).collect();
        let mut app = Self {
            title,
            reply,
            config,
            block_list_state: ListState::default(),
            rendered,
            status: None,
            overlay: None,
        };

        // Select first block if available
        if !app.reply.blocks.is_empty() {
            app.block_list_state.select(Some(0));
        }

        app
    }

    fn next_block(&mut self) {
        if self.reply.blocks.is_empty() {
            return;
        }
        let i = match self.block_list_state.selected() {
            Some(i) => (i + 1) % self.reply.blocks.len(),
            None => 0,
        };
        self.block_list_state.select(Some(i));
    }

    fn previous_block(&mut self) {
        if self.reply.blocks.is_empty() {
            return;
        }
        let i = match self.block_list_state.selected() {
            Some(0) | None => self.reply.blocks.len() - 1,
            Some(i) => i - 1,
        };
        self.block_list_state.select(Some(i));
    }

    fn selected_block(&self) -> Option<&MessageBlock> {
        self.block_list_state
            .selected()
            .and_then(|i| self.reply.blocks.get(i))
    }

    fn selected_table(&self) -> Option<&Table> {
        self.selected_block().and_then(MessageBlock::as_table)
    }

    /// Rendered line offset of the selected block, used to scroll the content pane.
    fn selected_offset(&self) -> usize {
        let selected = self.block_list_state.selected().unwrap_or(0);
        self.rendered.iter().take(selected).map(Vec::len).sum()
    }

    fn copy_selected_table(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(table) = self.selected_table() else {
            self.status = Some("Select a table to copy".to_string());
            return;
        };
        let csv = table.to_delimited_text();

        let mut overlay = SelectionOverlay::default();
        let status = match copy_with_fallback(&csv, clipboard, &mut overlay) {
            Ok(CopyOutcome::Primary) => "Copied table as CSV".to_string(),
            Ok(CopyOutcome::Fallback) => {
                self.overlay = overlay.text;
                "Clipboard unavailable: select the CSV and copy it manually".to_string()
            }
            Err(e) => format!("Copy failed: {e}"),
        };
        self.status = Some(status);
    }

    fn save_selected_table(&mut self, now: DateTime<Utc>) {
        let Some(table) = self.selected_table() else {
            self.status = Some("Select a table to save".to_string());
            return;
        };

        let export = &self.config.export;
        let status = match save_table(table, &export.directory, &export.file_prefix, now) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                log::error!("Failed to save table: {e}");
                format!("Save failed: {e}")
            }
        };
        self.status = Some(status);
    }
}

fn parse_options(config: &Config) -> ParseOptions {
    ParseOptions {
        indent_width: config.parsing.indent_width,
        max_list_depth: config.parsing.max_list_depth,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN_MARKER {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read standard input");
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read reply file '{input}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    log::debug!("Using config: {config:?}");

    let content = read_input(&args.input)?;
    let reply = parse_chat_reply(&content, &parse_options(&config));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(args.input, reply, config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut clipboard = SystemClipboard::new();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.overlay.is_some() {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    app.overlay = None;
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_block(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_block(),
                KeyCode::Char('c') => app.copy_selected_table(&mut clipboard),
                KeyCode::Char('s') => app.save_selected_table(Utc::now()),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let actions_height = if app.reply.actions.is_empty() {
        0
    } else {
        app.reply.actions.len().min(5) as u16 + 2
    };
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(actions_height)])
        .split(rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main[0]);

    // Block list panel
    let block_items: Vec<ListItem> = app
        .reply
        .blocks
        .iter()
        .map(|block| ListItem::new(Line::from(render::block_label(block))))
        .collect();

    let block_list = List::new(block_items)
        .block(Block::default().borders(Borders::ALL).title("Blocks"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(block_list, panes[0], &mut app.block_list_state);

    // Content panel
    let content_text: Vec<Line> = if app.rendered.is_empty() {
        vec![Line::from("Empty reply")]
    } else {
        app.rendered.iter().flatten().cloned().collect()
    };
    let offset = u16::try_from(app.selected_offset()).unwrap_or(u16::MAX);

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .scroll((offset, 0));

    f.render_widget(content, panes[1]);

    // Proposed actions panel
    if actions_height > 0 {
        let action_items: Vec<ListItem> = app
            .reply
            .actions
            .iter()
            .map(|action| {
                let scope = action.scope.as_deref().unwrap_or("?");
                let mut spans = vec![
                    Span::styled(format!("[{scope}] "), Style::default().fg(Color::DarkGray)),
                    Span::raw(action.display_label().to_string()),
                ];
                if let Some(change) = action.value_change() {
                    spans.push(Span::styled(
                        format!("  ({change})"),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let actions = List::new(action_items)
            .block(Block::default().borders(Borders::ALL).title("Proposed actions"));
        f.render_widget(actions, main[1]);
    }

    // Status and instructions
    let status = Paragraph::new(Line::from(app.status.clone().unwrap_or_default()))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(status, rows[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("c: Copy table | s: Save table"),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[2]);

    // Manual-copy overlay
    if let Some(csv) = &app.overlay {
        let area = centered(f.area(), 80, 60);
        let overlay = Paragraph::new(csv.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Copy this CSV (Esc to close)"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(Clear, area);
        f.render_widget(overlay, area);
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
