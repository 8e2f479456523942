mod app;
mod config;
mod event;
mod input;
mod menu;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use app::{App, MenuId, SLOT_CAPTIONS, SLOT_PLAY, SLOT_QUALITY};
use config::Config;
use event::{EventPump, PlayerEvent};
use input::codes;
use menu::TriggerControl;
use ui::components::control_bar::{BarSlot, ControlBar};
use ui::components::popup_menu::PopupMenu;
use ui::layout::{PlayerLayout, anchored_popup, centered};

#[derive(Parser)]
#[command(
    name = "tenfoot",
    version,
    about = "Terminal mock media player with gamepad-friendly popup menus"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Honor extended gamepad/navigation input codes")]
    gamepad: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.gamepad {
        config.extended_pad = true;
    }

    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventPump::new(Duration::from_secs(1));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventPump,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            PlayerEvent::Key(key) => handle_key(app, key),
            PlayerEvent::Tick => app.tick(),
            PlayerEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            let _ = app.config.save();
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            // Esc walks out one layer at a time
            if app.caption_settings_open {
                app.close_caption_settings();
            } else if let Some(id) = app.open_menu() {
                app.dismiss(id);
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Tab => app.cycle_bar_focus(),
        _ => {
            if let Some(code) = codes::from_key_event(&key) {
                app.handle_code(code);
            }
        }
    }
}

fn bar_slots(app: &App) -> Vec<BarSlot> {
    vec![
        BarSlot {
            label: if app.playing { "Pause" } else { "Play" }.to_string(),
            focused: app.slot_focused(SLOT_PLAY),
            pressed: app.playing,
        },
        BarSlot {
            label: "CC".to_string(),
            focused: app.slot_focused(SLOT_CAPTIONS),
            pressed: app.captions_button.borrow().is_pressed(),
        },
        BarSlot {
            label: "HD".to_string(),
            focused: app.slot_focused(SLOT_QUALITY),
            pressed: app.quality_button.borrow().is_pressed(),
        },
    ]
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = PlayerLayout::new(area);

    let status = format!(
        " CC: {}  HD: {} ",
        app.config.caption_track, app.config.quality
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " tenfoot ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            status,
            Style::default().fg(colors.dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let state_line = if app.playing { "▶ Playing" } else { "⏸ Paused" };
    let surface = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            state_line,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Big Buck Bunny (mock stream)",
            Style::default().fg(colors.dim()),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(surface, centered(layout.surface, 40, 5));

    let control_bar = ControlBar {
        position_secs: app.position_secs,
        duration_secs: app.duration_secs,
        slots: bar_slots(app),
        theme: app.theme,
    };
    frame.render_widget(&control_bar, layout.control_bar);

    if let Some(id) = app.open_menu() {
        let popup = PopupMenu {
            menu: app.menu(id),
            theme: app.theme,
            focus: app.focus_owner.get(),
        };
        let width = popup.desired_width();
        let height = popup.desired_height();
        // Anchor near the triggering button at the right end of the bar
        let offset = match id {
            MenuId::Captions => width + 12,
            MenuId::Quality => width + 4,
        };
        let anchor_x = area.right().saturating_sub(offset);
        let popup_area = anchored_popup(area, anchor_x, width, height);
        frame.render_widget(&popup, popup_area);
    }

    if app.caption_settings_open {
        render_caption_settings(frame, app);
    }
}

fn render_caption_settings(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let panel = centered(frame.area(), 46, 8);

    frame.render_widget(Clear, panel);
    let block = Block::bordered()
        .title(" Caption settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.menu_bg()));
    let inner = block.inner(panel);
    block.render(panel, frame.buffer_mut());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Font, color, and background options",
            Style::default().fg(colors.fg()),
        )),
        Line::from(Span::styled(
            "would live here.",
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc/Backspace] Back",
            Style::default().fg(colors.dim()),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
