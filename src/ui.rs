use std::time::Duration;

use crate::cycle::Cycler;
use crate::palette::LogoColor;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

// Rendered in the cycler's current color on every frame
const LOGO: [&str; 6] = [
    r"  _                      ",
    r" | | ___   __ _  ___     ",
    r" | |/ _ \ / _` |/ _ \    ",
    r" | | (_) | (_| | (_) |   ",
    r" |_|\___/ \__, |\___/    ",
    r"          |___/          ",
];

pub struct AppState {
    pub colors: Cycler<LogoColor>,
    pub paused: bool,
    pub ticks: u64,
}

impl AppState {
    pub fn new(colors: Cycler<LogoColor>) -> Self {
        Self {
            colors,
            paused: false,
            ticks: 0,
        }
    }

    // One animation step; does nothing while paused
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.colors.advance();
        self.ticks += 1;
    }

    // Keyboard-driven step, works even while paused
    pub fn advance_manual(&mut self) {
        self.colors.advance();
        self.ticks += 1;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }
}

pub fn run_ui<B: Backend>(
    terminal: &mut Terminal<B>,
    colors: Cycler<LogoColor>,
    tick_interval: Duration,
) -> Result<()> {
    let mut app_state = AppState::new(colors);

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),                  // Status bar with border
                    Constraint::Min(LOGO.len() as u16 + 2), // Logo
                    Constraint::Length(1),                  // Help line
                ])
                .split(f.area());

            let color = app_state.colors.current();

            let status_text = format!(
                "Logocycle: {} ({} colors, tick {}){}",
                color.as_str(),
                app_state.colors.len(),
                app_state.ticks,
                if app_state.paused { " [paused]" } else { "" },
            );
            let status = Paragraph::new(status_text)
                .style(Style::default().fg(Color::White))
                .block(Block::default().borders(Borders::BOTTOM));
            f.render_widget(status, chunks[0]);

            let lines: Vec<Line> = LOGO.iter().map(|row| Line::from(*row)).collect();
            let logo = Paragraph::new(lines).alignment(Alignment::Center).style(
                Style::default()
                    .fg(color.as_color())
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(logo, chunks[1]);

            let help_text = "space/n: Next color | p: Pause | q: Quit";
            let help_line = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
            f.render_widget(help_line, chunks[2]);
        })?;

        // A poll timeout is an animation tick
        if event::poll(tick_interval)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') | KeyCode::Char('n') => app_state.advance_manual(),
                    KeyCode::Char('p') => app_state.toggle_paused(),
                    _ => {}
                }
            }
        } else {
            app_state.tick();
        }
    }

    Ok(())
}
