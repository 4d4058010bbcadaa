use anyhow::{Context, Result};
use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

mod cycle;
mod palette;
mod ui;

use crate::cycle::Cycler;
use crate::palette::LogoColor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds between color changes
    #[arg(short, long, default_value_t = 400)]
    tick_ms: u64,

    /// Comma-separated palette override (green, orange, pink)
    #[arg(short, long, value_delimiter = ',')]
    colors: Option<Vec<LogoColor>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let palette = args.colors.unwrap_or_else(palette::site_palette);
    let colors = Cycler::new(palette).context("Failed to build the color cycler")?;

    // Set up the terminal
    setup_terminal()?;

    // Initialize the TUI
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the UI loop
    let result = ui::run_ui(&mut terminal, colors, Duration::from_millis(args.tick_ms));

    // Clean up
    restore_terminal()?;

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    std::io::stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    std::io::stdout()
        .execute(LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    Ok(())
}
