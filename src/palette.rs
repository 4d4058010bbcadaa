use std::str::FromStr;

use anyhow::bail;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoColor {
    Green,
    Orange,
    Pink,
}

impl LogoColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoColor::Green => "green",
            LogoColor::Orange => "orange",
            LogoColor::Pink => "pink",
        }
    }

    pub fn as_color(&self) -> Color {
        match self {
            LogoColor::Green => Color::Rgb(67, 181, 129),
            LogoColor::Orange => Color::Rgb(255, 152, 0),
            LogoColor::Pink => Color::Rgb(255, 105, 180),
        }
    }
}

impl FromStr for LogoColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(LogoColor::Green),
            "orange" => Ok(LogoColor::Orange),
            "pink" => Ok(LogoColor::Pink),
            other => bail!("unknown color '{other}' (expected green, orange or pink)"),
        }
    }
}

// The built-in palette the logo rotates through
pub fn site_palette() -> Vec<LogoColor> {
    vec![LogoColor::Green, LogoColor::Orange, LogoColor::Pink]
}
