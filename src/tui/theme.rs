//! Colour palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::rules::{Difficulty, Passenger, Status};
use crate::core::state::{NoticeLevel, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub background: Color,
    pub bank: Color,
    pub river: Color,
    pub boat: Color,
    pub missionary: Color,
    pub cannibal: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub hint: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: Color::Black,
                dim: Color::DarkGray,
                background: Color::White,
                bank: Color::LightGreen,
                river: Color::LightBlue,
                boat: Color::Rgb(133, 77, 14),
                missionary: Color::Blue,
                cannibal: Color::Red,
                accent: Color::Blue,
                success: Color::Green,
                error: Color::Red,
                hint: Color::Rgb(161, 98, 7),
            },
            Theme::Dark => Self {
                text: Color::White,
                dim: Color::Gray,
                background: Color::Rgb(17, 24, 39),
                bank: Color::Rgb(20, 83, 45),
                river: Color::Rgb(30, 58, 138),
                boat: Color::Rgb(113, 63, 18),
                missionary: Color::LightBlue,
                cannibal: Color::LightRed,
                accent: Color::LightCyan,
                success: Color::LightGreen,
                error: Color::LightRed,
                hint: Color::Yellow,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn passenger(&self, passenger: Passenger) -> Style {
        let color = match passenger {
            Passenger::Missionary => self.missionary,
            Passenger::Cannibal => self.cannibal,
        };
        Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, status: Status) -> Style {
        let color = match status {
            Status::Playing => self.accent,
            Status::Won => self.success,
            Status::Lost => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn difficulty(&self, difficulty: Difficulty) -> Style {
        let color = match difficulty {
            Difficulty::Easy => self.success,
            Difficulty::Hard => self.error,
        };
        Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
    }

    pub fn notice(&self, level: NoticeLevel) -> Style {
        let color = match level {
            NoticeLevel::Info => self.accent,
            NoticeLevel::Success => self.success,
            NoticeLevel::Error => self.error,
        };
        Style::default().fg(color)
    }
}
