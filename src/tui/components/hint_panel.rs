//! # Hint Panel Component
//!
//! Shows the next move of the optimal solution. Only drawn while hints are
//! switched on and the game is still being played.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::solution::hint_for;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const HINT_HEIGHT: u16 = 3;

pub struct HintPanel<'a> {
    pub move_count: u32,
    pub palette: &'a Palette,
}

impl<'a> HintPanel<'a> {
    pub fn new(move_count: u32, palette: &'a Palette) -> Self {
        Self {
            move_count,
            palette,
        }
    }
}

impl Component for HintPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.palette.hint);
        let block = Block::bordered()
            .title(" Hint ")
            .title_style(style.add_modifier(Modifier::BOLD))
            .border_style(style);
        let paragraph = Paragraph::new(hint_for(self.move_count))
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
