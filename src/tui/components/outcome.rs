//! # Outcome Modal Component
//!
//! Centered overlay announcing how the game ended. Enter or Esc dismisses
//! it; `r` starts over.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::state::Outcome;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub struct OutcomeModal<'a> {
    pub outcome: &'a Outcome,
    pub move_count: u32,
    pub palette: &'a Palette,
}

impl<'a> OutcomeModal<'a> {
    pub fn new(outcome: &'a Outcome, move_count: u32, palette: &'a Palette) -> Self {
        Self {
            outcome,
            move_count,
            palette,
        }
    }
}

/// Centered rect of fixed size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl Component for OutcomeModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 9, area);
        frame.render_widget(Clear, overlay);

        let style = self.palette.status(self.outcome.status);
        let block = Block::bordered()
            .title(format!(" {} ", self.outcome.status.label()))
            .title_bottom(Line::from(" Enter Close  r Play again ").centered())
            .border_style(style)
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::styled(self.outcome.title.clone(), style.add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::raw(self.outcome.message.clone()),
            Line::raw(""),
            Line::raw(format!("Moves used: {}", self.move_count)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(self.palette.base())
                .block(block),
            overlay,
        );
    }
}

impl EventHandler for OutcomeModal<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissOutcome),
            TuiEvent::InputChar('r') => Some(Action::Reset),
            _ => None,
        }
    }
}
