//! # TitleBar Component
//!
//! Two-line header: game title with the difficulty badge, then the move
//! counter against the limit and the status banner.
//!
//! ```text
//! River Escape: Missionaries vs Cannibals  EASY
//! Moves: 3 / 15   Status: In Progress
//! ```
//!
//! Stateless. It renders whatever `GameState` it is given, plus a marker
//! while auto-solve is replaying.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::rules::GameState;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const TITLE: &str = "River Escape: Missionaries vs Cannibals";

pub struct TitleBar<'a> {
    pub game: &'a GameState,
    pub auto_solving: bool,
    pub palette: &'a Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(game: &'a GameState, auto_solving: bool, palette: &'a Palette) -> Self {
        Self {
            game,
            auto_solving,
            palette,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let title = Line::from(vec![
            Span::styled(
                TITLE,
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", self.game.difficulty.label()),
                self.palette.difficulty(self.game.difficulty),
            ),
        ]);

        let mut status = vec![
            Span::styled("Moves: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{} / {}", self.game.move_count, self.game.max_moves)),
            Span::raw("   "),
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(self.game.status.label(), self.palette.status(self.game.status)),
        ];
        if self.auto_solving {
            status.push(Span::styled(
                "   Auto-solving...",
                Style::default().fg(self.palette.dim).add_modifier(Modifier::ITALIC),
            ));
        }

        vec![title, Line::from(status)]
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
