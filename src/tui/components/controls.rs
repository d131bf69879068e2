//! # Controls Component
//!
//! The "Move Boat" button, the game rules card, and the key help line,
//! together with the keyboard map that turns key presses into `Action`s.
//!
//! | Key           | Action                                  |
//! |---------------|-----------------------------------------|
//! | `m` / `c`     | put a missionary / cannibal in the boat |
//! | `M` / `C`     | take one back out                       |
//! | Enter, Space  | move the boat                           |
//! | `d`           | toggle hard mode                        |
//! | `h`           | show / hide hints                       |
//! | `s`           | start / stop auto-solve                 |
//! | `r`           | reset                                   |
//! | `t`           | light / dark theme                      |
//! | `q`           | quit                                    |

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::rules::{Passenger, Side, Status};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

pub const RULES: [&str; 6] = [
    "Move all 3 Missionaries and 3 Cannibals across the river.",
    "The boat can carry 1 or 2 people and cannot move empty.",
    "Missionaries cannot be outnumbered by Cannibals on either side.",
    "Press m / c (or click a figure) to board; M / C (or click the boat) to unboard.",
    "Press Enter to move the boat.",
    "In Hard Mode, you must solve the puzzle in 11 moves.",
];

pub const RULES_HEIGHT: u16 = RULES.len() as u16 + 2;
pub const BUTTON_HEIGHT: u16 = 1;

/// Keyboard map. Props describe just enough of the game to pick targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub boat_side: Side,
    pub auto_solving: bool,
}

impl EventHandler for KeyMap {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let side = self.boat_side;
        match event {
            TuiEvent::ForceQuit | TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Submit => Some(Action::CommitMove),
            TuiEvent::Escape if self.auto_solving => Some(Action::StopAutoSolve),
            TuiEvent::InputChar('m') => Some(Action::Select {
                passenger: Passenger::Missionary,
                side,
            }),
            TuiEvent::InputChar('c') => Some(Action::Select {
                passenger: Passenger::Cannibal,
                side,
            }),
            TuiEvent::InputChar('M') => Some(Action::Deselect(Passenger::Missionary)),
            TuiEvent::InputChar('C') => Some(Action::Deselect(Passenger::Cannibal)),
            TuiEvent::InputChar('d') => Some(Action::ToggleDifficulty),
            TuiEvent::InputChar('h') => Some(Action::ToggleHints),
            TuiEvent::InputChar('r') => Some(Action::Reset),
            TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
            TuiEvent::InputChar('s') if self.auto_solving => Some(Action::StopAutoSolve),
            TuiEvent::InputChar('s') => Some(Action::StartAutoSolve),
            _ => None,
        }
    }
}

/// The clickable "Move Boat" line.
pub struct MoveButton<'a> {
    pub boat_side: Side,
    pub enabled: bool,
    pub palette: &'a Palette,
}

impl<'a> MoveButton<'a> {
    pub fn new(boat_side: Side, status: Status, palette: &'a Palette) -> Self {
        Self {
            boat_side,
            enabled: status == Status::Playing,
            palette,
        }
    }

    pub fn label(boat_side: Side) -> String {
        let target = match boat_side.opposite() {
            Side::Left => "Left",
            Side::Right => "Right",
        };
        format!("[ Move Boat to {} ]", target)
    }

    /// Screen cells covered by the label when centered in `area`.
    pub fn hit_area(boat_side: Side, area: Rect) -> Rect {
        let width = (Self::label(boat_side).chars().count() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, BUTTON_HEIGHT.min(area.height))
    }

    pub fn hit_test(boat_side: Side, area: Rect, column: u16, row: u16) -> Option<Action> {
        Self::hit_area(boat_side, area)
            .contains(Position::new(column, row))
            .then_some(Action::CommitMove)
    }
}

impl Component for MoveButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.enabled {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.palette.dim)
                .add_modifier(Modifier::DIM)
        };
        let rect = Self::hit_area(self.boat_side, area);
        frame.render_widget(
            Paragraph::new(Span::styled(Self::label(self.boat_side), style)),
            rect,
        );
    }
}

/// Rules card plus the key help line underneath.
pub struct RulesCard<'a> {
    pub auto_solving: bool,
    pub show_hints: bool,
    pub palette: &'a Palette,
}

impl<'a> RulesCard<'a> {
    pub fn new(auto_solving: bool, show_hints: bool, palette: &'a Palette) -> Self {
        Self {
            auto_solving,
            show_hints,
            palette,
        }
    }

    fn help_line(&self) -> Line<'static> {
        let key = Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(self.palette.dim);
        let solve = if self.auto_solving { "Stop solve" } else { "Auto solve" };
        let hints = if self.show_hints { "Hide hints" } else { "Show hints" };
        let mut spans = Vec::new();
        for (k, label) in [
            ("r", "Reset"),
            ("h", hints),
            ("s", solve),
            ("d", "Hard mode"),
            ("t", "Theme"),
            ("q", "Quit"),
        ] {
            spans.push(Span::styled(format!(" {k} "), key));
            spans.push(Span::styled(format!("{label} "), text));
        }
        Line::from(spans)
    }
}

impl Component for RulesCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [rules_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let bullet = Style::default().fg(self.palette.accent);
        let lines: Vec<Line> = RULES
            .iter()
            .map(|rule| Line::from(vec![Span::styled("• ", bullet), Span::raw(*rule)]))
            .collect();
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .title(" Game Rules ")
                        .border_style(Style::default().fg(self.palette.dim)),
                ),
            rules_area,
        );
        frame.render_widget(
            Paragraph::new(self.help_line()).alignment(Alignment::Center),
            help_area,
        );
    }
}
