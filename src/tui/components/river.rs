//! # River Component
//!
//! The playing field: two banks with their populations, the river between
//! them, and the boat moored at whichever bank it is on.
//!
//! ```text
//! ┌Left Bank───┐                      ┌Right Bank──┐
//! │            │ Select passengers... │            │
//! │ M  M  M    │ ┌Boat────┐           │            │
//! │            │ │ M  C   │           │            │
//! │ C  C  C    │ └────────┘           │            │
//! └────────────┘                      └────────────┘
//! ```
//!
//! `RiverLayout` is shared with mouse hit testing so a click lands on the
//! same cells that were drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::Action;
use crate::core::rules::{GameState, Passenger, Selection, Side, Status};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const BOAT_WIDTH: u16 = 12;
const BOAT_HEIGHT: u16 = 3;
/// Each figure is drawn as " M " plus a one-cell gap.
const FIGURE_WIDTH: u16 = 4;

/// Screen regions of the playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiverLayout {
    pub left_bank: Rect,
    pub river: Rect,
    pub right_bank: Rect,
    pub boat: Rect,
}

impl RiverLayout {
    pub fn new(area: Rect, boat_side: Side) -> Self {
        let [left_bank, river, right_bank] = Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .areas(area);

        let width = BOAT_WIDTH.min(river.width);
        let height = BOAT_HEIGHT.min(river.height);
        let x = match boat_side {
            Side::Left => river.x,
            Side::Right => river.x + river.width - width,
        };
        let y = river.y + river.height - height;
        let boat = Rect::new(x, y, width, height);

        Self {
            left_bank,
            river,
            right_bank,
            boat,
        }
    }

    pub fn bank(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_bank,
            Side::Right => self.right_bank,
        }
    }

    /// The rows of missionaries and cannibals inside a bank's border.
    pub fn bank_rows(&self, side: Side) -> (Rect, Rect) {
        let inner = Block::bordered().inner(self.bank(side));
        let [_, missionaries, _, cannibals] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        (missionaries, cannibals)
    }

    pub fn boat_row(&self) -> Rect {
        Block::bordered().inner(self.boat)
    }

    /// Maps a click to the action it stands for: staging from the boat's
    /// bank, or unstaging a figure sitting in the boat.
    pub fn hit_test(&self, column: u16, row: u16, boat_load: Selection) -> Option<Action> {
        let point = Position::new(column, row);

        for side in [Side::Left, Side::Right] {
            let (missionaries, cannibals) = self.bank_rows(side);
            if missionaries.contains(point) {
                return Some(Action::Select {
                    passenger: Passenger::Missionary,
                    side,
                });
            }
            if cannibals.contains(point) {
                return Some(Action::Select {
                    passenger: Passenger::Cannibal,
                    side,
                });
            }
        }

        let boat = self.boat_row();
        if boat.contains(point) {
            let slot = (column - boat.x) / FIGURE_WIDTH;
            return boat_figures(boat_load)
                .nth(slot as usize)
                .map(Action::Deselect);
        }
        None
    }
}

fn boat_figures(load: Selection) -> impl Iterator<Item = Passenger> {
    std::iter::repeat_n(Passenger::Missionary, load.missionaries as usize)
        .chain(std::iter::repeat_n(Passenger::Cannibal, load.cannibals as usize))
}

fn figure(passenger: Passenger, palette: &Palette) -> Span<'static> {
    let glyph = match passenger {
        Passenger::Missionary => " M ",
        Passenger::Cannibal => " C ",
    };
    Span::styled(glyph, palette.passenger(passenger))
}

fn figure_line(passenger: Passenger, count: u8, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for _ in 0..count {
        spans.push(figure(passenger, palette));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub struct River<'a> {
    pub game: &'a GameState,
    /// Figures to draw in the boat: the staged selection, or the load in transit.
    pub boat_load: Selection,
    pub palette: &'a Palette,
}

impl<'a> River<'a> {
    pub fn new(game: &'a GameState, boat_load: Selection, palette: &'a Palette) -> Self {
        Self {
            game,
            boat_load,
            palette,
        }
    }

    fn render_bank(&self, frame: &mut Frame, layout: &RiverLayout, side: Side) {
        let bank = self.game.bank(side);
        let selectable = side == self.game.boat.position && self.game.status == Status::Playing;
        let title = match side {
            Side::Left => " Left Bank ",
            Side::Right => " Right Bank ",
        };
        let border_style = if selectable {
            Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.dim)
        };
        let block = Block::bordered()
            .title(title)
            .border_style(border_style)
            .style(Style::default().bg(self.palette.bank).fg(self.palette.text));
        frame.render_widget(block, layout.bank(side));

        let (missionaries, cannibals) = layout.bank_rows(side);
        frame.render_widget(
            Paragraph::new(figure_line(Passenger::Missionary, bank.missionaries, self.palette)),
            missionaries,
        );
        frame.render_widget(
            Paragraph::new(figure_line(Passenger::Cannibal, bank.cannibals, self.palette)),
            cannibals,
        );
    }
}

impl Component for River<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = RiverLayout::new(area, self.game.boat.position);

        self.render_bank(frame, &layout, Side::Left);
        self.render_bank(frame, &layout, Side::Right);

        let water = Style::default().bg(self.palette.river).fg(self.palette.text);
        let caption = format!(
            "Select passengers from the {} bank",
            self.game.boat.position.label()
        );
        frame.render_widget(
            Paragraph::new(caption)
                .alignment(Alignment::Center)
                .style(water),
            layout.river,
        );

        let boat = Block::bordered()
            .title(" Boat ")
            .border_style(Style::default().fg(self.palette.boat).add_modifier(Modifier::BOLD))
            .style(water);
        frame.render_widget(boat, layout.boat);

        let mut spans = Vec::new();
        for passenger in boat_figures(self.boat_load) {
            spans.push(figure(passenger, self.palette));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout.boat_row());
    }
}
