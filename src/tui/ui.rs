use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::action::Action;
use crate::core::rules::{Selection, Status};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::controls::{BUTTON_HEIGHT, RULES_HEIGHT};
use crate::tui::components::hint_panel::HINT_HEIGHT;
use crate::tui::components::{
    HintPanel, MoveButton, OutcomeModal, River, RiverLayout, RulesCard, TitleBar, ToastStack,
};
use crate::tui::theme::Palette;

/// Screen regions, computed the same way for drawing and for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub hint: Rect,
    pub river: Rect,
    pub button: Rect,
    pub rules: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, app: &App) -> Self {
        use Constraint::{Length, Min};
        let hint_height = if hint_visible(app) { HINT_HEIGHT } else { 0 };
        let [title, hint, river, button, rules] = Layout::vertical([
            Length(2),
            Length(hint_height),
            Min(8),
            Length(BUTTON_HEIGHT),
            Length(RULES_HEIGHT + 1),
        ])
        .areas(area);
        Self {
            title,
            hint,
            river,
            button,
            rules,
        }
    }
}

fn hint_visible(app: &App) -> bool {
    app.show_hints && app.game.status == Status::Playing
}

/// What sits in the boat: the staged selection, or the crew while it is
/// crossing or being replayed by the solver.
pub fn boat_load(app: &App) -> Selection {
    if app.judgement_pending || app.is_auto_solving() {
        Selection::new(app.game.boat.missionaries, app.game.boat.cannibals)
    } else {
        app.selection
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    let layout = ScreenLayout::new(area, app);

    frame.render_widget(Block::new().style(palette.base()), area);

    TitleBar::new(&app.game, app.is_auto_solving(), &palette).render(frame, layout.title);
    if hint_visible(app) {
        HintPanel::new(app.game.move_count, &palette).render(frame, layout.hint);
    }
    River::new(&app.game, boat_load(app), &palette).render(frame, layout.river);
    MoveButton::new(app.game.boat.position, app.game.status, &palette)
        .render(frame, layout.button);
    RulesCard::new(app.is_auto_solving(), app.show_hints, &palette).render(frame, layout.rules);

    ToastStack::new(&tui.toasts, &palette).render(frame, area);

    if let Some(outcome) = &app.outcome {
        OutcomeModal::new(outcome, app.game.move_count, &palette).render(frame, area);
    }
}

/// Hit test: given a click position, find the action (if any) under it.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, app: &App) -> Option<Action> {
    let layout = ScreenLayout::new(frame_area, app);
    RiverLayout::new(layout.river, app.game.boat.position)
        .hit_test(column, row, boat_load(app))
        .or_else(|| MoveButton::hit_test(app.game.boat.position, layout.button, column, row))
}
