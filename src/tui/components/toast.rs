//! # Toast Stack Component
//!
//! Transient notifications in the top-right corner, newest on top. Each
//! toast disappears after the configured time.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ToastStackState` lives in `TuiState` and remembers which notices it
//!   has already picked up from `App`
//! - `ToastStack` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::core::state::Notice;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 4;
const MAX_VISIBLE: usize = 3;

struct Toast {
    notice: Notice,
    shown_at: Instant,
}

pub struct ToastStackState {
    toasts: Vec<Toast>,
    last_seen: u64,
    ttl: Duration,
}

impl ToastStackState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            last_seen: 0,
            ttl,
        }
    }

    /// Picks up notices newer than the last one seen. Returns true if any arrived.
    pub fn sync(&mut self, notices: &VecDeque<Notice>, now: Instant) -> bool {
        let before = self.toasts.len();
        let seen = self.last_seen;
        for notice in notices.iter().filter(|n| n.seq > seen) {
            self.last_seen = notice.seq;
            self.toasts.push(Toast {
                notice: notice.clone(),
                shown_at: now,
            });
        }
        self.toasts.len() != before
    }

    /// Drops expired toasts. Returns true if any were removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest first, capped at what fits on screen.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.toasts.iter().rev().take(MAX_VISIBLE).map(|t| &t.notice)
    }
}

pub struct ToastStack<'a> {
    state: &'a ToastStackState,
    palette: &'a Palette,
}

impl<'a> ToastStack<'a> {
    pub fn new(state: &'a ToastStackState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Component for ToastStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width - width;
        let mut y = area.y;

        for notice in self.state.visible() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            let style = self.palette.notice(notice.level);

            let mut lines = vec![Line::styled(
                notice.title.clone(),
                style.add_modifier(Modifier::BOLD),
            )];
            if let Some(description) = &notice.description {
                lines.push(Line::styled(
                    description.clone(),
                    Style::default().fg(self.palette.text),
                ));
            }

            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .style(self.palette.base())
                    .block(Block::bordered().border_style(style)),
                rect,
            );
            y += TOAST_HEIGHT;
        }
    }
}
