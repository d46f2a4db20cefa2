//! Transient notification drawn over the bottom of the screen.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// A notification that disappears after its time to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    title: String,
    message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    /// Creates an error toast. An empty `message` is replaced by [`FALLBACK_MESSAGE`].
    pub fn error(title: impl Into<String>, message: impl Into<String>, ttl: Duration) -> Self {
        Self::error_at(title, message, ttl, Instant::now())
    }

    /// Like [`Toast::error`] with an explicit creation time.
    pub fn error_at(
        title: impl Into<String>,
        message: impl Into<String>,
        ttl: Duration,
        now: Instant,
    ) -> Self {
        let message = message.into();
        Self {
            title: title.into(),
            message: if message.is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
            shown_at: now,
            ttl,
        }
    }

    /// Returns the title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` once the toast has outlived its time to live.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

/// Renders `toast` in a bordered box along the bottom of `area`.
#[mutants::skip]
pub fn draw_toast(toast: &Toast, frame: &mut Frame, area: Rect) {
    let height = 4_u16.min(area.height);
    let width = area.width.saturating_sub(4).min(70);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(Span::styled(
            toast.title(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.message()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}
