//! One-line step indicator for the registration form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::wizard::Step;

/// How a step relates to the one currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// Classifies `step` relative to the current step index.
pub fn step_state(step: Step, current: usize) -> StepState {
    match step.index().cmp(&current) {
        std::cmp::Ordering::Less => StepState::Complete,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Upcoming,
    }
}

/// Renders every step on one line.
///
/// Display format: `✓ 01 Personal Details   ▸ 02 Event Choices   03 Review & Submit`
/// - completed steps in Green with a check mark
/// - the current step in bold Cyan with a marker
/// - upcoming steps in DarkGray
#[mutants::skip]
pub fn draw_progress(current: usize, frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    for (i, &step) in Step::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let (prefix, style) = match step_state(step, current) {
            StepState::Complete => ("✓ ", Style::default().fg(Color::Green)),
            StepState::Current => (
                "▸ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepState::Upcoming => ("  ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(
            format!("{prefix}{} {}", step.id(), step.name()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
