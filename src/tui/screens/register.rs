//! Registration screen: the three-step form, review and submission.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::RegistrationDraft;
use crate::submit::SubmissionResponse;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{Form, Toast, draw_form, draw_progress, draw_toast};
use crate::wizard::{Step, SubmissionStatus, Wizard, WizardError};

/// Frames of the pending indicator shown while a submission is in flight.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title of the toast raised when the handler rejects a submission.
pub const FAILURE_TITLE: &str = "Submission Failed";

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegisterState {
    wizard: Wizard,
    form: Form,
    toast: Option<Toast>,
    toast_ttl: Duration,
    spinner: usize,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl RegisterState {
    /// Creates an empty registration on the first step.
    pub fn new(toast_ttl: Duration) -> Self {
        let wizard = Wizard::new();
        let form = Form::new(wizard.step().fields());
        Self {
            wizard,
            form,
            toast: None,
            toast_ttl,
            spinner: 0,
        }
    }

    /// Returns the underlying state machine.
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Returns the current step's form.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the visible toast, if any.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Returns the current spinner glyph.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.spinner % SPINNER.len()]
    }

    /// Discards the registration in progress.
    pub fn reset(&mut self) {
        *self = Self::new(self.toast_ttl);
    }

    /// Applies the handler's response to the in-flight submission.
    ///
    /// A rejection raises a toast; the form keeps its values.
    pub fn finish(&mut self, response: SubmissionResponse) -> Result<SubmissionStatus, WizardError> {
        let status = self.wizard.finish_submit(response)?.clone();
        if let SubmissionStatus::Failed(message) = &status {
            self.toast = Some(Toast::error(FAILURE_TITLE, message.clone(), self.toast_ttl));
        }
        self.sync_form();
        Ok(status)
    }

    /// Clears a dismissed submission outcome.
    pub fn acknowledge(&mut self) {
        self.wizard.acknowledge();
    }

    /// Advances the spinner and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.wizard.is_submitting() {
            self.spinner = self.spinner.wrapping_add(1);
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Rebuilds the form after a step change.
    fn sync_form(&mut self) {
        let fields = self.wizard.step().fields();
        if self.form.fields() != fields {
            self.form = Form::new(fields);
        }
    }

    fn next(&mut self) -> Action {
        if self.wizard.step().is_final() {
            return self.submit();
        }
        match self.wizard.advance() {
            Ok(_) => self.sync_form(),
            Err(errors) => self.form.focus_first_error(&errors),
        }
        Action::None
    }

    fn submit(&mut self) -> Action {
        match self.wizard.begin_submit() {
            Ok(record) => {
                self.toast = None;
                self.spinner = 0;
                Action::Submit(record)
            }
            Err(WizardError::Incomplete(errors)) => {
                self.sync_form();
                self.form.focus_first_error(&errors);
                Action::None
            }
            Err(_) => Action::None,
        }
    }

    fn previous(&mut self) -> Action {
        if self.wizard.step_index() == 0 {
            return Action::Navigate(Screen::Landing);
        }
        self.wizard.retreat();
        self.sync_form();
        Action::None
    }
}

impl ScreenState for RegisterState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.wizard.is_submitting() {
            // Leaving abandons the in-flight submission; nothing else is accepted.
            return match key.code {
                KeyCode::Esc => Action::Navigate(Screen::Landing),
                _ => Action::None,
            };
        }

        let focused = self.form.focused_field();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(field) = focused {
                    self.wizard.cycle_choice(field, key.code == KeyCode::Right);
                }
                Action::None
            }
            KeyCode::Char(ch) => {
                match focused {
                    Some(field) if field.is_choice() => {
                        if ch == ' ' {
                            self.wizard.cycle_choice(field, true);
                        }
                    }
                    Some(field) => self.wizard.push_char(field, ch),
                    None => {}
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(field) = focused {
                    self.wizard.pop_char(field);
                }
                Action::None
            }
            KeyCode::Enter => self.next(),
            KeyCode::Esc => self.previous(),
            _ => Action::None,
        }
    }
}

/// Rows of the review summary. Dietary needs appear only when given.
pub fn review_rows(draft: &RegistrationDraft) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (
            "Full Name",
            format!("{} {}", draft.first_name, draft.last_name),
        ),
        ("Email", draft.email.clone()),
        ("Phone", draft.phone.clone()),
        (
            "Event",
            draft.event.value().map(|e| e.label()).unwrap_or("-").to_string(),
        ),
        (
            "Ticket Type",
            draft
                .ticket_type
                .value()
                .map(|t| t.label())
                .unwrap_or("-")
                .to_string(),
        ),
    ];
    if !draft.dietary_needs.is_empty() {
        rows.push(("Dietary Needs", draft.dietary_needs.clone()));
    }
    rows
}

/// Renders the registration screen.
#[mutants::skip]
pub fn draw_register(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Event Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [progress_area, _gap, title_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let wizard = state.wizard();
    let step = wizard.step();

    draw_progress(wizard.step_index(), frame, progress_area);

    let title = Paragraph::new(Line::from(Span::styled(
        step.name(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_area);

    match step {
        Step::Review => draw_review(state, frame, content_area),
        _ => draw_form(
            state.form(),
            wizard.draft(),
            wizard.errors(),
            frame,
            content_area,
        ),
    }

    let footer_text = if wizard.is_submitting() {
        "Submitting... please wait  Esc: leave"
    } else {
        match step {
            Step::PersonalDetails => "Tab: next field  Enter: next  Esc: cancel  F1: help",
            Step::EventChoices => {
                "Tab: next field  ←/→: choose  Enter: next  Esc: previous  F1: help"
            }
            Step::Review => "Enter: submit registration  Esc: previous  F1: help",
        }
    };
    let footer =
        Paragraph::new(Line::from(footer_text)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(toast) = state.toast() {
        draw_toast(toast, frame, area);
    }
}

#[mutants::skip]
fn draw_review(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let wizard = state.wizard();
    let mut lines = vec![
        Line::from(Span::styled(
            "Review Your Information",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    for (label, value) in review_rows(wizard.draft()) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<15}"), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }

    let errors = wizard.errors();
    if !errors.is_empty() {
        lines.push(Line::from(""));
        for field in errors.fields() {
            for message in errors.get(field) {
                lines.push(Line::from(Span::styled(
                    format!("{}: {message}", field.label()),
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    let status_line = if wizard.is_submitting() {
        Line::from(Span::styled(
            format!("{} Submitting registration...", state.spinner_frame()),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "[ Submit Registration ]",
            Style::default().fg(Color::Green),
        ))
    };
    lines.push(status_line);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
