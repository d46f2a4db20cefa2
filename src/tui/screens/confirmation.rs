//! Confirmation screen, shown once the handler accepts a registration.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the confirmation screen.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationState {
    message: String,
}

impl ConfirmationState {
    /// Creates a confirmation with no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handler's confirmation message.
    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    /// Returns the confirmation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ScreenState for ConfirmationState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Action::StartRegistration,
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('h') => {
                Action::Navigate(Screen::Landing)
            }
            _ => Action::None,
        }
    }
}

/// Renders the confirmation screen.
#[mutants::skip]
pub fn draw_confirmation(state: &ConfirmationState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Registration Successful! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(Span::styled(
            "Registration Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(state.message()),
        Line::from(""),
        Line::from("We're excited to see you at the event."),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: register another  h/Esc: home",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    let [centered] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn stores_message() {
        let mut state = ConfirmationState::new();
        state.set_message("Thank you for registering, Al!".into());
        assert_eq!(state.message(), "Thank you for registering, Al!");
    }

    #[test]
    fn enter_starts_another_registration() {
        let mut state = ConfirmationState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Action::StartRegistration
        );
    }

    #[test]
    fn esc_goes_home() {
        let mut state = ConfirmationState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::Esc)),
            Action::Navigate(Screen::Landing)
        );
    }

    #[test]
    fn renders_message() {
        let mut state = ConfirmationState::new();
        state.set_message("Thank you for registering, Al!".into());
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_confirmation(&state, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Registration Successful!"));
        assert!(output.contains("Thank you for registering, Al!"));
        assert!(output.contains("excited to see you"));
    }
}
