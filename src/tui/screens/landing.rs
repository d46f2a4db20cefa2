//! Landing screen: event blurb and entry point into registration.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::Event;
use crate::tui::action::{Action, ScreenState};

/// State for the landing screen. Stateless; exists for uniform dispatch.
#[derive(Debug, Clone, Default)]
pub struct LandingState;

impl ScreenState for LandingState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Action::StartRegistration,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the landing screen.
#[mutants::skip]
pub fn draw_landing(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" evreg ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(Span::styled(
            "Event Registration",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Complete the steps below to secure your spot at our next event."),
        Line::from(""),
    ];
    for event in Event::all() {
        lines.push(Line::from(Span::styled(
            format!("• {}", event.label()),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to register, F1 for help, q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    let [centered] = Layout::vertical([Constraint::Length(13)])
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
    fn enter_starts_registration() {
        let mut state = LandingState;
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Action::StartRegistration
        );
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = LandingState;
        assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn other_keys_ignored() {
        let mut state = LandingState;
        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn renders_title_and_events() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw_landing(frame, frame.area())).unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Event Registration"));
        assert!(output.contains("Design Summit 2024"));
        assert!(output.contains("Press Enter to register"));
    }
}
