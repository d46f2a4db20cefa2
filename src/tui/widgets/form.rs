//! Field list with focus management, rendered against a registration draft.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldErrors, RegistrationDraft};

/// Height of one field row: border, value, border.
pub const ROW_HEIGHT: u16 = 3;

/// The fields of one step and which of them has focus.
///
/// Values and errors live in the [`Wizard`](crate::wizard::Wizard); the form
/// only tracks layout and focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
}

impl Form {
    /// Creates a form over `fields`. Focus starts on the first field.
    pub fn new(fields: impl Into<Vec<Field>>) -> Self {
        Self {
            fields: fields.into(),
            focus: 0,
        }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused field, or `None` for an empty form.
    pub fn focused_field(&self) -> Option<Field> {
        self.fields.get(self.focus).copied()
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Focuses `field` if it is part of this form.
    pub fn focus_field(&mut self, field: Field) {
        if let Some(pos) = self.fields.iter().position(|&f| f == field) {
            self.focus = pos;
        }
    }

    /// Focuses the first field that has an error, if any.
    pub fn focus_first_error(&mut self, errors: &FieldErrors) {
        if let Some(field) = self.fields.iter().copied().find(|&f| errors.contains(f)) {
            self.focus_field(field);
        }
    }

    /// Returns the fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Rows needed to draw every field.
    pub fn height(&self) -> u16 {
        ROW_HEIGHT * self.fields.len() as u16
    }
}

/// Renders `form` within `area`, reading values from `draft`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(
    form: &Form,
    draft: &RegistrationDraft,
    errors: &FieldErrors,
    frame: &mut Frame,
    area: Rect,
) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, &field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;
        let error = errors.first(field);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let value = draft.display_value(field);
        let mut spans = Vec::new();
        if field.is_choice() {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
        }
        if value.is_empty() {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(value));
        }
        if field.is_choice() {
            spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
        } else if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error text sits on the bottom border of the field.
        if let Some(err) = error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::model::{Event, Selection};

    use super::*;

    fn make_form() -> Form {
        Form::new([Field::Event, Field::TicketType, Field::DietaryNeeds])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
        assert_eq!(form.focused_field(), Some(Field::Event));
    }

    #[test]
    fn focus_next_wraps() {
        let mut form = make_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused_field(), Some(Field::DietaryNeeds));
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn empty_form_focus_is_noop() {
        let mut form = Form::new(Vec::new());
        form.focus_next();
        form.focus_prev();
        assert_eq!(form.focus(), 0);
        assert_eq!(form.focused_field(), None);
        assert_eq!(form.height(), 0);
    }

    #[test]
    fn focus_field_ignores_foreign_field() {
        let mut form = make_form();
        form.focus_field(Field::TicketType);
        assert_eq!(form.focus(), 1);
        form.focus_field(Field::Email);
        assert_eq!(form.focus(), 1);
    }

    #[test]
    fn focus_first_error_picks_earliest_in_form_order() {
        let mut form = make_form();
        form.focus_field(Field::DietaryNeeds);
        let mut errors = FieldErrors::new();
        errors.push(Field::TicketType, "x");
        errors.push(Field::Event, "y");
        form.focus_first_error(&errors);
        assert_eq!(form.focused_field(), Some(Field::Event));
    }

    #[test]
    fn focus_first_error_without_errors_keeps_focus() {
        let mut form = make_form();
        form.focus_next();
        form.focus_first_error(&FieldErrors::new());
        assert_eq!(form.focus(), 1);
    }

    #[test]
    fn height_is_three_rows_per_field() {
        assert_eq!(make_form().height(), 9);
    }

    // --- Rendering ---

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(form: &Form, draft: &RegistrationDraft, errors: &FieldErrors) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_form(form, draft, errors, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_labels_and_placeholders() {
        let output = render(&make_form(), &RegistrationDraft::new(), &FieldErrors::new());
        assert!(output.contains("Select Event *"));
        assert!(output.contains("Dietary Needs (Optional)"));
        assert!(!output.contains("Dietary Needs (Optional) *"));
        assert!(output.contains("Choose an event"));
    }

    #[test]
    fn renders_selected_label() {
        let draft = RegistrationDraft {
            event: Selection::Selected(Event::DesignSummit2024),
            ..RegistrationDraft::new()
        };
        let output = render(&make_form(), &draft, &FieldErrors::new());
        assert!(output.contains("Design Summit 2024"));
    }

    #[test]
    fn renders_error_text() {
        let mut errors = FieldErrors::new();
        errors.push(Field::TicketType, "Please select a ticket type.");
        let output = render(&make_form(), &RegistrationDraft::new(), &errors);
        assert!(output.contains("Please select a ticket type."));
    }
}
