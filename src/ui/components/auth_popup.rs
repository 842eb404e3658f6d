use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::{AuthField, AuthForm, AuthFormKind};

/// Modal login/signup form
pub struct AuthPopup;

impl AuthPopup {
    /// Render the auth modal
    pub fn render(frame: &mut Frame, area: Rect, form: &AuthForm) {
        // Clear the area first
        frame.render_widget(Clear, area);

        let (title, submit_label) = match form.kind {
            AuthFormKind::Login => (" Sign In ", "sign in"),
            AuthFormKind::Signup => (" Create Account ", "create account"),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fields = form.fields();
        let mut constraints: Vec<Constraint> = vec![Constraint::Length(1)]; // message line
        for _ in fields {
            constraints.push(Constraint::Length(3)); // input box
            constraints.push(Constraint::Length(1)); // field errors
        }
        constraints.push(Constraint::Min(1)); // footer hints

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        Self::render_message(frame, rows[0], form);

        for (i, field) in fields.iter().enumerate() {
            Self::render_field(frame, rows[1 + i * 2], form, *field);
            Self::render_field_errors(frame, rows[2 + i * 2], form, *field);
        }

        Self::render_footer(frame, rows[rows.len() - 1], submit_label);
    }

    /// Top-level form message from the last submission
    fn render_message(frame: &mut Frame, area: Rect, form: &AuthForm) {
        let Some(result) = &form.result else {
            return;
        };
        let color = if result.success {
            Color::Green
        } else {
            Color::Red
        };
        let line = Line::from(Span::styled(
            format!(" {}", result.message),
            Style::default().fg(color),
        ));
        frame.render_widget(Paragraph::new(vec![line]), area);
    }

    fn render_field(frame: &mut Frame, area: Rect, form: &AuthForm, field: AuthField) {
        let focused = form.focus == field;
        let border_color = if focused { Color::Green } else { Color::DarkGray };

        let block = Block::default()
            .title(format!(" {} ", Self::field_label(field)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let display = Self::display_value(form, field);
        let cursor = Self::display_cursor(form, field);
        let line = Self::line_with_cursor(&display, cursor, focused);

        frame.render_widget(Paragraph::new(vec![line]).block(block), area);
    }

    /// Field errors from the last submission, shown under the input
    fn render_field_errors(frame: &mut Frame, area: Rect, form: &AuthForm, field: AuthField) {
        let Some(result) = &form.result else {
            return;
        };
        let errors = match field {
            AuthField::Name => &result.errors.name,
            AuthField::Email => &result.errors.email,
            AuthField::Password => &result.errors.password,
        };
        let Some(first) = errors.first() else {
            return;
        };
        let line = Line::from(Span::styled(
            format!("  {first}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(vec![line]), area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, submit_label: &str) {
        let line = Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(format!(":{submit_label} "), Style::default().fg(Color::DarkGray)),
            Span::styled("Tab", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(":next field ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+s", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(":switch form ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(":close", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(vec![line]), area);
    }

    fn field_label(field: AuthField) -> &'static str {
        match field {
            AuthField::Name => "Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }

    /// Password input renders masked
    fn display_value(form: &AuthForm, field: AuthField) -> String {
        let value = form.value(field);
        if field == AuthField::Password {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    /// Cursor byte offset within the display string. The mask glyph is
    /// multi-byte, so the password offset is recomputed per character.
    fn display_cursor(form: &AuthForm, field: AuthField) -> usize {
        let value = form.value(field);
        let cursor = form.cursor.min(value.len());
        if field == AuthField::Password {
            value[..cursor].chars().count() * "•".len()
        } else {
            cursor
        }
    }

    /// Build the input line with a block cursor on the focused field
    fn line_with_cursor(display: &str, cursor: usize, focused: bool) -> Line<'static> {
        let text_style = Style::default().fg(Color::White);
        if !focused {
            return Line::from(Span::styled(display.to_string(), text_style));
        }

        let cursor_style = Style::default().fg(Color::Black).bg(Color::Green);
        let cursor = cursor.min(display.len());
        let before = &display[..cursor];
        let after = &display[cursor..];

        let cursor_char = after.chars().next();
        let rest = cursor_char.map_or("", |c| &after[c.len_utf8()..]);
        let cursor_display = cursor_char.map_or("\u{2588}".to_string(), |c| c.to_string());

        Line::from(vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(cursor_display, cursor_style),
            Span::styled(rest.to_string(), text_style),
        ])
    }
}
