use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, Screen};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![];

        // Current route
        spans.push(Span::styled(
            format!(" {} ", state.route()),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));

        // Signed-in user
        if let Some(user) = state.session.user() {
            spans.push(Span::styled(
                format!("{} ", user.email),
                Style::default().fg(Color::Cyan),
            ));
        }

        if state.auth_form.is_some() {
            spans.push(Span::styled(
                " -- FORM -- ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            Self::hint(&mut spans, "Enter", ":Submit ", Color::Green);
            Self::hint(&mut spans, "Tab", ":Field ", Color::Cyan);
            Self::hint(&mut spans, "Esc", ":Close ", Color::Yellow);
        } else if state.drag.is_dragging() {
            spans.push(Span::styled(
                " -- GRAB -- ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            Self::hint(&mut spans, "j/k", ":Move ", Color::Cyan);
            Self::hint(&mut spans, "Enter", ":Drop ", Color::Green);
            Self::hint(&mut spans, "Esc", ":Cancel ", Color::Yellow);
        } else {
            match state.screen() {
                Screen::Landing => {
                    Self::hint(&mut spans, "l", ":Sign in ", Color::Green);
                    Self::hint(&mut spans, "s", ":Sign up ", Color::Green);
                }
                Screen::Usage => {
                    Self::hint(&mut spans, "j/k", ":Nav ", Color::Cyan);
                    Self::hint(&mut spans, "Space", ":Select ", Color::Green);
                    Self::hint(&mut spans, "m", ":Grab ", Color::Magenta);
                    Self::hint(&mut spans, "Enter", ":Detail ", Color::Green);
                    Self::hint(&mut spans, "t", ":Range ", Color::Blue);
                }
                Screen::Overview | Screen::Placeholder(_) => {
                    Self::hint(&mut spans, "Tab", ":Screen ", Color::Cyan);
                    Self::hint(&mut spans, "o", ":Sign out ", Color::Yellow);
                }
            }
            Self::hint(&mut spans, "?", ":Help ", Color::Cyan);
            Self::hint(&mut spans, "q", ":Quit ", Color::Red);
        }

        // Selection summary
        if !state.selection.is_empty() {
            spans.push(Span::styled(
                format!(" {} selected ", state.selection.len()),
                Style::default().fg(Color::Magenta),
            ));
        }

        // Transient message
        if let Some(message) = &state.status_message {
            spans.push(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Green),
            ));
        }

        // Clock
        spans.push(Span::styled(
            format!(" [{}] ", chrono::Local::now().format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }

    fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str, color: Color) {
        spans.push(Span::styled(
            key,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
    }
}

#[cfg(test)]
mod tests {
    // StatusBar is purely UI, tested through integration tests
}
