use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;

/// Public welcome screen shown before sign-in
pub struct Landing;

impl Landing {
    /// Render the landing screen
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "AI SaaS Dashboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Monitor API usage, quotas and team activity in one place.",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
        ];

        if let Some(message) = &state.status_message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled(
                "l",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" sign in    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "s",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" create account    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
