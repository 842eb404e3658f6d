use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Help popup widget
pub struct HelpPopup;

impl HelpPopup {
    /// Render the help popup
    pub fn render(frame: &mut Frame, area: Rect) {
        // Clear the area first
        frame.render_widget(Clear, area);

        let help_text = vec![
            Line::from(vec![Span::styled(
                "quotadeck - AI SaaS usage dashboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Navigation",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Self::help_line("j / ↓", "Select next row"),
            Self::help_line("k / ↑", "Select previous row"),
            Self::help_line("g", "Select first row"),
            Self::help_line("G", "Select last row"),
            Self::help_line("Tab / S-Tab", "Next/previous sidebar screen"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Table",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Self::help_line("Space", "Toggle row selection"),
            Self::help_line("a", "Select/clear all rows"),
            Self::help_line("Enter", "Open row detail panel"),
            Self::help_line("m", "Grab row for reordering"),
            Self::help_line("t", "Cycle chart time range"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "While grabbing",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Self::help_line("j / k", "Move hover target"),
            Self::help_line("Enter", "Drop onto hovered row"),
            Self::help_line("Esc", "Cancel, keep order"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Session",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Self::help_line("l", "Sign in"),
            Self::help_line("s", "Create account"),
            Self::help_line("o", "Sign out"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "General",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Self::help_line("b", "Toggle sidebar"),
            Self::help_line("?", "Toggle this help"),
            Self::help_line("q", "Quit"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to close",
                Style::default().fg(Color::DarkGray),
            )]),
        ];

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(help_text).block(block);

        frame.render_widget(paragraph, area);
    }

    fn help_line(key: &str, description: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_line() {
        let line = HelpPopup::help_line("test", "description");
        assert_eq!(line.spans.len(), 2);
    }
}
