use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use quotadeck_core::overview::{StatCard, STAT_CARDS};

/// Headline metric cards shown across the top of the overview
pub struct StatCards;

impl StatCards {
    /// Render the stat card row
    pub fn render(frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = STAT_CARDS
            .iter()
            .map(|_| Constraint::Ratio(1, STAT_CARDS.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (card, column) in STAT_CARDS.iter().zip(columns.iter()) {
            Self::render_card(frame, *column, card);
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &StatCard) {
        let lines = vec![
            Line::from(Span::styled(
                card.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(card.delta, Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" {}", card.caption),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
