use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use quotadeck_core::overview::ACTIVITY_FEED;

/// Recent activity feed on the overview screen
pub struct ActivityFeed;

impl ActivityFeed {
    /// Render the activity feed
    pub fn render(frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ACTIVITY_FEED
            .iter()
            .map(|entry| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled("• ", Style::default().fg(Color::Cyan)),
                        Span::styled(entry.title, Style::default().fg(Color::White)),
                        Span::styled(
                            format!("  {}", entry.when),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", entry.detail),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Recent Activity ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray)),
        );

        frame.render_widget(list, area);
    }
}
