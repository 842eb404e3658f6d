use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use quotadeck_core::overview::NAV_ITEMS;

use crate::state::AppState;

/// Navigation sidebar widget
pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .map(|item| {
                let active = state.route() == item.route;
                let marker = if active { "● " } else { "  " };
                let style = if active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
                    Span::styled(item.title, style),
                ]))
            })
            .collect();

        let max_name_width = area.width.saturating_sub(12) as usize;
        let title = match state.session.user() {
            Some(user) => format!(" AI SaaS - {} ", truncate_to_width(&user.name, max_name_width)),
            None => " AI SaaS ".to_string(),
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.nav_index));

        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Truncate a string to fit within a given display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Jane Doe", 20), "Jane Doe");
        assert_eq!(truncate_to_width("Jane Doe", 4), "Jane");
    }
}
