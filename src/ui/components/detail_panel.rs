use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Sparkline},
    Frame,
};

use quotadeck_core::usage::format_grouped;
use quotadeck_core::{DetailView, TrendDirection};

/// Side panel for a single usage row: daily series, trend summary and
/// read-only fields
pub struct DetailPanel;

impl DetailPanel {
    /// Render the detail panel
    pub fn render(frame: &mut Frame, area: Rect, view: &DetailView) {
        let block = Block::default()
            .title(format!(" {} ", view.row.model))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // daily series sparkline
                Constraint::Length(2), // trend summary
                Constraint::Min(4),    // row fields
            ])
            .split(inner);

        Self::render_series(frame, sections[0], view);
        Self::render_trend(frame, sections[1], view);
        Self::render_fields(frame, sections[2], view);
    }

    fn render_series(frame: &mut Frame, area: Rect, view: &DetailView) {
        let values: Vec<u64> = view.series.iter().map(|p| p.value).collect();
        let range = match (view.series.first(), view.series.last()) {
            (Some(first), Some(last)) => format!(" {} - {} ", first.label, last.label),
            _ => " Daily Usage ".to_string(),
        };

        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title(range)
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Cyan))
            .data(&values);

        frame.render_widget(sparkline, area);
    }

    fn render_trend(frame: &mut Frame, area: Rect, view: &DetailView) {
        let (arrow, color) = match view.trend.direction {
            TrendDirection::Up => ("↑", Color::Green),
            TrendDirection::Down => ("↓", Color::Red),
        };
        let direction = match view.trend.direction {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        };

        let line = Line::from(vec![
            Span::styled(format!("{arrow} "), Style::default().fg(color)),
            Span::styled(
                format!(
                    "Trending {} by {:.1}% this month",
                    direction,
                    view.trend.percent.abs()
                ),
                Style::default().fg(Color::White),
            ),
        ]);

        frame.render_widget(Paragraph::new(vec![line]), area);
    }

    fn render_fields(frame: &mut Frame, area: Rect, view: &DetailView) {
        let row = &view.row;
        let lines = vec![
            Self::field_line("Status", row.status.label()),
            Self::field_line("Usage", &row.target()),
            Self::field_line("Used", &format_grouped(row.used)),
            Self::field_line("Limit", &format_grouped(row.limit)),
            Self::field_line("Reviewer", &row.reviewer),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn field_line(label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{:>9}: ", label),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_line() {
        let line = DetailPanel::field_line("Status", "Active");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "Active");
    }
}
