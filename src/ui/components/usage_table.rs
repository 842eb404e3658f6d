use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
    Frame,
};

use quotadeck_core::{Aggregate, UsageRow, UsageStatus};

use crate::state::AppState;

/// Widget for the usage table with selection and grab-reorder
pub struct UsageTable;

impl UsageTable {
    /// Render the usage table
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Row::new(vec![
            Cell::from(Self::aggregate_checkbox(state.aggregate())),
            Cell::from("Model"),
            Cell::from("Status"),
            Cell::from("Usage"),
            Cell::from("Limit"),
            Cell::from("Reviewer"),
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .rows
            .rows()
            .iter()
            .map(|row| Self::create_row(row, state))
            .collect();

        let title = if state.drag.is_dragging() {
            " API Usage [grab: j/k move, Enter drop, Esc cancel] ".to_string()
        } else if state.selection.is_empty() {
            " API Usage ".to_string()
        } else {
            format!(" API Usage ({} selected) ", state.selection.len())
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

        let mut table_state = TableState::default();
        table_state.select(Some(state.cursor));

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn create_row<'a>(row: &'a UsageRow, state: &AppState) -> Row<'a> {
        let checkbox = if state.selection.contains(&row.id) {
            "[x]"
        } else {
            "[ ]"
        };

        let status_span = Span::styled(
            row.status.label(),
            Style::default().fg(Self::status_color(row.status)),
        );

        let cells = vec![
            Cell::from(checkbox),
            Cell::from(row.model.as_str()),
            Cell::from(status_span),
            Cell::from(row.target()),
            Cell::from(row.limit_display()),
            Cell::from(row.reviewer.as_str()),
        ];

        let mut style = Style::default();
        if state.drag.dragged_id() == Some(row.id.as_str()) {
            style = style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
        } else if state.drag.hover_id() == Some(row.id.as_str()) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
        }

        Row::new(cells).style(style)
    }

    /// Header checkbox for the tri-state aggregate
    fn aggregate_checkbox(aggregate: Aggregate) -> &'static str {
        match aggregate {
            Aggregate::All => "[x]",
            Aggregate::Some => "[~]",
            Aggregate::None => "[ ]",
        }
    }

    fn status_color(status: UsageStatus) -> Color {
        match status {
            UsageStatus::Active => Color::Green,
            UsageStatus::Warning => Color::Yellow,
            UsageStatus::Exceeded => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_checkbox() {
        assert_eq!(UsageTable::aggregate_checkbox(Aggregate::None), "[ ]");
        assert_eq!(UsageTable::aggregate_checkbox(Aggregate::Some), "[~]");
        assert_eq!(UsageTable::aggregate_checkbox(Aggregate::All), "[x]");
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(UsageTable::status_color(UsageStatus::Active), Color::Green);
        assert_eq!(UsageTable::status_color(UsageStatus::Exceeded), Color::Red);
    }
}
