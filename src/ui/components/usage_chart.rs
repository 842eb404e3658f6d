use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType},
    Frame,
};

use quotadeck_core::metrics::UsageAnalytics;
use quotadeck_core::usage::format_compact;

/// Area chart of API calls and token consumption over the selected
/// time range
pub struct UsageChart;

impl UsageChart {
    /// Render the analytics chart
    pub fn render(frame: &mut Frame, area: Rect, analytics: &UsageAnalytics) {
        let series = analytics.series();
        if series.is_empty() {
            return;
        }

        let calls: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.calls as f64))
            .collect();
        let tokens: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.tokens as f64))
            .collect();

        let y_max = calls
            .iter()
            .chain(tokens.iter())
            .map(|(_, y)| *y)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let datasets = vec![
            Dataset::default()
                .name("API Calls")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&calls),
            Dataset::default()
                .name("Tokens (K)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&tokens),
        ];

        let totals = analytics.totals();
        let title = format!(
            " Usage Analytics - {} | {} calls, {}K tokens ",
            analytics.range().display_name(),
            format_compact(totals.calls),
            format_compact(totals.tokens),
        );

        let x_labels = Self::x_labels(series.len(), |i| series[i].label.clone());
        let y_labels = vec![
            "0".to_string(),
            format_compact((y_max / 2.0) as u64),
            format_compact(y_max as u64),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, (series.len() - 1).max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    /// First, middle and last point labels for the x axis
    fn x_labels(len: usize, label_at: impl Fn(usize) -> String) -> Vec<String> {
        if len == 1 {
            return vec![label_at(0)];
        }
        vec![label_at(0), label_at(len / 2), label_at(len - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_labels_picks_endpoints_and_middle() {
        let labels = UsageChart::x_labels(7, |i| format!("d{i}"));
        assert_eq!(labels, vec!["d0", "d3", "d6"]);
    }

    #[test]
    fn test_x_labels_single_point() {
        let labels = UsageChart::x_labels(1, |_| "only".to_string());
        assert_eq!(labels, vec!["only"]);
    }
}
