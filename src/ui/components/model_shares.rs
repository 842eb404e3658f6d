use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use quotadeck_core::overview::{ModelShare, MODEL_SHARES};

/// Fixed label width for alignment (longest label "Claude" padded)
const LABEL_WIDTH: usize = 7;

/// Usage-by-model breakdown with share bars
pub struct ModelShares;

impl ModelShares {
    /// Render the model share list
    pub fn render(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Usage by Model ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = MODEL_SHARES
            .iter()
            .enumerate()
            .filter_map(|(i, share)| {
                if i as u16 >= inner.height {
                    return None;
                }
                Some(Self::render_share_line(share, inner.width))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render one share row with a uniform bar width:
    /// " GPT-4   ████████░░░░░░░░░░  43.8%  1,247,382 calls"
    fn render_share_line(share: &ModelShare, width: u16) -> Line<'static> {
        let label = format!(" {:LABEL_WIDTH$}", share.model);
        let percent = format!(" {:>5.1}%", share.percent);
        let calls = format!("  {}", share.calls);

        let fixed = label.len() + percent.len() + calls.len();
        let bar_width = (width as usize).saturating_sub(fixed).min(20);
        let filled = ((share.percent / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);

        let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled(bar, Style::default().fg(Color::Cyan)),
            Span::styled(percent, Style::default().fg(Color::White)),
            Span::styled(calls, Style::default().fg(Color::DarkGray)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_line_bar_fills_by_percent() {
        let full = ModelShare {
            model: "X",
            calls: "1 calls",
            percent: 100.0,
        };
        let line = ModelShares::render_share_line(&full, 60);
        let bar = line.spans[1].content.to_string();
        assert!(bar.contains('█'));
        assert!(!bar.contains('░'));
    }
}
