use ratatui::layout::{Constraint, Direction, Rect};

/// Default width for the navigation sidebar
const SIDEBAR_WIDTH: u16 = 24;

/// Default height for the analytics chart
const CHART_HEIGHT: u16 = 12;

/// Layout configuration for the UI
pub struct Layout {
    /// Whether the navigation sidebar is shown
    pub show_sidebar: bool,
    /// Width in columns for the sidebar
    pub sidebar_width: u16,
    /// Height in rows for the analytics chart
    pub chart_height: u16,
}

impl Layout {
    /// Create a new layout with default settings
    pub fn new() -> Self {
        Self {
            show_sidebar: true,
            sidebar_width: SIDEBAR_WIDTH,
            chart_height: CHART_HEIGHT,
        }
    }

    /// Create a layout with custom sidebar and chart dimensions
    pub fn with_ui_settings(mut self, show_sidebar: bool, sidebar_width: u16, chart_height: u16) -> Self {
        self.show_sidebar = show_sidebar;
        self.sidebar_width = sidebar_width.max(16);
        self.chart_height = chart_height.max(6);
        self
    }

    /// Toggle sidebar visibility
    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    /// Calculate the main areas
    /// Layout: [Sidebar (left)] [Content (right)]
    ///         [    Status Bar (full width)     ]
    pub fn calculate(&self, area: Rect) -> LayoutAreas {
        // First, split off the status bar at the bottom
        let main_and_status = ratatui::layout::Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Main content area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let main_area = main_and_status[0];
        let status_bar = main_and_status[1];

        if self.show_sidebar {
            let horizontal = ratatui::layout::Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(self.sidebar_width),
                    Constraint::Min(20),
                ])
                .split(main_area);

            LayoutAreas {
                sidebar: Some(horizontal[0]),
                content: horizontal[1],
                status_bar,
            }
        } else {
            LayoutAreas {
                sidebar: None,
                content: main_area,
                status_bar,
            }
        }
    }

    /// Split the content area for the usage screen
    /// Layout: [Analytics Chart] over [Usage Table], with an optional
    /// detail panel taking the right third when a row is open.
    pub fn usage_areas(&self, content: Rect, show_detail: bool) -> UsageAreas {
        let (main, detail) = if show_detail {
            let horizontal = ratatui::layout::Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(content);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (content, None)
        };

        let vertical = ratatui::layout::Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.chart_height),
                Constraint::Min(5),
            ])
            .split(main);

        UsageAreas {
            chart: vertical[0],
            table: vertical[1],
            detail,
        }
    }

    /// Split the content area for the overview screen
    /// Layout: [Stat Cards] over [Model Shares | Activity Feed]
    pub fn overview_areas(&self, content: Rect) -> OverviewAreas {
        let vertical = ratatui::layout::Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(5)])
            .split(content);

        let horizontal = ratatui::layout::Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        OverviewAreas {
            stat_cards: vertical[0],
            model_shares: horizontal[0],
            activity_feed: horizontal[1],
        }
    }

    /// Calculate areas for a popup (centered)
    pub fn popup_area(&self, area: Rect, width_pct: u16, height_pct: u16) -> Rect {
        let popup_layout = ratatui::layout::Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - height_pct) / 2),
                Constraint::Percentage(height_pct),
                Constraint::Percentage((100 - height_pct) / 2),
            ])
            .split(area);

        ratatui::layout::Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - width_pct) / 2),
                Constraint::Percentage(width_pct),
                Constraint::Percentage((100 - width_pct) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculated layout areas
pub struct LayoutAreas {
    /// Area for the navigation sidebar (if shown)
    pub sidebar: Option<Rect>,
    /// Area for the screen content
    pub content: Rect,
    /// Area for the status bar
    pub status_bar: Rect,
}

/// Areas within the usage screen content
pub struct UsageAreas {
    /// Area for the analytics chart
    pub chart: Rect,
    /// Area for the usage table
    pub table: Rect,
    /// Area for the detail panel (if a row is open)
    pub detail: Option<Rect>,
}

/// Areas within the overview screen content
pub struct OverviewAreas {
    /// Area for the stat card row
    pub stat_cards: Rect,
    /// Area for the model share list
    pub model_shares: Rect,
    /// Area for the activity feed
    pub activity_feed: Rect,
}
