mod activity_feed;
mod auth_popup;
mod detail_panel;
mod help_popup;
mod landing;
mod model_shares;
mod sidebar;
mod stat_cards;
mod status_bar;
mod usage_chart;
mod usage_table;

pub use activity_feed::ActivityFeed;
pub use auth_popup::AuthPopup;
pub use detail_panel::DetailPanel;
pub use help_popup::HelpPopup;
pub use landing::Landing;
pub use model_shares::ModelShares;
pub use sidebar::Sidebar;
pub use stat_cards::StatCards;
pub use status_bar::StatusBar;
pub use usage_chart::UsageChart;
pub use usage_table::UsageTable;
