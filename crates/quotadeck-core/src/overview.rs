//! Static content for the overview screen and sidebar. Mock data,
//! kept out of the UI layer so the components stay purely
//! presentational.

/// One headline metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Month-over-month delta, e.g. "+12.5%"
    pub delta: &'static str,
    pub caption: &'static str,
}

/// Share of monthly calls for one model family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelShare {
    pub model: &'static str,
    pub calls: &'static str,
    /// Share of total calls, 0.0..=100.0
    pub percent: f64,
}

/// One recent-activity feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

/// Sidebar navigation item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: &'static str,
}

/// Headline metric cards shown on the overview screen
pub const STAT_CARDS: &[StatCard] = &[
    StatCard {
        title: "Total API Calls",
        value: "2,847,394",
        delta: "+12.5%",
        caption: "from last month",
    },
    StatCard {
        title: "Active Users",
        value: "12,847",
        delta: "+8.2%",
        caption: "from last month",
    },
    StatCard {
        title: "Revenue",
        value: "$89,432",
        delta: "+18.7%",
        caption: "from last month",
    },
    StatCard {
        title: "Avg Response Time",
        value: "234ms",
        delta: "-12.3%",
        caption: "faster than last month",
    },
];

/// Monthly calls by model family
pub const MODEL_SHARES: &[ModelShare] = &[
    ModelShare { model: "GPT-4", calls: "1,247,382 calls", percent: 43.8 },
    ModelShare { model: "Claude", calls: "892,134 calls", percent: 31.3 },
    ModelShare { model: "Gemini", calls: "458,721 calls", percent: 16.1 },
    ModelShare { model: "Others", calls: "249,157 calls", percent: 8.8 },
];

/// Latest API requests and events
pub const ACTIVITY_FEED: &[ActivityEntry] = &[
    ActivityEntry {
        title: "New prompt template created",
        detail: "Content generation template v2.1",
        when: "2 minutes ago",
    },
    ActivityEntry {
        title: "3 new team members joined",
        detail: "Development team expansion",
        when: "1 hour ago",
    },
    ActivityEntry {
        title: "API usage spike detected",
        detail: "+150% increase in the last hour",
        when: "3 hours ago",
    },
    ActivityEntry {
        title: "Payment received",
        detail: "Enterprise plan - $2,999",
        when: "5 hours ago",
    },
];

/// Sidebar navigation, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", route: "/dashboard" },
    NavItem { title: "AI Models", route: "/dashboard/models" },
    NavItem { title: "Prompts", route: "/dashboard/prompts" },
    NavItem { title: "Analytics", route: "/dashboard/analytics" },
    NavItem { title: "API Usage", route: "/dashboard/usage" },
    NavItem { title: "Documents", route: "/dashboard/documents" },
    NavItem { title: "Team", route: "/dashboard/team" },
    NavItem { title: "Billing", route: "/dashboard/billing" },
    NavItem { title: "Settings", route: "/dashboard/settings" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_shares_sum_to_whole() {
        let total: f64 = MODEL_SHARES.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 0.5, "shares sum to {total}");
    }

    #[test]
    fn test_nav_routes_are_protected_paths() {
        for item in NAV_ITEMS {
            assert!(item.route.starts_with("/dashboard"), "{}", item.route);
        }
    }
}
