//! Usage row types and display formatting.

use serde::{Deserialize, Serialize};

/// Opaque row identifier. Unique within a store, never reused.
pub type RowId = String;

/// Monitoring status of a usage line. Closed set: every row has
/// exactly one of these, there is no unknown/default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageStatus {
    Active,
    Warning,
    Exceeded,
}

impl UsageStatus {
    /// Badge label as shown in the table
    pub fn label(&self) -> &'static str {
        match self {
            UsageStatus::Active => "Active",
            UsageStatus::Warning => "Warning",
            UsageStatus::Exceeded => "Exceeded",
        }
    }
}

/// One monitored resource line (e.g., a model's quota)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRow {
    /// Stable identifier, unique within the row store
    pub id: RowId,
    /// Display name (e.g., model name)
    pub model: String,
    /// Current monitoring status
    pub status: UsageStatus,
    /// Units consumed so far
    pub used: u64,
    /// Quota limit (must be positive)
    pub limit: u64,
    /// Responsible reviewer's display name
    pub reviewer: String,
}

impl UsageRow {
    /// Consumption against quota as shown in the table, e.g. "850K/1M"
    pub fn target(&self) -> String {
        format!("{}/{}", format_compact(self.used), format_compact(self.limit))
    }

    /// Quota limit with digit grouping, e.g. "1,000,000"
    pub fn limit_display(&self) -> String {
        format_grouped(self.limit)
    }

    /// Whether the authored status agrees with the derived business
    /// rule `Exceeded iff used > limit`. Reported, not enforced; see
    /// the store constructor.
    pub fn status_consistent(&self) -> bool {
        (self.status == UsageStatus::Exceeded) == (self.used > self.limit)
    }
}

/// Compact magnitude formatting: 850_000 -> "850K", 1_050_000 -> "1.05M"
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        let millions = value as f64 / 1_000_000.0;
        if (value % 1_000_000) == 0 {
            format!("{}M", value / 1_000_000)
        } else {
            // Trim a trailing zero: 1.50 -> 1.5
            let s = format!("{:.2}", millions);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            format!("{}M", s)
        }
    } else if value >= 1_000 {
        if (value % 1_000) == 0 {
            format!("{}K", value / 1_000)
        } else {
            let s = format!("{:.1}", value as f64 / 1_000.0);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            format!("{}K", s)
        }
    } else {
        value.to_string()
    }
}

/// Digit-grouped formatting: 1_000_000 -> "1,000,000"
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(status: UsageStatus, used: u64, limit: u64) -> UsageRow {
        UsageRow {
            id: "1".to_string(),
            model: "GPT-4 Turbo".to_string(),
            status,
            used,
            limit,
            reviewer: "John Smith".to_string(),
        }
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(850_000), "850K");
        assert_eq!(format_compact(1_000_000), "1M");
        assert_eq!(format_compact(1_050_000), "1.05M");
        assert_eq!(format_compact(500_000), "500K");
        assert_eq!(format_compact(45_000), "45K");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1_000_000), "1,000,000");
        assert_eq!(format_grouped(50_000), "50,000");
        assert_eq!(format_grouped(123), "123");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_target_display() {
        assert_eq!(row(UsageStatus::Active, 850_000, 1_000_000).target(), "850K/1M");
        assert_eq!(
            row(UsageStatus::Exceeded, 1_050_000, 1_000_000).target(),
            "1.05M/1M"
        );
    }

    #[test]
    fn test_status_consistency() {
        assert!(row(UsageStatus::Active, 850_000, 1_000_000).status_consistent());
        assert!(row(UsageStatus::Exceeded, 1_050_000, 1_000_000).status_consistent());
        assert!(!row(UsageStatus::Exceeded, 900_000, 1_000_000).status_consistent());
        assert!(!row(UsageStatus::Active, 1_100_000, 1_000_000).status_consistent());
        // Warning is never "exceeded", so it is consistent while under the limit
        assert!(row(UsageStatus::Warning, 890_000, 1_000_000).status_consistent());
    }
}
