//! Seed data for the usage table. There is no backend; these rows are
//! the full data set the dashboard starts with.

use super::types::{UsageRow, UsageStatus};

/// The initial usage rows, in display order.
pub fn seed_rows() -> Vec<UsageRow> {
    vec![
        row("1", "GPT-4 Turbo", UsageStatus::Active, 850_000, 1_000_000, "John Smith"),
        row("2", "Claude 3 Opus", UsageStatus::Active, 620_000, 1_000_000, "Sarah Johnson"),
        row("3", "Gemini Pro", UsageStatus::Warning, 890_000, 1_000_000, "Mike Chen"),
        row("4", "Text Embeddings", UsageStatus::Active, 340_000, 500_000, "Emily Davis"),
        row("5", "GPT-3.5 Turbo", UsageStatus::Exceeded, 1_050_000, 1_000_000, "Alex Kim"),
        row("6", "Whisper API", UsageStatus::Active, 125_000, 250_000, "Lisa Park"),
        row("7", "DALL-E 3", UsageStatus::Warning, 45_000, 50_000, "Tom Wilson"),
        row("8", "Custom Fine-tuned Model", UsageStatus::Active, 78_000, 200_000, "Rachel Green"),
    ]
}

fn row(id: &str, model: &str, status: UsageStatus, used: u64, limit: u64, reviewer: &str) -> UsageRow {
    UsageRow {
        id: id.to_string(),
        model: model.to_string(),
        status,
        used,
        limit,
        reviewer: reviewer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rows_unique_ids() {
        let rows = seed_rows();
        let mut ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_seed_rows_status_consistent() {
        // The fixture set respects `Exceeded iff used > limit` by construction
        for r in seed_rows() {
            assert!(r.status_consistent(), "row {} inconsistent", r.id);
        }
    }
}
