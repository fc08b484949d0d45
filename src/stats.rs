use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::github::ContributionHistory;
use crate::streak::{compute_streaks, StreakResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakStats {
    pub provider: String,
    pub login: String,
    pub collected_at: DateTime<Utc>,
    pub today: NaiveDate,
    pub account_created_at: DateTime<Utc>,
    pub total_contributions: u64,
    pub contributing_days: usize,
    pub streaks: StreakResult,
}

impl StreakStats {
    pub fn from_history(
        provider: &str,
        login: &str,
        history: &ContributionHistory,
        today: NaiveDate,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            login: login.to_string(),
            collected_at: Utc::now(),
            today,
            account_created_at: history.created_at,
            total_contributions: history.lifetime_total(),
            contributing_days: history.contributions.len(),
            streaks: compute_streaks(&history.contributions, today),
        }
    }
}
