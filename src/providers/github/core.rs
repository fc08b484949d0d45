use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use crate::auth::Token;
use crate::error::Result;
use crate::providers::github::client::GitHubClient;
use crate::providers::github::types::ContributionHistory;
use crate::stats::StreakStats;

pub struct GitHubProvider {
    pub client: GitHubClient,
    pub login: String,
}

impl GitHubProvider {
    pub fn new(base_url: &str, login: String, token: Option<Token>) -> Result<Self> {
        let client = GitHubClient::new(base_url, token)?;

        Ok(Self { client, login })
    }

    /// Fetches every contribution year from account creation through `today`.
    pub async fn fetch_history(&self, today: NaiveDate) -> Result<ContributionHistory> {
        let created_at = self.client.fetch_user_created_at(&self.login).await?;
        let start_year = created_at.year();
        let end_year = today.year().max(start_year);

        info!("Fetching contribution history from {start_year} to {end_year}...");

        // Only the union matters, so years can be fetched concurrently
        let futures: Vec<_> = (start_year..=end_year)
            .map(|year| self.client.fetch_contribution_calendar(&self.login, year))
            .collect();

        let calendars = futures::future::join_all(futures)
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let mut history = ContributionHistory::new(created_at);
        for calendar in calendars {
            info!(
                "Year {}: {} contributions over {} days",
                calendar.year,
                calendar.total_contributions,
                calendar.days.len()
            );
            history.add_year(calendar);
        }

        Ok(history)
    }

    pub async fn collect_stats(&self, today: NaiveDate) -> Result<StreakStats> {
        info!("Starting streak collection for user: {}", self.login);

        let history = self.fetch_history(today).await?;

        if history.contributions.is_empty() {
            warn!("No contributions found for user: {}", self.login);
        }

        let stats = StreakStats::from_history("GitHub", &self.login, &history, today);

        info!(
            "Current streak: {}, longest streak: {}, total contributions: {}",
            stats.streaks.current_streak, stats.streaks.longest_streak, stats.total_contributions
        );

        Ok(stats)
    }
}
