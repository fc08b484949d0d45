use chrono::{NaiveDate, TimeZone, Utc};
use graphql_client::GraphQLQuery;

use super::core::GitHubClient;
use crate::error::{Result, StreakError};
use crate::providers::github::types::YearCalendar;
use crate::streak::ContributionSet;

pub type Date = NaiveDate;
pub type DateTime = chrono::DateTime<Utc>;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "src/providers/github/client/schema.graphql",
    query_path = "src/providers/github/client/contributions.graphql",
    response_derives = "Debug,PartialEq,Clone"
)]
pub struct FetchUserCreatedAt;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "src/providers/github/client/schema.graphql",
    query_path = "src/providers/github/client/contributions.graphql",
    query_name = "FetchContributionCalendar",
    response_derives = "Debug,PartialEq,Clone"
)]
pub struct FetchContributionCalendar;

/// First and last instant of `year`, as accepted by `contributionsCollection`.
pub fn year_bounds(year: i32) -> Result<(DateTime, DateTime)> {
    let invalid = || StreakError::Config(format!("Year {year} is out of range"));

    let from = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(invalid)?;
    let to = Utc
        .with_ymd_and_hms(year, 12, 31, 23, 59, 59)
        .single()
        .ok_or_else(invalid)?;

    Ok((from, to))
}

impl GitHubClient {
    pub async fn fetch_user_created_at(&self, login: &str) -> Result<DateTime> {
        let variables = fetch_user_created_at::Variables {
            login: login.to_string(),
        };

        let data = self.post_query::<FetchUserCreatedAt>(variables).await?;

        let user = data
            .user
            .ok_or_else(|| StreakError::UserNotFound(login.to_string()))?;

        Ok(user.created_at)
    }

    pub async fn fetch_contribution_calendar(
        &self,
        login: &str,
        year: i32,
    ) -> Result<YearCalendar> {
        let (from, to) = year_bounds(year)?;

        let variables = fetch_contribution_calendar::Variables {
            login: login.to_string(),
            from,
            to,
        };

        let data = self.post_query::<FetchContributionCalendar>(variables).await?;

        let user = data
            .user
            .ok_or_else(|| StreakError::UserNotFound(login.to_string()))?;
        let calendar = user.contributions_collection.contribution_calendar;

        let days: ContributionSet = calendar
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .filter_map(|day| {
                u64::try_from(day.contribution_count)
                    .ok()
                    .map(|count| (day.date, count))
            })
            .collect();

        Ok(YearCalendar {
            year,
            total_contributions: u64::try_from(calendar.total_contributions).unwrap_or(0),
            days,
        })
    }
}
