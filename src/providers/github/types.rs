use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::streak::ContributionSet;

/// One calendar year of contributions as reported by GitHub.
#[derive(Debug)]
pub struct YearCalendar {
    pub year: i32,
    pub total_contributions: u64,
    pub days: ContributionSet,
}

/// Everything fetched for a user in a single run.
#[derive(Debug)]
pub struct ContributionHistory {
    pub created_at: DateTime<Utc>,
    pub yearly_totals: BTreeMap<i32, u64>,
    pub contributions: ContributionSet,
}

impl ContributionHistory {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            yearly_totals: BTreeMap::new(),
            contributions: ContributionSet::new(),
        }
    }

    pub fn add_year(&mut self, calendar: YearCalendar) {
        self.yearly_totals.insert(calendar.year, calendar.total_contributions);
        self.contributions.extend(calendar.days);
    }

    pub fn lifetime_total(&self) -> u64 {
        self.yearly_totals.values().sum()
    }
}
