use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily contribution counts keyed by calendar day.
///
/// Only contributing days are stored: inserting a zero count is a no-op, and
/// iteration always yields dates in ascending order regardless of the order
/// they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionSet {
    days: BTreeMap<NaiveDate, u64>,
}

impl ContributionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `count` contributions on `date`, replacing any earlier count.
    pub fn insert(&mut self, date: NaiveDate, count: u64) {
        if count > 0 {
            self.days.insert(date, count);
        }
    }

    pub fn extend(&mut self, other: ContributionSet) {
        self.days.extend(other.days);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }
}

impl FromIterator<(NaiveDate, u64)> for ContributionSet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (date, count) in iter {
            set.insert(date, count);
        }
        set
    }
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub longest_streak_range: Option<DateRange>,
}

/// Computes the current and longest streaks of `contributions` as seen on `today`.
///
/// The current streak survives a one-day grace period: a run ending yesterday
/// still counts while today has no contributions yet. When several runs share
/// the maximum length, the earliest one is reported.
pub fn compute_streaks(contributions: &ContributionSet, today: NaiveDate) -> StreakResult {
    let dates: Vec<NaiveDate> = contributions.dates().collect();

    let Some((longest_streak, range)) = longest_run(&dates) else {
        return StreakResult::default();
    };

    StreakResult {
        current_streak: current_run(&dates, today),
        longest_streak,
        longest_streak_range: Some(range),
    }
}

fn is_next_day(previous: NaiveDate, date: NaiveDate) -> bool {
    (date - previous).num_days() == 1
}

fn current_run(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&last) = dates.last() else {
        return 0;
    };

    if (today - last).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2).rev() {
        if !is_next_day(pair[0], pair[1]) {
            break;
        }
        streak += 1;
    }

    streak
}

fn longest_run(dates: &[NaiveDate]) -> Option<(u32, DateRange)> {
    let mut best: Option<(u32, DateRange)> = None;
    let mut run_len = 0;
    let mut run_start = *dates.first()?;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        match previous {
            Some(prev) if is_next_day(prev, date) => run_len += 1,
            _ => {
                run_len = 1;
                run_start = date;
            }
        }

        // Strict comparison keeps the earliest run on ties.
        if best.map_or(true, |(len, _)| run_len > len) {
            best = Some((
                run_len,
                DateRange {
                    start: run_start,
                    end: date,
                },
            ));
        }

        previous = Some(date);
    }

    best
}
