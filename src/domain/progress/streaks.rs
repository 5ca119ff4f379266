//! Day-streak calculation over local calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest runs of consecutive journaling days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

pub struct StreakCalculator;

impl StreakCalculator {
    /// Computes both streaks from entry dates sorted newest first.
    pub fn compute(dates_newest_first: &[NaiveDate], today: NaiveDate) -> Streaks {
        if dates_newest_first.is_empty() {
            return Streaks::default();
        }
        Streaks {
            current: Self::current(dates_newest_first, today),
            longest: Self::longest(dates_newest_first.iter().rev()),
        }
    }

    /// Walks back from `today`, counting entries that land on the expected day.
    ///
    /// The walk is anchored at today even when the newest entry is older,
    /// so a history ending yesterday has a current streak of 0. Entries later
    /// than the expected day (same-day repeats, future dates) are skipped.
    pub fn current(dates_newest_first: &[NaiveDate], today: NaiveDate) -> u32 {
        let mut expected = today;
        let mut streak = 0;
        for &date in dates_newest_first {
            if date == expected {
                streak += 1;
                match expected.pred_opt() {
                    Some(previous) => expected = previous,
                    None => break,
                }
            } else if date < expected {
                break;
            }
        }
        streak
    }

    /// Longest run where each entry falls exactly one day after the previous.
    ///
    /// Any other gap, including two entries on the same day, restarts the run at 1.
    pub fn longest<'a>(dates_oldest_first: impl IntoIterator<Item = &'a NaiveDate>) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut last: Option<NaiveDate> = None;

        for &date in dates_oldest_first {
            run = match last {
                Some(prev) if (date - prev).num_days() == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            last = Some(date);
        }
        longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn no_dates_means_no_streaks() {
        assert_eq!(StreakCalculator::compute(&[], d(10)), Streaks::default());
    }

    #[test]
    fn three_days_ending_today() {
        let streaks = StreakCalculator::compute(&[d(10), d(9), d(8)], d(10));
        assert_eq!(streaks, Streaks { current: 3, longest: 3 });
    }

    #[test]
    fn history_ending_yesterday_has_no_current_streak() {
        let streaks = StreakCalculator::compute(&[d(9)], d(10));
        assert_eq!(streaks.current, 0);
        assert_eq!(streaks.longest, 1);
    }

    #[test]
    fn gap_stops_current_streak() {
        assert_eq!(StreakCalculator::current(&[d(10), d(9), d(7), d(6)], d(10)), 2);
    }

    #[test]
    fn same_day_repeats_do_not_break_current_streak() {
        assert_eq!(StreakCalculator::current(&[d(10), d(10), d(9)], d(10)), 2);
    }

    #[test]
    fn future_dates_are_skipped_by_current_streak() {
        assert_eq!(StreakCalculator::current(&[d(12), d(10)], d(10)), 1);
    }

    #[test]
    fn same_day_repeat_resets_longest_run() {
        let ascending = [d(1), d(2), d(2), d(3)];
        assert_eq!(StreakCalculator::longest(ascending.iter()), 2);
    }

    #[test]
    fn longest_takes_the_maximum_run() {
        let ascending = [d(1), d(2), d(3), d(7), d(8), d(20)];
        assert_eq!(StreakCalculator::longest(ascending.iter()), 3);
    }

    #[test]
    fn entries_five_days_apart() {
        let streaks = StreakCalculator::compute(&[d(6), d(1)], d(6));
        assert_eq!(streaks, Streaks { current: 1, longest: 1 });
    }
}
