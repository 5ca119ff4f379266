//! Consistency score: entries per day of the span they cover.

use chrono::NaiveDate;

use crate::domain::foundation::Percentage;

use super::metrics::round_half_up;

/// Scores how densely entries fill the calendar span between the first and last.
///
/// 0 with no dated entries, 100 with exactly one, otherwise
/// `min(round(count / (span_days + 1) * 100), 100)`.
pub fn consistency_score(dates: &[NaiveDate]) -> Percentage {
    match dates.len() {
        0 => Percentage::ZERO,
        1 => Percentage::HUNDRED,
        count => {
            let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
                return Percentage::ZERO;
            };
            let span = (*last - *first).num_days() + 1;
            let ratio = count as f64 / span as f64 * 100.0;
            Percentage::clamped(round_half_up(ratio))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn empty_is_zero_single_is_hundred() {
        assert_eq!(consistency_score(&[]), Percentage::ZERO);
        assert_eq!(consistency_score(&[d(14)]), Percentage::HUNDRED);
    }

    #[test]
    fn two_entries_five_days_apart_is_33() {
        assert_eq!(consistency_score(&[d(6), d(1)]).value(), 33);
    }

    #[test]
    fn daily_entries_score_100() {
        assert_eq!(consistency_score(&[d(1), d(2), d(3), d(4)]).value(), 100);
    }

    #[test]
    fn multiple_entries_per_day_are_capped() {
        assert_eq!(consistency_score(&[d(1), d(1), d(1), d(2)]).value(), 100);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(
            consistency_score(&[d(10), d(1), d(4)]),
            consistency_score(&[d(1), d(4), d(10)])
        );
        assert_eq!(consistency_score(&[d(10), d(1), d(4)]).value(), 30);
    }
}
