//! Fixed solar-calendar holidays
//!
//! The lab calendar colors a fixed list of eight Korean solar holidays per
//! year; substitute and lunar holidays are out of scope.

use chrono::{Datelike, NaiveDate};

/// (month, day) pairs of the fixed holidays
const FIXED_HOLIDAYS: [(u32, u32); 8] = [
    (1, 1),   // 신정
    (3, 1),   // 삼일절
    (5, 5),   // 어린이날
    (6, 6),   // 현충일
    (8, 15),  // 광복절
    (10, 3),  // 개천절
    (10, 9),  // 한글날
    (12, 25), // 성탄절
];

/// Whether the date is one of the fixed solar holidays
pub fn is_holiday(date: NaiveDate) -> bool {
    FIXED_HOLIDAYS
        .iter()
        .any(|&(month, day)| date.month() == month && date.day() == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_holidays() {
        assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 10, 9).unwrap()));
        assert!(!is_holiday(NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()));
    }
}
