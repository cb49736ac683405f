//! Attendance module
//!
//! Client-side transforms over attendance statistics.

pub mod matrix;

pub use matrix::{month_days, month_matrix, today_status, DayMark, MemberRow, TodayStatus};
