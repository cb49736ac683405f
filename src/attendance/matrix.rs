//! Attendance statistics transforms
//!
//! Pure helpers that turn the monthly stats envelope into the shapes the
//! stats view renders: today's per-member status and the month matrix of
//! per-day marks.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::models::{AttendanceStats, Member, Role};

/// Per-day mark in the month matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    /// No record for the day
    Absent,
    /// Checked in, not yet out
    CheckedIn,
    /// Checked in and out
    Complete,
}

impl DayMark {
    /// Rendering symbol used by the stats table
    pub fn symbol(&self) -> &'static str {
        match self {
            DayMark::Absent => "",
            DayMark::CheckedIn => "○",
            DayMark::Complete => "●",
        }
    }
}

/// Today's check-in/out state for one member
#[derive(Debug, Clone)]
pub struct TodayStatus {
    pub member: Member,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
}

/// One member's row of per-day marks for the month
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub member: Member,
    pub marks: Vec<DayMark>,
}

/// Stats only cover current members; professor and admin-only accounts are
/// excluded from the tables.
fn tracked_members(stats: &AttendanceStats) -> Vec<Member> {
    stats
        .members
        .iter()
        .filter(|m| m.role == Role::Member)
        .cloned()
        .collect()
}

/// Today's status for each tracked member
pub fn today_status(stats: &AttendanceStats, today: NaiveDate) -> Vec<TodayStatus> {
    tracked_members(stats)
        .into_iter()
        .map(|member| {
            let record = stats.records.iter().find(|r| {
                r.work_date == today && r.member.as_ref().map(|m| m.id) == Some(member.id)
            });
            TodayStatus {
                check_in_at: record.and_then(|r| r.check_in_at),
                check_out_at: record.and_then(|r| r.check_out_at),
                member,
            }
        })
        .collect()
}

/// Days of the stats month (1..=last day)
pub fn month_days(stats: &AttendanceStats) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut date = stats.start;
    while date <= stats.end && date.month() == stats.start.month() {
        days.push(date);
        date = date + Days::new(1);
    }
    days
}

/// Month matrix: one row of per-day marks per tracked member
pub fn month_matrix(stats: &AttendanceStats) -> Vec<MemberRow> {
    let days = month_days(stats);
    tracked_members(stats)
        .into_iter()
        .map(|member| {
            let marks = days
                .iter()
                .map(|&date| {
                    let record = stats.records.iter().find(|r| {
                        r.work_date == date && r.member.as_ref().map(|m| m.id) == Some(member.id)
                    });
                    match record {
                        Some(r) if r.check_in_at.is_some() && r.check_out_at.is_some() => {
                            DayMark::Complete
                        }
                        Some(r) if r.check_in_at.is_some() => DayMark::CheckedIn,
                        _ => DayMark::Absent,
                    }
                })
                .collect();
            MemberRow { member, marks }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attendance;

    fn member(id: i64, role: Role) -> Member {
        Member {
            id,
            name: format!("member-{}", id),
            login_id: None,
            role,
            admin: false,
            email: None,
            phone: None,
            student_id: None,
            research_area: None,
            bio: None,
            degree: None,
            photo_url: None,
            graduation_year: None,
            sort_order: None,
        }
    }

    fn record(member_id: i64, date: &str, check_in: bool, check_out: bool) -> Attendance {
        let work_date = date.parse().unwrap();
        let ts = |flag: bool| flag.then(|| Utc::now());
        Attendance {
            id: member_id * 100,
            work_date,
            check_in_at: ts(check_in),
            check_out_at: ts(check_out),
            member: Some(member(member_id, Role::Member)),
        }
    }

    fn stats() -> AttendanceStats {
        AttendanceStats {
            start: "2025-03-01".parse().unwrap(),
            end: "2025-03-31".parse().unwrap(),
            members: vec![
                member(1, Role::Member),
                member(2, Role::Member),
                member(3, Role::Professor),
            ],
            records: vec![
                record(1, "2025-03-14", true, true),
                record(2, "2025-03-14", true, false),
            ],
        }
    }

    #[test]
    fn test_only_member_role_is_tracked() {
        let rows = month_matrix(&stats());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_month_days_span_whole_month() {
        let days = month_days(&stats());
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[30].day(), 31);
    }

    #[test]
    fn test_marks() {
        let rows = month_matrix(&stats());
        // 2025-03-14 is index 13
        assert_eq!(rows[0].marks[13], DayMark::Complete);
        assert_eq!(rows[1].marks[13], DayMark::CheckedIn);
        assert_eq!(rows[0].marks[0], DayMark::Absent);
        assert_eq!(DayMark::Complete.symbol(), "●");
    }

    #[test]
    fn test_today_status() {
        let today = "2025-03-14".parse().unwrap();
        let statuses = today_status(&stats(), today);
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].check_in_at.is_some() && statuses[0].check_out_at.is_some());
        assert!(statuses[1].check_out_at.is_none());
    }
}
