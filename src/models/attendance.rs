//! Attendance model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::member::Member;

/// One attendance record per member per calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub work_date: NaiveDate,
    #[serde(default)]
    pub check_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub member: Option<Member>,
}

/// Monthly statistics envelope from `/attendance/stats/`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub records: Vec<Attendance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_deserialization() {
        let json = r#"{
            "id": 9, "workDate": "2025-03-14",
            "checkInAt": "2025-03-14T00:30:00Z", "checkOutAt": null,
            "member": {"id": 2, "name": "김연구", "role": "MEMBER"}
        }"#;
        let record: Attendance = serde_json::from_str(json).unwrap();
        assert!(record.check_in_at.is_some());
        assert!(record.check_out_at.is_none());
        assert_eq!(record.work_date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_stats_deserialization() {
        let json = r#"{"start": "2025-03-01", "end": "2025-03-31", "members": [], "records": []}"#;
        let stats: AttendanceStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.end.format("%Y-%m-%d").to_string(), "2025-03-31");
    }
}
