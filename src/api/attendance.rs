//! Attendance endpoints

use super::client::ApiClient;
use crate::models::{Attendance, AttendanceStats};
use crate::utils::errors::{LabdeskError, Result};

/// Validate the `YYYY-MM` month parameter shape the backend expects
fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    bytes.len() == 7
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

impl ApiClient {
    /// Record today's check-in.
    ///
    /// The lab-network IP restriction is enforced server-side; a rejection
    /// surfaces as the server's message.
    pub async fn check_in(&self) -> Result<Attendance> {
        self.post_empty("/attendance/check-in").await
    }

    /// Record today's check-out
    pub async fn check_out(&self) -> Result<Attendance> {
        self.post_empty("/attendance/check-out").await
    }

    /// Monthly statistics from `GET /attendance/stats/` (admin only).
    ///
    /// `month` is `YYYY-MM`; the server defaults to the current month when
    /// it is omitted.
    pub async fn attendance_stats(&self, month: Option<&str>) -> Result<AttendanceStats> {
        let mut query = Vec::new();
        if let Some(month) = month {
            if !is_valid_month(month) {
                return Err(LabdeskError::InvalidInput(format!(
                    "Month must be YYYY-MM, got '{}'",
                    month
                )));
            }
            query.push(("month", month.to_string()));
        }
        self.get_json("/attendance/stats/", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_validation() {
        assert!(is_valid_month("2025-03"));
        assert!(!is_valid_month("2025-3"));
        assert!(!is_valid_month("03-2025"));
        assert!(!is_valid_month("2025/03"));
        assert!(!is_valid_month(""));
    }
}
