//! Calendar commands
//!
//! Renders the 42-cell month grid with events bucketed into day cells, and
//! manages events.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Utc};

use crate::api::ApiClient;
use crate::calendar::{events_on, MonthGrid};
use crate::models::{EventCategory, EventRequest};
use crate::utils::errors::{LabdeskError, Result};
use crate::utils::helpers::truncate_text;

use super::{banner, require_session};

const WEEKDAY_HEADER: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Parse the `YYYY-MM-DDTHH:MM` form-style timestamp the event form uses.
///
/// The value is wall-clock time in the host zone, like the browser form's
/// datetime-local input; it is converted to UTC for the wire.
pub fn parse_event_time(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map_err(|_| {
        LabdeskError::InvalidInput(format!("Expected YYYY-MM-DDTHH:MM, got '{}'", raw))
    })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            LabdeskError::InvalidInput(format!("'{}' does not exist in the local timezone", raw))
        })
}

/// Handle the calendar show command
pub async fn handle_show(
    client: &ApiClient,
    month: Option<String>,
    category: EventCategory,
) -> Result<()> {
    require_session(client)?;

    let grid = match month {
        Some(raw) => {
            let (year, month1) = raw
                .split_once('-')
                .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
                .ok_or_else(|| {
                    LabdeskError::InvalidInput(format!("Expected YYYY-MM, got '{}'", raw))
                })?;
            if month1 == 0 {
                return Err(LabdeskError::InvalidInput("Month must be 1-12".to_string()));
            }
            MonthGrid::new(year, month1 - 1)?
        }
        None => MonthGrid::current()?,
    };
    let events = client.list_events().await?;

    println!("{} ({})", grid.label(), category.as_str());
    println!("{}", WEEKDAY_HEADER.map(|d| format!("{:>12}", d)).join(""));

    for week in grid.cells().chunks(7) {
        let mut day_line = String::new();
        let mut event_lines: Vec<String> = Vec::new();

        for cell in week {
            let marker = if cell.is_red_day() {
                "*"
            } else if cell.is_blue_day() {
                "+"
            } else {
                " "
            };
            let day = if cell.in_month {
                format!("{:>2}{}", cell.date.day(), marker)
            } else {
                format!("({:>2})", cell.date.day())
            };
            day_line.push_str(&format!("{:>12}", day));

            let todays = events_on(cell.date, &events, category);
            for (idx, event) in todays.iter().enumerate() {
                if event_lines.len() <= idx {
                    event_lines.push(String::new());
                }
            }
            for (idx, line) in event_lines.iter_mut().enumerate() {
                let label = todays
                    .get(idx)
                    .map(|e| truncate_text(&e.title, 10))
                    .unwrap_or_default();
                line.push_str(&format!("{:>12}", label));
            }
        }

        println!("{}", day_line);
        for line in event_lines {
            println!("{}", line);
        }
    }
    println!("\n* holiday/Sunday  + Saturday  (n) outside month");
    Ok(())
}

/// Handle the event add command
pub async fn handle_add_event(
    client: &ApiClient,
    title: String,
    start: &str,
    end: &str,
    category: EventCategory,
) -> Result<()> {
    require_session(client)?;
    let request = EventRequest {
        title,
        start_at: parse_event_time(start)?,
        end_at: parse_event_time(end)?,
        category: category.as_str().to_string(),
    };
    let created = client.create_event(&request).await?;
    banner(&format!("Event created (id {})", created.id));
    Ok(())
}

/// Handle the event edit command; unset fields keep their stored values
pub async fn handle_edit_event(
    client: &ApiClient,
    id: i64,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<EventCategory>,
) -> Result<()> {
    require_session(client)?;

    let events = client.list_events().await?;
    let current = events
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| LabdeskError::InvalidInput(format!("No event with id {}", id)))?;

    let request = EventRequest {
        title: title.unwrap_or(current.title),
        start_at: match start {
            Some(raw) => parse_event_time(&raw)?,
            None => current.start_at,
        },
        end_at: match end {
            Some(raw) => parse_event_time(&raw)?,
            None => current.end_at,
        },
        category: category
            .map(|c| c.as_str().to_string())
            .or(current.category)
            .unwrap_or_else(|| EventCategory::Laboratory.as_str().to_string()),
    };
    client.update_event(id, &request).await?;
    banner("Event saved");
    Ok(())
}

/// Handle the event delete command
pub async fn handle_delete_event(client: &ApiClient, id: i64) -> Result<()> {
    require_session(client)?;
    client.delete_event(id).await?;
    banner("Event deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_time_rejects_bad_input() {
        assert!(parse_event_time("2025-04-01").is_err());
        assert!(parse_event_time("next tuesday").is_err());
    }

    #[test]
    fn test_parse_event_time_keeps_local_wall_clock() {
        // The entered time must survive the UTC round trip unchanged in any
        // host timezone; otherwise events land on the wrong day cell.
        let parsed = parse_event_time("2025-04-01T16:00").unwrap();
        let rendered = parsed.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string();
        assert_eq!(rendered, "2025-04-01T16:00");
    }

    #[test]
    fn test_parsed_event_buckets_into_its_entry_day() {
        use crate::calendar::events_on;
        use crate::models::{CalendarEvent, EventCategory};
        use chrono::NaiveDate;

        let event = CalendarEvent {
            id: 1,
            title: "세미나".to_string(),
            start_at: parse_event_time("2025-04-01T16:00").unwrap(),
            end_at: parse_event_time("2025-04-01T18:00").unwrap(),
            category: None,
        };
        let events = vec![event];
        let entered = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(events_on(entered, &events, EventCategory::Laboratory).len(), 1);
        let next_day = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert!(events_on(next_day, &events, EventCategory::Laboratory).is_empty());
    }
}
