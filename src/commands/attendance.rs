//! Attendance commands

use chrono::Local;

use crate::api::ApiClient;
use crate::attendance::{month_days, month_matrix, today_status};
use crate::utils::errors::Result;
use crate::utils::helpers::format_optional_timestamp;

use super::{banner, require_session};

/// Handle the check-in command
pub async fn handle_check_in(client: &ApiClient) -> Result<()> {
    require_session(client)?;
    let record = client.check_in().await?;
    banner("Checked in");
    println!(
        "  {}  in: {}  out: {}",
        record.work_date,
        format_optional_timestamp(record.check_in_at),
        format_optional_timestamp(record.check_out_at)
    );
    Ok(())
}

/// Handle the check-out command
pub async fn handle_check_out(client: &ApiClient) -> Result<()> {
    require_session(client)?;
    let record = client.check_out().await?;
    banner("Checked out");
    println!(
        "  {}  in: {}  out: {}",
        record.work_date,
        format_optional_timestamp(record.check_in_at),
        format_optional_timestamp(record.check_out_at)
    );
    Ok(())
}

/// Handle the stats command (admin): today's status plus the month matrix
pub async fn handle_stats(client: &ApiClient, month: Option<String>) -> Result<()> {
    require_session(client)?;
    let stats = client.attendance_stats(month.as_deref()).await?;

    println!("Attendance {} ~ {}", stats.start, stats.end);

    let today = Local::now().date_naive();
    let statuses = today_status(&stats, today);
    if !statuses.is_empty() {
        println!("\nToday:");
        for status in &statuses {
            println!(
                "  {:<12} in: {:<20} out: {}",
                status.member.name,
                format_optional_timestamp(status.check_in_at),
                format_optional_timestamp(status.check_out_at)
            );
        }
    }

    let days = month_days(&stats);
    let rows = month_matrix(&stats);
    if rows.is_empty() {
        println!("\nNo tracked members.");
        return Ok(());
    }

    print!("\n{:<12}", "");
    for date in &days {
        print!("{:>3}", chrono::Datelike::day(date));
    }
    println!();
    for row in rows {
        print!("{:<12}", row.member.name);
        for mark in row.marks {
            print!("{:>3}", mark.symbol());
        }
        println!();
    }
    println!("\n● checked in and out  ○ checked in only");
    Ok(())
}
