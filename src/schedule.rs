//! Daily wall-clock scheduler.
//!
//! Re-runs a job once per day at a configured HH:MM time, polling once a
//! minute. Timing is a courtesy, not a correctness requirement, so the
//! minute granularity is deliberate.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveTime, Timelike};

use crate::logger::Logger;

const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Parse an "HH:MM" time string, falling back to 09:00 on any parse failure.
pub fn parse_schedule_time(input: &str) -> NaiveTime {
    match NaiveTime::parse_from_str(input.trim(), "%H:%M") {
        Ok(time) => time,
        Err(_) => {
            println!("Invalid time format! Using default time: 09:00");
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        }
    }
}

/// Whether `now` has just crossed the scheduled minute.
pub fn is_due(now: DateTime<Local>, target: NaiveTime) -> bool {
    now.hour() == target.hour() && now.minute() == target.minute()
}

/// Run `job` every day at `target`, checking once a minute. Never returns;
/// the process is stopped with Ctrl+C, matching how these tools are run in
/// practice.
pub fn run_daily<F: FnMut()>(target: NaiveTime, logger: &Logger, mut job: F) -> ! {
    logger.info(&format!(
        "Scheduler is running. Search will execute daily at {}",
        target.format("%H:%M")
    ));

    let mut last_run_date = None;
    loop {
        let now = Local::now();
        if is_due(now, target) && last_run_date != Some(now.date_naive()) {
            last_run_date = Some(now.date_naive());
            job();
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_schedule_time_valid() {
        assert_eq!(
            parse_schedule_time("09:30"),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_schedule_time(" 23:05 "),
            NaiveTime::from_hms_opt(23, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_schedule_time_defaults_to_nine() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_schedule_time("not a time"), nine);
        assert_eq!(parse_schedule_time("25:99"), nine);
        assert_eq!(parse_schedule_time(""), nine);
    }

    #[test]
    fn test_is_due_matches_minute() {
        let target = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let at_nine = Local.with_ymd_and_hms(2026, 8, 29, 9, 0, 42).unwrap();
        let later = Local.with_ymd_and_hms(2026, 8, 29, 9, 1, 0).unwrap();
        assert!(is_due(at_nine, target));
        assert!(!is_due(later, target));
    }
}
