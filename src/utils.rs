use crate::core::evaluator::Verdict;
use chrono::NaiveDateTime;
use clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
};
use owo_colors::OwoColorize;

/// Format a utilisation value the way the dashboard shows it.
///
/// Whole numbers drop their fraction; anything else keeps two decimals.
///
/// # Examples
///
/// ```
/// use alvya::utils::format_percent;
///
/// assert_eq!(format_percent(85.0), "85%");
/// assert_eq!(format_percent(33.333), "33.33%");
/// assert_eq!(format_percent(0.5), "0.50%");
/// ```
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Format a history timestamp as `YYYY-MM-DD HH:MM`.
///
/// # Examples
///
/// ```
/// use alvya::utils::format_timestamp;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// assert_eq!(format_timestamp(&ts), "2025-03-05 10:00");
/// ```
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(crate::core::history::TIMESTAMP_FORMAT).to_string()
}

/// Verdict text, red for high load and green for low.
pub fn colored_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::High => verdict.to_string().red().bold().to_string(),
        Verdict::Low => verdict.to_string().green().bold().to_string(),
    }
}

pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());
