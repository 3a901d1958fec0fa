// envelope-client/src/timestamp.rs
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use thiserror::Error;

/// Pattern used for every diagnostic line.
pub const DIAGNOSTIC_PATTERN: &str = "yyyy-MM-dd hh:mm:ss";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Zero is rejected rather than silently rendered as the epoch.
    #[error("a date argument is required")]
    MissingDate,
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// Current local instant under the diagnostic pattern.
pub fn now() -> String {
    render(DIAGNOSTIC_PATTERN, &Local::now())
}

/// Render an explicit instant, given as milliseconds since the Unix epoch,
/// under the diagnostic pattern.
pub fn format_epoch_millis(millis: i64) -> Result<String, TimestampError> {
    if millis == 0 {
        return Err(TimestampError::MissingDate);
    }
    let moment = Local
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(TimestampError::OutOfRange(millis))?;
    Ok(render(DIAGNOSTIC_PATTERN, &moment))
}

/// Token formatter over a local datetime.
///
/// Runs of `y` (year), `M` (month), `d` (day), `h` (hour), `m` (minute),
/// `s` (second), `q` (quarter) and `S` (millisecond) are substituted. A run
/// of length one emits the bare value; longer runs zero-pad to the run
/// width, and a short `y` run keeps only the trailing digits of the year.
/// Every other character passes through unchanged.
pub fn render(pattern: &str, moment: &DateTime<Local>) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let value: u32 = match c {
            'y' => {
                let year = moment.year().to_string();
                let keep = run.min(year.len());
                out.push_str(&year[year.len() - keep..]);
                continue;
            }
            'M' => moment.month(),
            'd' => moment.day(),
            'h' => moment.hour(),
            'm' => moment.minute(),
            's' => moment.second(),
            'q' => moment.month0() / 3 + 1,
            'S' => moment.nanosecond() / 1_000_000,
            other => {
                for _ in 0..run {
                    out.push(other);
                }
                continue;
            }
        };

        if run == 1 {
            out.push_str(&value.to_string());
        } else {
            out.push_str(&format!("{value:0run$}"));
        }
    }

    out
}
