//! Human-readable train durations.

/// Shown instead of a duration for trains that are not running.
pub const NOT_IN_SERVICE: &str = "暂 不 运 行";

/// Render a raw `HH:MM` duration as `<H>小时<MM>分`.
///
/// A zero hour drops the hour unit, a single leading zero is stripped
/// from the hour. Equal departure and arrival times mean the train is
/// not in service.
pub fn normalize(raw: &str, start_time: &str, arrive_time: &str) -> String {
    if start_time == arrive_time {
        return NOT_IN_SERVICE.to_string();
    }

    match raw.split_once(':') {
        Some(("00", minutes)) => format!("{minutes}分"),
        Some((hours, minutes)) => {
            let hours = hours.strip_prefix('0').unwrap_or(hours);
            format!("{hours}小时{minutes}分")
        }
        None => {
            let raw = raw
                .strip_prefix("00")
                .or_else(|| raw.strip_prefix('0'))
                .unwrap_or(raw);
            format!("{raw}分")
        }
    }
}
