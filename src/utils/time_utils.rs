use chrono::Local;

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock "now", used to stamp loads in the status bar.
pub fn now_local_string() -> String {
    Local::now().format(STANDARD_TIME_FORMAT).to_string()
}
