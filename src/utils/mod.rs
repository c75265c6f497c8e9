mod maths_utils;
pub mod perf;
pub mod time_utils;

pub use time_utils::{AppInstant, now_local_string};

pub(crate) use maths_utils::{padded_range, pct_change_label, round_to};
