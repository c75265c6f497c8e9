//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Table loading: row counts, dropped rows, cache transitions
    pub log_loading: bool,

    /// Anything about handling the country / bike model selection
    pub log_selection: bool,

    /// One line per scenario recomputation
    pub log_simulation: bool,

    /// Each forecast row dropped for a bad period label
    pub log_period_rejections: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_loading: true,
    log_selection: true,
    log_simulation: false,
    log_period_rejections: true,
    log_performance: false,
};
