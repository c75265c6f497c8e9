use std::sync::LazyLock;

pub const ICON_CRYSTAL_BALL: &str = "🔮";
pub const ICON_CHART: &str = "📈";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_RELOAD: &str = "🔄";
pub const ICON_CHECK: &str = "✔";
pub const ICON_INFO: &str = "ℹ";

pub struct UiText {
    // --- Top panel ---
    pub app_title: String,
    pub tp_source: String,
    pub tp_reload: String,

    // --- Left panel ---
    pub lp_heading: String,
    pub lp_country: String,
    pub lp_bike_model: String,
    pub lp_filter_models: String,
    pub lp_new_price: String,
    pub lp_base_price: String,
    pub lp_reset_price: String,
    pub lp_price_change: String,
    pub lp_policy: String,

    // --- Central panel ---
    pub cp_please_select: String,
    pub cp_no_data: String,
    pub cp_results_heading: String,
    pub cp_default_coefficients: String,
    pub cp_negative_forecast: String,
    pub cp_clamped_forecast: String,
    pub cp_rejected_periods: String,
    pub cp_total: String,
    pub cp_success: String,

    // --- Plot labels ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_predicted: String,
    pub plot_adjusted: String,

    // --- Status bar ---
    pub sb_loaded_at: String,
    pub sb_forecast_rows: String,
    pub sb_elasticity_rows: String,
    pub sb_warnings: String,
    pub sb_reload_failed: String,

    // --- Loading / failure screens ---
    pub ls_title: String,
    pub ls_reading: String,
    pub ls_reloading: String,
    pub fs_title: String,
    pub fs_hint: String,
    pub fs_retry: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("{} Forecast Simulator with Price Sensitivity", ICON_CRYSTAL_BALL),
    tp_source: "Source:".to_string(),
    tp_reload: format!("{} Reload data", ICON_RELOAD),

    lp_heading: "Scenario".to_string(),
    lp_country: "Select Country".to_string(),
    lp_bike_model: "Select Bike Model".to_string(),
    lp_filter_models: "Only models sold in this country".to_string(),
    lp_new_price: "Enter New Price:".to_string(),
    lp_base_price: "Base price (mean)".to_string(),
    lp_reset_price: "Reset to base price".to_string(),
    lp_price_change: "Price change".to_string(),
    lp_policy: "Negative forecasts".to_string(),

    cp_please_select: "Select a country and bike model to run a scenario.".to_string(),
    cp_no_data: format!(
        "{} No forecast data for selected Country and Bike Model.",
        ICON_WARNING
    ),
    cp_results_heading: format!("{} Forecast vs Adjusted Forecast", ICON_CHART),
    cp_default_coefficients: format!(
        "{} No elasticity estimate for this selection; default coefficients are in use.",
        ICON_WARNING
    ),
    cp_negative_forecast: format!(
        "{} The adjusted forecast goes negative for at least one month.",
        ICON_WARNING
    ),
    cp_clamped_forecast: "Negative months are shown clamped to zero.".to_string(),
    cp_rejected_periods: format!("{} Rows dropped for unreadable months:", ICON_WARNING),
    cp_total: "Total".to_string(),
    cp_success: format!(
        "{} Simulation complete. Adjust the price to see its effect on your forecast.",
        ICON_CHECK
    ),

    plot_x_axis: "Month".to_string(),
    plot_y_axis: "Units".to_string(),
    plot_predicted: "Predicted_Units".to_string(),
    plot_adjusted: "Adjusted_Forecast".to_string(),

    sb_loaded_at: "Loaded".to_string(),
    sb_forecast_rows: "forecast rows".to_string(),
    sb_elasticity_rows: "elasticity rows".to_string(),
    sb_warnings: "load warnings".to_string(),
    sb_reload_failed: format!("{} Reload failed, still showing previous data:", ICON_WARNING),

    ls_title: "Loading tables".to_string(),
    ls_reading: "Reading".to_string(),
    ls_reloading: "Reloading".to_string(),
    fs_title: format!("{} Could not load the input tables", ICON_WARNING),
    fs_hint: format!(
        "{} Check the paths passed with --forecast / --elasticity, or start with --demo.",
        ICON_INFO
    ),
    fs_retry: format!("{} Retry", ICON_RELOAD),
});
