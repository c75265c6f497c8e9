//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Baseline (unadjusted) forecast line
    pub color_predicted: Color32,
    /// Price-adjusted forecast line
    pub color_adjusted: Color32,
    pub line_width: f32,
    /// Radius of the per-period markers drawn over each line
    pub marker_radius: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    pub plot_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_gain: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_predicted: Color32::from_rgb(100, 200, 255), // Light Blue
    color_adjusted: Color32::from_rgb(255, 107, 46),   // Same orange as the price banner
    line_width: 2.0,
    marker_radius: 3.0,
    plot_y_padding_pct: 0.08,
    plot_height: 320.0,

    color_gain: Color32::from_rgb(80, 200, 120),
    color_loss: Color32::from_rgb(230, 80, 80),
    color_info: Color32::from_rgb(120, 170, 255),
    color_warning: Color32::from_rgb(255, 200, 60),
    color_error: Color32::from_rgb(255, 90, 90),

    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};
