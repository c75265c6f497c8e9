use {
    crate::{
        config::PLOT_CONFIG,
        domain::Period,
        models::{ScenarioReport, ScenarioResult},
        ui::UI_TEXT,
        utils::padded_range,
    },
    eframe::egui::Ui,
    egui_plot::{Axis, AxisHints, GridMark, HLine, HPlacement, Legend, Line, Plot, PlotPoints, Points},
};

/// Month labels only on whole ordinals; the axis is one unit per month.
fn create_month_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| {
            if mark.value.fract().abs() > f64::EPSILON {
                return String::new();
            }
            Period::from_ordinal(mark.value as i64)
                .map(|p| p.to_string())
                .unwrap_or_default()
        })
}

fn create_units_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

// Step of 1, 2, 3, 6 or 12 months so that roughly `target` labels fit.
fn month_step(span: f64, target: f64) -> f64 {
    let raw = span / target.max(1.0);
    [1.0, 2.0, 3.0, 6.0, 12.0]
        .into_iter()
        .find(|s| *s >= raw)
        .unwrap_or(12.0 * (raw / 12.0).ceil())
}

/// Predicted vs price-adjusted units, one point per month.
pub(crate) struct ForecastPlot<'a> {
    report: &'a ScenarioReport,
}

impl<'a> ForecastPlot<'a> {
    pub(crate) fn new(report: &'a ScenarioReport) -> Self {
        Self { report }
    }

    fn series(&self, pick: impl Fn(&ScenarioResult) -> f64) -> Vec<[f64; 2]> {
        self.report
            .results
            .iter()
            .map(|r| [r.period.ordinal() as f64, pick(r)])
            .collect()
    }

    pub(crate) fn show(&self, ui: &mut Ui) {
        let predicted = self.series(|r| r.predicted_units);
        let adjusted = self.series(|r| r.adjusted_forecast);

        let y_range = padded_range(
            predicted.iter().chain(&adjusted).map(|p| p[1]),
            PLOT_CONFIG.plot_y_padding_pct,
        );
        let x_range = predicted
            .first()
            .zip(predicted.last())
            .map(|(a, b)| (a[0] - 0.5, b[0] + 0.5));
        let any_negative = adjusted.iter().any(|p| p[1] < 0.0);

        Plot::new("forecast_plot")
            .height(PLOT_CONFIG.plot_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_month_axis()])
            .custom_y_axes(vec![create_units_axis()])
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                let step = month_step(max - min, 8.0);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .allow_scroll(false)
            .allow_double_click_reset(true)
            .show(ui, |plot_ui| {
                if let Some((x_min, x_max)) = x_range {
                    plot_ui.set_plot_bounds_x(x_min..=x_max);
                }
                if let Some((y_min, y_max)) = y_range {
                    plot_ui.set_plot_bounds_y(y_min..=y_max);
                }

                if any_negative {
                    plot_ui.hline(
                        HLine::new("", 0.0)
                            .color(PLOT_CONFIG.color_loss)
                            .width(1.0),
                    );
                }

                plot_ui.line(
                    Line::new(UI_TEXT.plot_predicted.as_str(), PlotPoints::new(predicted.clone()))
                        .color(PLOT_CONFIG.color_predicted)
                        .width(PLOT_CONFIG.line_width),
                );
                plot_ui.points(
                    Points::new(UI_TEXT.plot_predicted.as_str(), PlotPoints::new(predicted))
                        .color(PLOT_CONFIG.color_predicted)
                        .radius(PLOT_CONFIG.marker_radius),
                );

                plot_ui.line(
                    Line::new(UI_TEXT.plot_adjusted.as_str(), PlotPoints::new(adjusted.clone()))
                        .color(PLOT_CONFIG.color_adjusted)
                        .width(PLOT_CONFIG.line_width),
                );
                plot_ui.points(
                    Points::new(UI_TEXT.plot_adjusted.as_str(), PlotPoints::new(adjusted))
                        .color(PLOT_CONFIG.color_adjusted)
                        .radius(PLOT_CONFIG.marker_radius),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_steps_snap_to_calendar_friendly_values() {
        assert_eq!(month_step(6.0, 8.0), 1.0);
        assert_eq!(month_step(20.0, 8.0), 3.0);
        assert_eq!(month_step(40.0, 8.0), 6.0);
        assert_eq!(month_step(90.0, 8.0), 12.0);
        assert_eq!(month_step(300.0, 8.0), 48.0);
    }
}
