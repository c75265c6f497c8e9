use eframe::egui::{Align, Grid, Layout, RichText, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::config::PLOT_CONFIG;
use crate::models::{ResultColumn, ScenarioReport};
use crate::ui::UI_TEXT;
use crate::ui::styles::{UiStyleExt, colored_subsection_heading, get_change_color};
use crate::utils::pct_change_label;

/// The three coefficients behind a scenario, plus the price move they were applied to.
pub struct DiagnosticsPanel<'a> {
    report: &'a ScenarioReport,
}

impl<'a> DiagnosticsPanel<'a> {
    pub fn new(report: &'a ScenarioReport) -> Self {
        Self { report }
    }

    pub fn render(&self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            for (name, value) in self.report.diagnostics() {
                ui.group(|ui| {
                    ui.metric(name, value, PLOT_CONFIG.color_info);
                });
            }
            ui.group(|ui| {
                let pct = self.report.price_change_pct;
                ui.metric(
                    &UI_TEXT.lp_price_change,
                    pct_change_label(pct),
                    get_change_color(pct),
                );
            });
        });

        if self.report.lookup.is_default() {
            ui.label_warning(UI_TEXT.cp_default_coefficients.as_str());
        }
    }
}

/// Month-by-month results with a totals row.
pub struct ResultTablePanel<'a> {
    report: &'a ScenarioReport,
}

impl<'a> ResultTablePanel<'a> {
    pub fn new(report: &'a ScenarioReport) -> Self {
        Self { report }
    }

    fn cell(ui: &mut Ui, text: RichText, numeric: bool) {
        let layout = if numeric {
            Layout::right_to_left(Align::Center)
        } else {
            Layout::left_to_right(Align::Center)
        };
        ui.with_layout(layout, |ui| ui.label(text));
    }

    pub fn render(&self, ui: &mut Ui, max_height: f32) {
        ui.label(colored_subsection_heading(UI_TEXT.cp_results_heading.as_str()));

        ScrollArea::vertical()
            .id_salt("result_table")
            .max_height(max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                Grid::new("result_grid")
                    .striped(true)
                    .num_columns(ResultColumn::iter().count())
                    .min_col_width(110.0)
                    .show(ui, |ui| {
                        for column in ResultColumn::iter() {
                            Self::cell(ui, RichText::new(column.to_string()).strong(), column.is_numeric());
                        }
                        ui.end_row();

                        for row in &self.report.results {
                            for column in ResultColumn::iter() {
                                let mut text = RichText::new(column.cell(row));
                                if column == ResultColumn::AdjustedForecast && row.adjusted_forecast < 0.0 {
                                    text = text.color(PLOT_CONFIG.color_loss);
                                }
                                Self::cell(ui, text, column.is_numeric());
                            }
                            ui.end_row();
                        }

                        // Totals
                        for column in ResultColumn::iter() {
                            let text = match column {
                                ResultColumn::Month => UI_TEXT.cp_total.clone(),
                                ResultColumn::PredictedUnits => {
                                    format!("{:.0}", self.report.total_predicted_units())
                                }
                                ResultColumn::AdjustedForecast => {
                                    format!("{:.2}", self.report.total_adjusted_units())
                                }
                                ResultColumn::Revenue => format!("{:.2}", self.report.total_revenue()),
                            };
                            Self::cell(ui, RichText::new(text).strong(), column.is_numeric());
                        }
                        ui.end_row();
                    });
            });

        let delta = self.report.total_revenue() - self.report.baseline_revenue();
        ui.horizontal(|ui| {
            ui.label_subdued("Revenue vs base price:");
            ui.label(
                RichText::new(format!("{:+.2}", delta))
                    .strong()
                    .color(get_change_color(delta)),
            );
        });
    }
}
