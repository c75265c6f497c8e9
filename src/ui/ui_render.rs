use eframe::egui::{
    Align, Button, CentralPanel, ComboBox, Context, DragValue, Layout, RichText, ScrollArea,
    SidePanel, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{ENGINE, NegativeForecastPolicy, PLOT_CONFIG};
use crate::error::ScenarioError;
use crate::models::ScenarioReport;
use crate::ui::styles::{UiStyleExt, colored_subsection_heading, get_change_color};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{DiagnosticsPanel, ResultTablePanel};
use crate::ui::ui_plot_view::ForecastPlot;
use crate::ui::utils::{format_price, render_fullscreen_message};
use crate::utils::pct_change_label;

/// Returns the newly picked entry, if any.
fn selector(ui: &mut Ui, id: &str, label: &str, current: Option<&String>, options: &[String]) -> Option<String> {
    let mut picked = None;
    ui.label(colored_subsection_heading(label));
    ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(current.map(String::as_str).unwrap_or("-"))
        .show_ui(ui, |ui| {
            for option in options {
                let is_current = current == Some(option);
                if ui.selectable_label(is_current, option.as_str()).clicked() && !is_current {
                    picked = Some(option.clone());
                }
            }
        });
    picked
}

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title.as_str()).color(UI_CONFIG.colors.heading));
                    ui.separator();

                    if let Some(cache) = &self.cache {
                        ui.label_subdued(format!("{} {}", UI_TEXT.tp_source, cache.describe()));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.tp_reload.as_str()).clicked() {
                            self.reload_requested = true;
                        }
                        ui.checkbox(&mut self.show_chart, "Chart");
                    });
                });
            });
    }

    pub(crate) fn render_left_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::left("left_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.heading(UI_TEXT.lp_heading.as_str());
                ui.separator();

                let Some(engine) = &self.engine else {
                    return;
                };
                let countries = engine.countries();
                let models = self.model_choices();

                // --- Country ---
                if let Some(country) = selector(
                    ui,
                    "country_combo",
                    &UI_TEXT.lp_country,
                    self.selection.country.as_ref(),
                    &countries,
                ) {
                    self.select_country(country);
                }
                ui.add_space(8.0);

                // --- Bike model ---
                if let Some(model) = selector(
                    ui,
                    "bike_model_combo",
                    &UI_TEXT.lp_bike_model,
                    self.selection.bike_model.as_ref(),
                    &models,
                ) {
                    self.select_bike_model(model);
                }
                let mut filter = self.filter_models_by_country;
                if ui.checkbox(&mut filter, UI_TEXT.lp_filter_models.as_str()).changed() {
                    self.set_filter_models_by_country(filter);
                }

                ui.add_space(12.0);
                self.render_price_entry(ui);

                ui.add_space(12.0);
                self.render_policy_selector(ui);
            });
    }

    fn render_price_entry(&mut self, ui: &mut Ui) {
        UI_CONFIG.price_banner_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(UI_TEXT.lp_new_price.as_str())
                    .strong()
                    .color(UI_CONFIG.colors.price_banner_text),
            );
        });
        ui.add_space(4.0);

        let enabled = self.selection.bike_model.is_some() && self.selection.country.is_some();
        let mut price = self.selection.price;
        let response = ui.add_enabled(
            enabled,
            DragValue::new(&mut price)
                .speed(1.0)
                .range(0.01..=f64::MAX)
                .fixed_decimals(ENGINE.display_decimals),
        );
        if response.changed() {
            self.set_price(price);
        }

        if let Some(Ok(report)) = &self.report {
            ui.label_subdued(format!(
                "{}: {}",
                UI_TEXT.lp_base_price,
                format_price(report.base_price)
            ));
            let pct = report.price_change_pct;
            ui.horizontal(|ui| {
                ui.label_subdued(format!("{}:", UI_TEXT.lp_price_change));
                ui.label(RichText::new(pct_change_label(pct)).strong().color(get_change_color(pct)));
            });
        }

        if ui
            .add_enabled(self.selection.price_edited, Button::new(UI_TEXT.lp_reset_price.as_str()))
            .clicked()
        {
            self.reset_price();
            self.recompute();
        }
    }

    fn render_policy_selector(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.lp_policy.as_str()));
        let mut policy = self.negative_policy;
        ComboBox::from_id_salt("policy_combo")
            .width(ui.available_width())
            .selected_text(policy.to_string())
            .show_ui(ui, |ui| {
                for option in NegativeForecastPolicy::iter() {
                    ui.selectable_value(&mut policy, option, option.to_string());
                }
            });
        if policy != self.negative_policy {
            self.set_negative_policy(policy);
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                match &self.report {
                    None if self.engine.is_none() => {
                        render_fullscreen_message(ui, &UI_TEXT.ls_title, &UI_TEXT.ls_reading, false);
                    }
                    None => {
                        ui.add_space(20.0);
                        ui.label_subdued(UI_TEXT.cp_please_select.as_str());
                    }
                    Some(Err(ScenarioError::NoDataForSelection { .. })) => {
                        ui.add_space(20.0);
                        ui.label_warning(UI_TEXT.cp_no_data.as_str());
                    }
                    Some(Err(e)) => {
                        ui.add_space(20.0);
                        ui.label_error(e.to_string());
                    }
                    Some(Ok(report)) => {
                        ScrollArea::vertical()
                            .id_salt("central_scroll")
                            .auto_shrink([false, false])
                            .show(ui, |ui| render_report(ui, report, self.show_chart));
                    }
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(loaded_at) = &self.loaded_at {
                        ui.label_subdued(format!("{} {}", UI_TEXT.sb_loaded_at, loaded_at));
                        ui.separator();
                    }

                    if let Some(engine) = &self.engine {
                        let tables = engine.tables();
                        ui.label_subdued(format!(
                            "{} {}",
                            tables.forecast.len(),
                            UI_TEXT.sb_forecast_rows
                        ));
                        ui.label_subdued(format!(
                            "{} {}",
                            tables.elasticity.len(),
                            UI_TEXT.sb_elasticity_rows
                        ));

                        if !tables.warnings.is_empty() {
                            ui.separator();
                            ui.label_warning(format!(
                                "{} {}",
                                tables.warnings.len(),
                                UI_TEXT.sb_warnings
                            ))
                            .on_hover_text(tables.warnings.join("\n"));
                        }
                    }

                    if let Some(err) = &self.last_load_error {
                        ui.separator();
                        ui.label_error(format!("{} {}", UI_TEXT.sb_reload_failed, err));
                    }
                });
            });
    }
}

fn render_report(ui: &mut Ui, report: &ScenarioReport, show_chart: bool) {
    ui.label_subdued(format!(
        "{} / {} @ {}",
        report.input.country,
        report.input.bike_model,
        format_price(report.new_price)
    ));
    ui.add_space(6.0);

    DiagnosticsPanel::new(report).render(ui);

    if report.has_negative_forecast {
        ui.label_warning(UI_TEXT.cp_negative_forecast.as_str());
        if report.policy == NegativeForecastPolicy::ClampToZero {
            ui.label_subdued(UI_TEXT.cp_clamped_forecast.as_str());
        }
    }

    if !report.rejected_periods.is_empty() {
        ui.label_warning(UI_TEXT.cp_rejected_periods.as_str());
        for rejected in &report.rejected_periods {
            ui.label(RichText::new(format!("  {}", rejected)).small().color(PLOT_CONFIG.color_warning));
        }
    }

    ui.add_space(10.0);
    ResultTablePanel::new(report).render(ui, UI_CONFIG.table_height);

    if show_chart && !report.results.is_empty() {
        ui.add_space(10.0);
        ForecastPlot::new(report).show(ui);
    }

    ui.add_space(10.0);
    ui.label_success(UI_TEXT.cp_success.as_str());
}
