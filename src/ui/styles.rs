use {
    crate::{config::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{Color32, Response, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Green for a gain over baseline, red for a loss, grey when flat.
pub fn get_change_color(value: f64) -> Color32 {
    if value > 0.0 {
        PLOT_CONFIG.color_gain
    } else if value < 0.0 {
        PLOT_CONFIG.color_loss
    } else {
        PLOT_CONFIG.color_text_subdued
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>) -> Response;
    fn label_warning(&mut self, text: impl Into<String>) -> Response;
    fn label_error(&mut self, text: impl Into<String>) -> Response;
    fn label_success(&mut self, text: impl Into<String>) -> Response;
    /// "Name: value" on one line, value emphasised
    fn metric(&mut self, name: &str, value: impl Into<String>, value_color: Color32) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) -> Response {
        self.label(RichText::new(text.into()).color(PLOT_CONFIG.color_text_subdued))
    }

    fn label_warning(&mut self, text: impl Into<String>) -> Response {
        self.label(RichText::new(text.into()).color(PLOT_CONFIG.color_warning))
    }

    fn label_error(&mut self, text: impl Into<String>) -> Response {
        self.label(RichText::new(text.into()).color(PLOT_CONFIG.color_error))
    }

    fn label_success(&mut self, text: impl Into<String>) -> Response {
        self.label(RichText::new(text.into()).color(PLOT_CONFIG.color_gain))
    }

    fn metric(&mut self, name: &str, value: impl Into<String>, value_color: Color32) -> Response {
        self.horizontal(|ui| {
            ui.label(RichText::new(format!("{}:", name)).strong());
            ui.label(RichText::new(value.into()).strong().color(value_color));
        })
        .response
    }
}
