use {
    crate::{app::LoadingState, config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText, Spinner},
};

pub(crate) fn render_loading(ctx: &Context, state: &LoadingState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(20.0);
            ui.add(Spinner::new().size(32.0));
            ui.add_space(12.0);

            let verb = if state.reload {
                &UI_TEXT.ls_reloading
            } else {
                &UI_TEXT.ls_reading
            };
            ui.label(
                RichText::new(format!("{} {}", verb, state.source))
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
        });
    });
}
