use {
    crate::{app::FailedState, config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText},
};

/// True when the user asked to try again.
pub(crate) fn render_failed(ctx: &Context, state: &FailedState) -> bool {
    let mut retry = false;
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.fs_title)
                    .size(22.0)
                    .strong()
                    .color(PLOT_CONFIG.color_error),
            );
            ui.add_space(12.0);

            if !state.source.is_empty() {
                ui.label(RichText::new(&state.source).color(PLOT_CONFIG.color_text_subdued));
                ui.add_space(6.0);
            }
            ui.label(RichText::new(&state.message).color(PLOT_CONFIG.color_loss));

            ui.add_space(16.0);
            ui.label(RichText::new(&UI_TEXT.fs_hint).color(PLOT_CONFIG.color_info));
            ui.add_space(16.0);

            retry = ui.button(UI_TEXT.fs_retry.as_str()).clicked();
        });
    });
    retry
}
