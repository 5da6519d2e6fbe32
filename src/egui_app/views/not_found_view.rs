use eframe::egui;

use crate::egui_app::router::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Unknown path
pub fn render(ui: &mut egui::Ui, state: &mut AppState, path: &str) {
    render_message(ui, state, "Page not found", &format!("Nothing lives at {}", path));
}

/// Detail route whose id matches no catalog item
pub fn render_missing_film(ui: &mut egui::Ui, state: &mut AppState, raw_id: &str) {
    render_message(ui, state, "Film not found", &format!("No film with id \"{}\"", raw_id));
}

fn render_message(ui: &mut egui::Ui, state: &mut AppState, heading: &str, detail: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(64.0);
        ui.label(egui::RichText::new(heading).size(26.0).strong().color(colors::TEXT_DARK));
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, detail);
        ui.add_space(20.0);
        if ui.add(styles::primary_button("Back to films")).clicked() {
            state.navigate(Route::Films);
        }
    });
}
