use eframe::egui;
use tracing::Level;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const LEVELS: [(&str, Level); 5] = [
    ("Error", Level::ERROR),
    ("Warn", Level::WARN),
    ("Info", Level::INFO),
    ("Debug", Level::DEBUG),
    ("Trace", Level::TRACE),
];

fn level_color(level: Level) -> egui::Color32 {
    if level == Level::ERROR {
        colors::ERROR
    } else if level == Level::WARN {
        colors::WARNING
    } else if level == Level::INFO {
        colors::SUCCESS
    } else if level == Level::DEBUG {
        egui::Color32::GRAY
    } else {
        egui::Color32::DARK_GRAY
    }
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(format!("Entries: {}", state.diagnostics.count()));
        if ui.button("🗑 Clear").clicked() {
            state.diagnostics.clear();
        }

        ui.separator();
        ui.label("Show at least:");
        for (label, level) in LEVELS {
            if ui.selectable_label(state.diagnostics_level == level, label).clicked() {
                state.diagnostics_level = level;
            }
        }
    });

    ui.separator();

    let entries = state.diagnostics.get_entries_at_least(state.diagnostics_level);
    egui::ScrollArea::vertical()
        .id_salt("diagnostics_scroll")
        .auto_shrink([false; 2])
        .max_height(280.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in &entries {
                ui.colored_label(level_color(entry.level), entry.to_string());
            }
        });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label(format!("Route: {}", state.current_route()));
        ui.separator();
        ui.colored_label(colors::ERROR, format!("Errors: {}", state.diagnostics.count_level(Level::ERROR)));
        ui.colored_label(colors::WARNING, format!("Warnings: {}", state.diagnostics.count_level(Level::WARN)));
    });
}
