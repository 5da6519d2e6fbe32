use eframe::egui;

use crate::egui_app::login_form::Field;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const FORM_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        let top_space = ((ui.available_height() - 360.0) / 2.0).clamp(48.0, 240.0);
        ui.add_space(top_space);

        styles::form_frame().show(ui, |ui| {
            ui.set_width(FORM_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("🎬 Cinerate").size(28.0).strong().color(colors::TEXT_DARK));
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Log in to rate films").color(colors::TEXT_SECONDARY));
                ui.add_space(20.0);

                let kind = state.login_form.kind();
                let busy = state.login_form.is_submitting();

                for field in Field::ALL {
                    ui.label(egui::RichText::new(field.label(kind)).color(colors::TEXT_DARK));
                    let form = &mut state.login_form;
                    let value = match field {
                        Field::Identifier => &mut form.values.identifier,
                        Field::Password => &mut form.values.password,
                    };
                    let edit = egui::TextEdit::singleline(value)
                        .password(field == Field::Password)
                        .desired_width(f32::INFINITY);
                    let response = ui.add_enabled(!busy, edit);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }

                    if let Some(error) = state.login_form.field_error(field) {
                        ui.colored_label(colors::ERROR, error);
                    }
                    ui.add_space(10.0);
                }

                if let Some(error) = state.login_form.form_error() {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(8.0);
                }

                ui.horizontal(|ui| {
                    let button = styles::primary_button("Log in").min_size(egui::vec2(96.0, 32.0));
                    if ui.add_enabled(!busy, button).clicked() {
                        submit = true;
                    }
                    if busy {
                        ui.spinner();
                        ui.colored_label(colors::TEXT_SECONDARY, "Signing in...");
                    }
                });
            });
        });
    });

    if submit {
        let outcome = state.submit_login();
        tracing::debug!("Login submit: {:?}", outcome);
    }
}
