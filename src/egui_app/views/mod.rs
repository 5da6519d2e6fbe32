use eframe::egui;

use crate::egui_app::router::{ListFilter, Route};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::FilmId;

pub mod login_view;
pub mod films_view;
pub mod film_detail_view;
pub mod all_films_view;
pub mod not_found_view;
pub mod debug_view;

/// Header shown on every route except login
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    if !state.current_route().has_header() {
        return;
    }

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("🎬 Cinerate").size(18.0).strong());
                ui.add_space(24.0);

                let home_active = state.current_route().section() == Route::Films.path();
                let home_color = if home_active { colors::ACCENT_ACTIVE } else { colors::TEXT_LIGHT };
                let home = ui.add(
                    egui::Label::new(egui::RichText::new("Home").color(home_color).strong())
                        .sense(egui::Sense::click()),
                );
                if home.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    state.navigate(Route::Films);
                }

                if state.navigator().can_go_back() && ui.button("⬅ Back").clicked() {
                    state.back();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        state.logout();
                    }
                    ui.colored_label(colors::TEXT_LIGHT, format!("👤 {}", state.auth_state.display_name()));

                    ui.add_space(12.0);
                    if state.is_refreshing_catalog() {
                        ui.colored_label(colors::WARNING, "🔄 Refreshing");
                    }
                    if ui.small_button("🐛").on_hover_text("Diagnostics (F12)").clicked() {
                        state.toggle_diagnostics();
                    }
                });
            });
        });
}

/// Which page the main panel drew this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPage {
    Login,
    Films,
    FilmDetail(FilmId),
    AllFilms(ListFilter),
    FilmNotFound(String),
    PageNotFound(String),
}

/// The routed page. Scroll position returns to the top once per route
/// transition.
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) -> RenderedPage {
    let reset_scroll = state.scroll_reset.should_reset(state.navigator().transitions());
    let route = state.current_route().clone();

    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false; 2]);
            if reset_scroll {
                area = area.vertical_scroll_offset(0.0);
            }

            area.show(ui, |ui| match route {
                Route::Login => {
                    login_view::render(ui, state);
                    RenderedPage::Login
                }
                Route::Films => {
                    films_view::render(ui, state);
                    RenderedPage::Films
                }
                Route::FilmDetail(ref raw_id) => film_detail_view::render(ui, state, raw_id),
                Route::AllFilms(filter) => {
                    all_films_view::render(ui, state, filter);
                    RenderedPage::AllFilms(filter)
                }
                Route::NotFound(ref path) => {
                    not_found_view::render(ui, state, path);
                    RenderedPage::PageNotFound(path.clone())
                }
            })
            .inner
        })
        .inner
}

/// Diagnostics console window, toggled with F12
pub fn render_diagnostics_window(ctx: &egui::Context, state: &mut AppState) {
    if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
        state.toggle_diagnostics();
    }
    if !state.show_diagnostics {
        return;
    }

    let mut open = true;
    egui::Window::new("Diagnostics")
        .open(&mut open)
        .default_size([640.0, 360.0])
        .show(ctx, |ui| debug_view::render(ui, state));
    if !open {
        state.show_diagnostics = false;
    }
}
