use eframe::egui;

use crate::egui_app::components::{comments, poster, stars};
use crate::egui_app::state::AppState;
use crate::egui_app::store::CatalogAccess;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{not_found_view, RenderedPage};
use crate::shared::CatalogItem;

const POSTER_SIZE: egui::Vec2 = egui::vec2(240.0, 340.0);

pub fn render(ui: &mut egui::Ui, state: &mut AppState, raw_id: &str) -> RenderedPage {
    let item = raw_id
        .parse()
        .ok()
        .and_then(|id| state.catalog().find(id));

    match item {
        Some(item) => {
            render_film(ui, state, &item);
            RenderedPage::FilmDetail(item.id)
        }
        None => {
            not_found_view::render_missing_film(ui, state, raw_id);
            RenderedPage::FilmNotFound(raw_id.to_string())
        }
    }
}

fn render_film(ui: &mut egui::Ui, state: &mut AppState, item: &CatalogItem) {
    ui.label(egui::RichText::new(&item.title).size(26.0).strong().color(colors::TEXT_DARK));
    ui.add_space(12.0);

    ui.horizontal_top(|ui| {
        styles::card_frame().show(ui, |ui| {
            ui.vertical(|ui| {
                poster::render(ui, item, POSTER_SIZE);
                ui.add_space(8.0);
                ui.label(egui::RichText::new(item.display_title()).strong().color(colors::TEXT_DARK));
                stars::render_stable(ui, item.rounded_stars());
            });
        });

        ui.add_space(24.0);
        ui.vertical(|ui| {
            let year = item.year.map(|y| y.to_string()).unwrap_or_else(|| "unknown".to_string());
            let rating = item
                .rating
                .map(|r| format!("{:.1} / 5", r))
                .unwrap_or_else(|| "Not rated yet".to_string());

            stat(ui, "Year", &year);
            stat(ui, "Rating", &rating);
            stat(ui, "Comments", &state.comments.count(item.id).to_string());
        });
    });

    ui.add_space(24.0);
    ui.label(egui::RichText::new("Comments").size(20.0).strong().color(colors::TEXT_DARK));
    ui.add_space(8.0);

    let post = comments::render_field(ui, &mut state.comment_draft, state.comment_error.as_deref());
    if post {
        if let Err(e) = state.post_comment(item.id) {
            tracing::debug!("Comment rejected: {}", e);
        }
    }

    ui.add_space(12.0);
    comments::render_list(ui, state.comments.for_film(item.id));
}

fn stat(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong().color(colors::TEXT_DARK));
        ui.colored_label(colors::TEXT_SECONDARY, value);
    });
    ui.add_space(4.0);
}
