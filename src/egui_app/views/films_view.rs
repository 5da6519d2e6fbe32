//! Catalog grid
//!
//! Two horizontal rows of cards. The first one shows every film four times
//! over, the second one once. Each card keeps its own rating.

use eframe::egui;

use crate::egui_app::components::film_card;
use crate::egui_app::rating::{CardRatings, CardSlot};
use crate::egui_app::router::{ListFilter, Route};
use crate::egui_app::state::AppState;
use crate::egui_app::store::CatalogAccess;
use crate::egui_app::theme::colors;
use crate::shared::{CatalogItem, FilmId};

pub const RATE_SECTION: &str = "rate";
pub const YOURS_SECTION: &str = "yours";

/// How many times the rate row repeats the catalog
pub const RATE_ROW_REPEAT: usize = 4;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let items = state.catalog().items();
    let mut target: Option<Route> = None;

    ui.horizontal(|ui| {
        section_heading(ui, "Rate films");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.is_refreshing_catalog() {
                ui.spinner();
            } else if ui.button("🔄 Refresh").clicked() {
                state.use_catalog().refresh();
            }
        });
    });

    let rate_row = items.iter().cycle().take(items.len() * RATE_ROW_REPEAT);
    if let Some(id) = card_row(ui, RATE_SECTION, rate_row, &mut state.card_ratings) {
        target = Some(Route::film(id));
    }
    if ui.link("Show all unrated films").clicked() {
        target = Some(Route::AllFilms(ListFilter::Unrated));
    }

    ui.add_space(24.0);
    section_heading(ui, "Your rates");
    if let Some(id) = card_row(ui, YOURS_SECTION, items.iter(), &mut state.card_ratings) {
        target = Some(Route::film(id));
    }
    if ui.link("Show all rated films").clicked() {
        target = Some(Route::AllFilms(ListFilter::Rated));
    }

    if let Some(route) = target {
        state.navigate(route);
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(22.0).strong().color(colors::TEXT_DARK));
}

/// One scrollable row of cards; returns the id of a clicked title
fn card_row<'a>(
    ui: &mut egui::Ui,
    section: &'static str,
    items: impl Iterator<Item = &'a CatalogItem>,
    ratings: &mut CardRatings,
) -> Option<FilmId> {
    let mut clicked = None;
    egui::ScrollArea::horizontal()
        .id_salt(section)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (index, item) in items.enumerate() {
                    if film_card::render(ui, item, ratings.entry(CardSlot::new(section, index))) {
                        clicked = Some(item.id);
                    }
                }
            });
        });
    clicked
}
