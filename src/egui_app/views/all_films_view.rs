use eframe::egui;

use crate::egui_app::components::film_card;
use crate::egui_app::rating::CardSlot;
use crate::egui_app::router::{ListFilter, Route};
use crate::egui_app::state::AppState;
use crate::egui_app::store::CatalogAccess;
use crate::egui_app::theme::colors;

pub const ALL_SECTION: &str = "all";

/// Every catalog item in a wrapped grid. Ratings live on the cards only, so
/// both filters list the whole catalog.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, filter: ListFilter) {
    let items = state.catalog().items();
    let mut target = None;

    ui.label(egui::RichText::new(filter.label()).size(22.0).strong().color(colors::TEXT_DARK));
    ui.colored_label(colors::TEXT_SECONDARY, format!("{} films", items.len()));
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for (index, item) in items.iter().enumerate() {
            let rating = state.card_ratings.entry(CardSlot::new(ALL_SECTION, index));
            if film_card::render(ui, item, rating) {
                target = Some(Route::film(item.id));
            }
        }
    });

    if let Some(route) = target {
        state.navigate(route);
    }
}
