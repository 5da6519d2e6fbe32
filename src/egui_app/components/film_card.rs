//! Film Card Component
//!
//! Poster, shortened title and interactive rating for one catalog entry.

use eframe::egui;

use crate::egui_app::components::{poster, stars};
use crate::egui_app::rating::StarRating;
use crate::egui_app::theme::{colors, styles};
use crate::shared::CatalogItem;

pub const CARD_WIDTH: f32 = 180.0;
const POSTER_SIZE: egui::Vec2 = egui::vec2(156.0, 220.0);

/// Render a single card
/// Returns true if the title was clicked
pub fn render(ui: &mut egui::Ui, item: &CatalogItem, rating: &mut StarRating) -> bool {
    let mut clicked = false;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH - 24.0);
        ui.vertical(|ui| {
            poster::render(ui, item, POSTER_SIZE);
            ui.add_space(8.0);

            let title = egui::Label::new(
                egui::RichText::new(item.display_title())
                    .color(colors::TEXT_DARK)
                    .strong(),
            )
            .wrap()
            .sense(egui::Sense::click());

            let response = ui
                .add(title)
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                clicked = true;
            }

            ui.add_space(4.0);
            stars::render_interactive(ui, rating);
        });
    });

    clicked
}
