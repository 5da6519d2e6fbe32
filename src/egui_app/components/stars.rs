//! Star Rating Component
//!
//! Interactive stars on catalog cards and the read-only row on the detail page.

use eframe::egui;

use crate::egui_app::rating::{StarRating, STAR_COUNT};
use crate::egui_app::theme::colors;

const STAR: &str = "★";
const STAR_SIZE: f32 = 22.0;

fn star_text(filled: bool) -> egui::RichText {
    let color = if filled { colors::STAR_FILLED } else { colors::STAR_EMPTY };
    egui::RichText::new(STAR).size(STAR_SIZE).color(color)
}

/// Clickable stars; clicking star `n` sets the rating to `n`
///
/// Returns true if the rating changed this frame.
pub fn render_interactive(ui: &mut egui::Ui, rating: &mut StarRating) -> bool {
    let mut hovered = 0;
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for index in 1..=STAR_COUNT {
            let response = ui
                .add(egui::Label::new(star_text(rating.is_filled(index))).sense(egui::Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.hovered() {
                hovered = index;
            }
            if response.clicked() && rating.value() != index {
                rating.set(index);
                changed = true;
            }
        }
    });

    rating.set_hover(hovered);
    changed
}

/// Fixed stars showing `value` out of `STAR_COUNT`
pub fn render_stable(ui: &mut egui::Ui, value: u8) {
    let rating = StarRating::new(value);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for index in 1..=STAR_COUNT {
            ui.label(star_text(rating.is_filled(index)));
        }
    });
}
