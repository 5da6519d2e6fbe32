use eframe::egui;

use crate::egui_app::theme::colors;
use crate::shared::CatalogItem;

/// Poster placeholder: the title's initial on a tinted block. The image
/// reference is shown on hover.
pub fn render(ui: &mut egui::Ui, item: &CatalogItem, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(8), colors::POSTER_BG);

    let initial = item
        .title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(size.y * 0.3),
        colors::TEXT_LIGHT,
    );

    response.on_hover_text(&item.image_url)
}
