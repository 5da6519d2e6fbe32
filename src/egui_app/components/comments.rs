//! Comment Components
//!
//! The draft box with its Post button, and the list of posted comments.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::Comment;

/// Draft box; returns true when Post was clicked
pub fn render_field(ui: &mut egui::Ui, draft: &mut String, error: Option<&str>) -> bool {
    ui.add(
        egui::TextEdit::multiline(draft)
            .hint_text("Type a comment...")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    if let Some(error) = error {
        ui.colored_label(colors::ERROR, error);
    }

    let mut post = false;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        post = ui.add(styles::primary_button("Post")).clicked();
    });
    post
}

pub fn render_comment(ui: &mut egui::Ui, comment: &Comment) {
    styles::comment_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("👤").size(28.0).color(colors::TEXT_SECONDARY));
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&comment.author).strong().color(colors::TEXT_DARK));
                    ui.label(
                        egui::RichText::new(comment.posted_at.with_timezone(&chrono::Local).format("%d %b %H:%M").to_string())
                            .small()
                            .color(colors::TEXT_SECONDARY),
                    );
                });
                ui.add(egui::Label::new(egui::RichText::new(&comment.body).color(colors::TEXT_DARK)).wrap());
            });
        });
    });
}

pub fn render_list(ui: &mut egui::Ui, comments: &[Comment]) {
    if comments.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No comments yet");
        return;
    }
    for comment in comments {
        render_comment(ui, comment);
        ui.add_space(6.0);
    }
}
