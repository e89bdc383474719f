//! Recent Searches Component
//!
//! One button per remembered email; clicking it searches that email again.

use eframe::egui;
use crate::egui_app::search::state::SearchController;
use crate::egui_app::theme::colors;

/// Render the recent searches row, nothing when the list is empty
pub fn render(ui: &mut egui::Ui, controller: &mut SearchController) {
    if controller.recent().is_empty() {
        return;
    }

    let mut clicked: Option<String> = None;

    ui.horizontal_wrapped(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, "Recent searches:");

        for email in controller.recent().iter() {
            let button = egui::Button::new(egui::RichText::new(email).color(colors::TEXT_DARK))
                .fill(colors::BUTTON_SECONDARY);
            if ui.add(button).clicked() {
                clicked = Some(email.to_string());
            }
        }
    });

    // Apply the click after the loop
    if let Some(email) = clicked {
        controller.search(Some(&email));
    }
}
