//! Search Bar Component
//!
//! The email input and the search button.

use eframe::egui;
use crate::egui_app::search::state::SearchController;
use crate::egui_app::theme::colors;

/// Render the labelled email input
///
/// Pressing Enter in the field submits the search.
pub fn render(ui: &mut egui::Ui, controller: &mut SearchController) {
    ui.colored_label(colors::TEXT_LIGHT, "Contact Email");
    ui.add_space(4.0);

    let enabled = !controller.is_loading();
    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut controller.input)
            .hint_text("Enter email address")
            .text_color(colors::TEXT_DARK)
            .desired_width(ui.available_width()),
    );

    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        controller.search(None);
    }
}

/// Render the search button
///
/// Disabled while the input is empty or a lookup is in flight.
pub fn render_search_button(ui: &mut egui::Ui, controller: &mut SearchController) {
    let label = if controller.is_loading() {
        "Searching..."
    } else {
        "Search"
    };

    let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_PRIMARY);

    if ui.add_enabled(controller.can_submit(), button).clicked() {
        controller.search(None);
    }
}
