//! Main Search Layout
//!
//! Lays out the lookup widget top to bottom: input, recent searches, search
//! button, inline error, contact card.

use eframe::egui;
use super::components::{contact_card, recent_searches, search_bar};
use super::state::SearchController;
use crate::egui_app::theme::{colors, styles};

/// Widget width in pixels
const WIDGET_WIDTH: f32 = 480.0;

/// Render the lookup widget
pub fn render_search_view(ui: &mut egui::Ui, controller: &mut SearchController) {
    // Apply a finished lookup, if any
    controller.poll();

    if controller.is_loading() {
        // Keep polling until the worker reports back
        ui.ctx().request_repaint();
    }

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.set_max_width(WIDGET_WIDTH);

        styles::panel_frame().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                search_bar::render(ui, controller);
                ui.add_space(8.0);

                recent_searches::render(ui, controller);
                ui.add_space(8.0);

                search_bar::render_search_button(ui, controller);

                if let Some(message) = controller.state().message() {
                    ui.add_space(8.0);
                    ui.colored_label(colors::ERROR, message);
                }

                if let Some(contact) = controller.state().contact() {
                    ui.add_space(12.0);
                    contact_card::render(ui, contact);
                }
            });
        });
    });
}
