/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the contact lookup desktop application.
 * It implements eframe::App and renders the lookup widget.
 */
use eframe::egui;
use contact_lookup::egui_app::{theme::styles, views, AppState};

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contact Lookup",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(LookupApp::default()))
        }),
    )
}

/// Main application state
struct LookupApp {
    state: AppState,
}

impl Default for LookupApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for LookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &self.state);

        views::render_main_panel(ctx, &mut self.state);
    }
}
