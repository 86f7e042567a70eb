//! Native desktop app entry point
//!
//! Boots logging, then hands the UI loop to eframe. Everything interesting
//! lives in `AppState`; this file only wires it to the window.

use eframe::egui;
use tracing_subscriber::EnvFilter;
use vibeforum::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Vibe Forum",
        options,
        Box::new(|_cc| Ok(Box::new(ForumApp::default()))),
    )
}

/// Main application shell
struct ForumApp {
    state: AppState,
}

impl Default for ForumApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for ForumApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.process_events();

        views::render_top_bar(ctx, &mut self.state, frame);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
