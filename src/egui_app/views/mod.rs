use eframe::egui;

use crate::egui_app::guard::{self, GuardDecision};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

pub mod auth_view;
pub mod posts_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📋 Vibe Forum").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.session.user {
                            if user.role == crate::shared::user::UserRole::Moderator {
                                ui.colored_label(colors::WARNING, "moderator");
                            }
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    // The posts view is guarded: the session manager is asked before every
    // render, so an expired token bounces back to login without a server
    // round trip.
    if state.current_view == AppView::Posts
        && guard::check_access(&state.manager) == GuardDecision::RedirectToLogin
    {
        state.current_view = AppView::Login;
    }

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login => auth_view::render(ui, state),
            AppView::Posts => posts_view::render(ui, state),
        });
}
