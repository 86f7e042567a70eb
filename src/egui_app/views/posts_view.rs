use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Feed interactions collected while iterating, applied afterwards so the
/// post list is not borrowed during state mutation.
enum PostAction {
    Like(i64),
    ToggleComments(i64),
    AddComment(i64),
    ToggleMisleading(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    let mut actions: Vec<PostAction> = Vec::new();
    let mut reload = false;
    let mut create = false;
    let mut dismiss_banner = false;

    let is_moderator = state.manager.is_moderator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(8.0);

        if let Some(ref banner) = state.status_banner {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.colored_label(colors::SUCCESS, banner);
                if ui.small_button("✕").clicked() {
                    dismiss_banner = true;
                }
            });
            ui.add_space(8.0);
        }

        // Create post form
        egui::Frame::default()
            .fill(colors::CARD_BG)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("New Post")
                        .size(16.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(6.0);
                ui.add(
                    egui::TextEdit::singleline(&mut state.new_post_title)
                        .hint_text("Title")
                        .desired_width(f32::INFINITY)
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(4.0);
                ui.add(
                    egui::TextEdit::multiline(&mut state.new_post_content)
                        .hint_text("What's on your mind?")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY)
                        .text_color(colors::TEXT_LIGHT),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let can_post = !state.is_creating_post;
                    if ui
                        .add_enabled(
                            can_post,
                            egui::Button::new(
                                egui::RichText::new("Post").color(colors::TEXT_LIGHT),
                            )
                            .fill(colors::ACCENT),
                        )
                        .clicked()
                    {
                        create = true;
                    }
                    if state.is_creating_post {
                        ui.spinner();
                    }
                });
            });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Latest Posts")
                    .size(16.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            if ui.small_button("⟳ Refresh").clicked() {
                reload = true;
            }
            if state.posts_loading {
                ui.spinner();
            }
        });
        ui.add_space(4.0);

        if let Some(ref error) = state.posts_error {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.colored_label(colors::ERROR, error);
                if ui.small_button("Retry").clicked() {
                    reload = true;
                }
            });
        }

        for i in 0..state.posts.len() {
            let post = state.posts[i].clone();
            let vibe = state.vibe(post.id);
            let expanded = state.is_comments_expanded(post.id);
            let liked = state.has_liked(post.id);

            egui::Frame::default()
                .fill(colors::CARD_BG)
                .inner_margin(egui::Margin::same(12))
                .outer_margin(egui::Margin::symmetric(8, 4))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&post.title)
                                .size(16.0)
                                .strong()
                                .color(colors::TEXT_LIGHT),
                        );
                        ui.label(format!("{} {}", vibe.emoji, vibe.label));
                        if post.is_misleading {
                            ui.colored_label(colors::WARNING, "⚠ misleading");
                        }
                    });
                    ui.colored_label(colors::TEXT_LIGHT, &post.content);
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!(
                            "by user #{} on {}",
                            post.author_id,
                            format_date(&post.created_at)
                        ),
                    );
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        let like_text = if liked {
                            format!("❤ {}", post.likes_count)
                        } else {
                            format!("♡ {}", post.likes_count)
                        };
                        if ui.add_enabled(!liked, egui::Button::new(like_text)).clicked() {
                            actions.push(PostAction::Like(post.id));
                        }

                        let comments_text = format!("💬 {} comments", post.comments.len());
                        if ui.button(comments_text).clicked() {
                            actions.push(PostAction::ToggleComments(post.id));
                        }

                        if is_moderator {
                            let label = if post.is_misleading {
                                "Mark accurate"
                            } else {
                                "Mark misleading"
                            };
                            if ui.button(label).clicked() {
                                actions.push(PostAction::ToggleMisleading(post.id));
                            }
                        }
                    });

                    if expanded {
                        ui.add_space(6.0);
                        for comment in &post.comments {
                            egui::Frame::default()
                                .fill(colors::COMMENT_BG)
                                .inner_margin(egui::Margin::same(8))
                                .show(ui, |ui| {
                                    ui.colored_label(colors::TEXT_LIGHT, &comment.content);
                                    ui.colored_label(
                                        colors::TEXT_SECONDARY,
                                        format!(
                                            "user #{} · {}",
                                            comment.author_id,
                                            format_date(&comment.created_at)
                                        ),
                                    );
                                });
                        }

                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            let input = state.new_comment_inputs.entry(post.id).or_default();
                            ui.add(
                                egui::TextEdit::singleline(input)
                                    .hint_text("Add a comment")
                                    .desired_width(300.0)
                                    .text_color(colors::TEXT_LIGHT),
                            );
                            if ui.button("Comment").clicked() {
                                actions.push(PostAction::AddComment(post.id));
                            }
                        });
                    }
                });
        }

        if state.posts.is_empty() && !state.posts_loading && state.posts_error.is_none() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "No posts yet. Start the conversation!");
            });
        }

        ui.add_space(12.0);
    });

    if dismiss_banner {
        state.status_banner = None;
    }
    if reload {
        state.load_posts();
    }
    if create {
        state.create_post();
    }
    for action in actions {
        match action {
            PostAction::Like(id) => state.like_post(id),
            PostAction::ToggleComments(id) => state.toggle_comments(id),
            PostAction::AddComment(id) => state.add_comment(id),
            PostAction::ToggleMisleading(id) => state.toggle_misleading(id),
        }
    }
}

fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
