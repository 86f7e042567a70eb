//! Shared types for the egui app
//!
//! Small enums describing which screen is showing. The heavier state lives
//! in `state::AppState`.

/// Current app view, mirroring the two routes of the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login / registration screen
    Login,
    /// Guarded posts feed
    Posts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_view_variants() {
        assert_eq!(AppView::Login, AppView::Login);
        assert_ne!(AppView::Login, AppView::Posts);
    }
}
