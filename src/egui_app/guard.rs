//! Route access guard
//!
//! The gate in front of authenticated views. It only asks the session
//! manager a yes/no question; it never mutates session state and never
//! touches the network, so it is safe to run on every frame.

use crate::egui_app::session::SessionManager;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow,
    /// Send the user back to the login view.
    RedirectToLogin,
}

/// Decide whether the current session may enter a guarded view.
pub fn check_access(manager: &SessionManager) -> GuardDecision {
    if manager.is_logged_in() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}
