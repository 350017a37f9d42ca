//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the header, the not-logged-in splash, and pages that need a user.
//! Login never reaches a server: the session simply holds whatever user record
//! the auth dialog synthesized, and logging out drops it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::types::User;

/// Which variant of the auth dialog is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    /// The other mode, used by the "switch to sign up / log in" link.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Join KindBite",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Log in",
            AuthMode::Signup => "Create account",
        }
    }
}

/// Authentication state tracking the current user and the auth dialog.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// Open auth dialog mode, `None` while the dialog is closed.
    pub dialog: Option<AuthMode>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn open_dialog(&mut self, mode: AuthMode) {
        log::debug!("auth dialog opened in {mode:?} mode");
        self.dialog = Some(mode);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Switch an open dialog to `mode`. No-op while the dialog is closed.
    pub fn change_mode(&mut self, mode: AuthMode) {
        if self.dialog.is_some() {
            self.dialog = Some(mode);
        }
    }

    /// Store the synthesized user and close the dialog.
    pub fn login(&mut self, user: User) {
        log::info!("user {} logged in via {}", user.username, user.login_method.as_str());
        self.user = Some(user);
        self.dialog = None;
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("user {} logged out", user.username);
        }
    }
}
