//! Auth Screen Model
//!
//! Form state for the sign-in / registration screen.

use super::types::TextInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

/// What the user asked the authenticator to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Credentials {
        mode: AuthMode,
        email: String,
        password: String,
    },
    Social(SocialProvider),
}

/// Focusable items on the auth screen, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    Submit,
    ToggleMode,
    Google,
    Facebook,
}

impl AuthField {
    const ORDER: [AuthField; 6] = [
        AuthField::Email,
        AuthField::Password,
        AuthField::Submit,
        AuthField::ToggleMode,
        AuthField::Google,
        AuthField::Facebook,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, AuthField::Email | AuthField::Password)
    }
}

#[derive(Clone, Debug)]
pub struct AuthModel {
    pub mode: AuthMode,
    pub email: TextInput,
    pub password: TextInput,
    pub focus: AuthField,
}

impl Default for AuthModel {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            email: TextInput::default(),
            password: TextInput::default(),
            focus: AuthField::Email,
        }
    }
}

impl AuthModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text field under the cursor, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            AuthField::Email => Some(&mut self.email),
            AuthField::Password => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Form submission; field contents are passed through untouched
    pub fn submission(&self) -> AuthRequest {
        AuthRequest::Credentials {
            mode: self.mode,
            email: self.email.as_str().to_string(),
            password: self.password.as_str().to_string(),
        }
    }
}
