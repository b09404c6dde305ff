//! Session Model
//!
//! Who (if anyone) is signed in. Starts anonymous, is populated by the
//! authenticator and cleared again by an explicit logout.

/// How the current session was opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    Password,
    Registration,
    Google,
    Facebook,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Password => "password",
            AuthMethod::Registration => "registration",
            AuthMethod::Google => "Google",
            AuthMethod::Facebook => "Facebook",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Name shown in greetings (email or provider account)
    pub display_name: String,
    pub method: AuthMethod,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    /// Anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn begin(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// Tear down; returns the user that was signed in
    pub fn end(&mut self) -> Option<SessionUser> {
        self.user.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_begin_and_end() {
        let mut session = Session::new();
        session.begin(SessionUser {
            display_name: "anna@example.com".to_string(),
            method: AuthMethod::Password,
        });
        assert!(session.is_authenticated());

        let ended = session.end().unwrap();
        assert_eq!(ended.display_name, "anna@example.com");
        assert!(!session.is_authenticated());
        assert!(session.end().is_none());
    }
}
