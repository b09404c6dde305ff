//! Authentication seam
//!
//! The auth screen hands its request to an [`Authenticator`]. The only
//! implementation shipped here accepts everything; a real backend plugs in
//! behind the same trait.

use anyhow::Result;

use crate::model::auth::{AuthMode, AuthRequest, SocialProvider};
use crate::model::session::{AuthMethod, SessionUser};

pub trait Authenticator {
    fn authenticate(&self, request: &AuthRequest) -> Result<SessionUser>;
}

/// Signs in any request, including empty credentials
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllAuthenticator;

impl Authenticator for AcceptAllAuthenticator {
    fn authenticate(&self, request: &AuthRequest) -> Result<SessionUser> {
        let user = match request {
            AuthRequest::Credentials { mode, email, .. } => SessionUser {
                display_name: if email.trim().is_empty() {
                    "guest".to_string()
                } else {
                    email.trim().to_string()
                },
                method: match mode {
                    AuthMode::Login => AuthMethod::Password,
                    AuthMode::Register => AuthMethod::Registration,
                },
            },
            AuthRequest::Social(provider) => SessionUser {
                display_name: format!("{} account", provider.label()),
                method: match provider {
                    SocialProvider::Google => AuthMethod::Google,
                    SocialProvider::Facebook => AuthMethod::Facebook,
                },
            },
        };
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_accepted() {
        let request = AuthRequest::Credentials {
            mode: AuthMode::Login,
            email: String::new(),
            password: String::new(),
        };
        let user = AcceptAllAuthenticator.authenticate(&request).unwrap();
        assert_eq!(user.display_name, "guest");
        assert_eq!(user.method, AuthMethod::Password);
    }

    #[test]
    fn test_registration_method() {
        let request = AuthRequest::Credentials {
            mode: AuthMode::Register,
            email: " new@example.com ".to_string(),
            password: "x".to_string(),
        };
        let user = AcceptAllAuthenticator.authenticate(&request).unwrap();
        assert_eq!(user.display_name, "new@example.com");
        assert_eq!(user.method, AuthMethod::Registration);
    }

    #[test]
    fn test_social_login() {
        for (provider, method) in [
            (SocialProvider::Google, AuthMethod::Google),
            (SocialProvider::Facebook, AuthMethod::Facebook),
        ] {
            let user = AcceptAllAuthenticator
                .authenticate(&AuthRequest::Social(provider))
                .unwrap();
            assert_eq!(user.method, method);
        }
    }
}
