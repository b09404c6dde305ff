//! Auth screen orchestration methods

use foodmatch::model::auth::{AuthField, AuthRequest, SocialProvider};

use crate::App;

impl App {
    /// Press whatever has focus on the auth screen
    pub(crate) fn activate_auth_focus(&mut self) {
        match self.model.auth.focus {
            // Enter inside a text field submits the form
            AuthField::Email | AuthField::Password | AuthField::Submit => {
                let request = self.model.auth.submission();
                self.sign_in(request);
            }
            AuthField::ToggleMode => self.model.auth.toggle_mode(),
            AuthField::Google => self.sign_in(AuthRequest::Social(SocialProvider::Google)),
            AuthField::Facebook => self.sign_in(AuthRequest::Social(SocialProvider::Facebook)),
        }
    }

    pub(crate) fn sign_in(&mut self, request: AuthRequest) {
        self.model.authenticate(self.authenticator.as_ref(), request);
    }

    pub(crate) fn logout(&mut self) {
        self.change_route(|model| model.logout());
    }
}
