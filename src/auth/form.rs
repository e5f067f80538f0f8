//! Admin sign-in / registration form state.
//!
//! The form follows a request/await/settle cycle: `submit` validates and
//! marks the form in flight, the caller performs the request, and `settle`
//! always clears the in-flight flag whatever the outcome.

use super::client::{AuthMode, AuthRequest, AuthResponse};
use super::error::AuthError;
use crate::utils::TextInput;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Submit,
    SwitchMode,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Submit => "Submit",
            Field::SwitchMode => "Switch",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Field::Submit | Field::SwitchMode)
    }
}

/// Result of pressing the submit button.
#[derive(Debug)]
pub enum Submission {
    /// A request is already running; nothing happened
    InFlight,
    /// Client-side validation failed; no request sent
    Invalid(AuthError),
    /// Send this request, then call [`AuthForm::settle`]
    Ready(AuthMode, AuthRequest),
}

/// What a settled request means for the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    LoggedIn { username: String, token: String },
    /// Registration went through; the form is back in login mode
    Registered,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    pub username: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    focus: Field,
    in_flight: bool,
    /// Last failure, shown under the form
    error: Option<String>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            username: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
            confirm_password: TextInput::masked(),
            focus: Field::Username,
            in_flight: false,
            error: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fields in tab order for the current mode.
    pub fn fields(&self) -> Vec<Field> {
        match self.mode {
            AuthMode::Login => vec![
                Field::Username,
                Field::Password,
                Field::Submit,
                Field::SwitchMode,
            ],
            AuthMode::Register => vec![
                Field::Username,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Submit,
                Field::SwitchMode,
            ],
        }
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            debug!(?mode, "Auth form mode changed");
        }
        self.mode = mode;
        self.focus = Field::Username;
        self.error = None;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_focus(&mut self, field: Field) {
        if self.fields().contains(&field) {
            self.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// The text input under focus, if focus is on a text field.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Field::Username => Some(&mut self.username),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Submit | Field::SwitchMode => None,
        }
    }

    pub fn input(&self, field: Field) -> Option<&TextInput> {
        match field {
            Field::Username => Some(&self.username),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Submit | Field::SwitchMode => None,
        }
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.username.is_empty() {
            return Err(AuthError::validation("Username is required"));
        }
        if self.mode == AuthMode::Register {
            if self.email.is_empty() {
                return Err(AuthError::validation("Email is required"));
            }
            if !self.email.text_trimmed().contains('@') {
                return Err(AuthError::validation("Please enter a valid email address"));
            }
        }
        if self.password.text().is_empty() {
            return Err(AuthError::validation("Password is required"));
        }
        if self.mode == AuthMode::Register && self.password.text() != self.confirm_password.text()
        {
            return Err(AuthError::validation("Passwords do not match"));
        }
        Ok(())
    }

    /// Validate and, if valid, mark the form in flight.
    pub fn submit(&mut self) -> Submission {
        if self.in_flight {
            debug!("Submit ignored while a request is in flight");
            return Submission::InFlight;
        }
        if let Err(err) = self.validate() {
            warn!(error = %err, "Auth form validation failed");
            self.error = Some(err.to_string());
            return Submission::Invalid(err);
        }
        self.error = None;
        self.in_flight = true;
        Submission::Ready(
            self.mode,
            AuthRequest {
                username: self.username.text_trimmed().to_string(),
                email: self.email.text_trimmed().to_string(),
                password: self.password.text().to_string(),
            },
        )
    }

    /// Apply the outcome of the request started by `submit`.
    pub fn settle(&mut self, result: Result<AuthResponse, AuthError>) -> Settled {
        self.in_flight = false;
        match result {
            Ok(response) => match self.mode {
                AuthMode::Login => {
                    self.password.clear();
                    Settled::LoggedIn {
                        username: self.username.text_trimmed().to_string(),
                        token: response.token.unwrap_or_default(),
                    }
                }
                AuthMode::Register => {
                    self.confirm_password.clear();
                    self.set_mode(AuthMode::Login);
                    Settled::Registered
                }
            },
            Err(err) => {
                let message = err.to_string();
                self.error = Some(message.clone());
                Settled::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: AuthMode) -> AuthForm {
        let mut form = AuthForm::new(mode);
        form.username.set_text("admin");
        form.email.set_text("admin@assimox.com");
        form.password.set_text("secret");
        form.confirm_password.set_text("secret");
        form
    }

    #[test]
    fn test_mismatched_passwords_send_nothing() {
        let mut form = filled(AuthMode::Register);
        form.confirm_password.set_text("other");
        match form.submit() {
            Submission::Invalid(err) => assert_eq!(err.to_string(), "Passwords do not match"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!form.is_in_flight());
        assert_eq!(form.error(), Some("Passwords do not match"));
    }

    #[test]
    fn test_email_typed_while_registering_is_sent_on_login() {
        let mut form = AuthForm::new(AuthMode::Register);
        form.email.set_text("admin@assimox.com");
        form.toggle_mode();
        form.username.set_text("admin");
        form.password.set_text("secret");
        let Submission::Ready(AuthMode::Login, req) = form.submit() else {
            panic!("expected a login request");
        };
        assert_eq!(req.email, "admin@assimox.com");

        let mut fresh = AuthForm::new(AuthMode::Login);
        fresh.username.set_text("admin");
        fresh.password.set_text("secret");
        let Submission::Ready(_, req) = fresh.submit() else {
            panic!("expected a login request");
        };
        assert_eq!(req.email, "");
    }

    #[test]
    fn test_required_fields() {
        let mut form = AuthForm::new(AuthMode::Login);
        assert!(matches!(form.submit(), Submission::Invalid(_)));
        assert_eq!(form.error(), Some("Username is required"));
        form.username.set_text("admin");
        form.submit();
        assert_eq!(form.error(), Some("Password is required"));

        let mut form = filled(AuthMode::Register);
        form.email.clear();
        form.submit();
        assert_eq!(form.error(), Some("Email is required"));
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut form = filled(AuthMode::Login);
        let Submission::Ready(mode, req) = form.submit() else {
            panic!("expected a request");
        };
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(req.email, "admin@assimox.com");
        assert!(form.is_in_flight());
        assert!(matches!(form.submit(), Submission::InFlight));
    }

    #[test]
    fn test_settle_clears_in_flight_on_failure() {
        let mut form = filled(AuthMode::Login);
        form.submit();
        let settled = form.settle(Err(AuthError::Status { status: 500 }));
        assert!(!form.is_in_flight());
        assert_eq!(
            settled,
            Settled::Failed("Authentication failed (HTTP 500)".into())
        );
        assert!(form.error().is_some());
    }

    #[test]
    fn test_successful_registration_switches_to_login() {
        let mut form = filled(AuthMode::Register);
        form.submit();
        let settled = form.settle(Ok(AuthResponse::default()));
        assert_eq!(settled, Settled::Registered);
        assert_eq!(form.mode(), AuthMode::Login);
        assert!(!form.is_in_flight());
        assert_eq!(form.username.text(), "admin");
    }

    #[test]
    fn test_successful_login_returns_token() {
        let mut form = filled(AuthMode::Login);
        form.submit();
        let settled = form.settle(Ok(AuthResponse {
            token: Some("tok".into()),
            message: None,
        }));
        assert_eq!(
            settled,
            Settled::LoggedIn {
                username: "admin".into(),
                token: "tok".into()
            }
        );
        assert!(form.password.text().is_empty());
    }

    #[test]
    fn test_tab_order_wraps_per_mode() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.focus_prev();
        assert_eq!(form.focus(), Field::SwitchMode);
        form.focus_next();
        assert_eq!(form.focus(), Field::Username);
        form.set_focus(Field::Email);
        assert_eq!(form.focus(), Field::Username);
        form.toggle_mode();
        form.focus_next();
        assert_eq!(form.focus(), Field::Email);
    }
}
