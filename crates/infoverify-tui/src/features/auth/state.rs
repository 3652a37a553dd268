//! Auth form state.

use infoverify_core::credentials::{AuthMode, Credentials};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AuthField::Email => "Enter your email",
            AuthField::Password => "Enter your password",
            AuthField::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn is_secret(self) -> bool {
        !matches!(self, AuthField::Email)
    }
}

const SIGN_IN_FIELDS: &[AuthField] = &[AuthField::Email, AuthField::Password];
const REGISTER_FIELDS: &[AuthField] = &[
    AuthField::Email,
    AuthField::Password,
    AuthField::ConfirmPassword,
];

#[derive(Debug, Clone, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    /// Applies to both password fields.
    pub show_password: bool,
    pub credentials: Credentials,
    pub focus: AuthField,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to a blank sign-in form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flips sign-in/register, clearing every field and hiding passwords.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.credentials.clear();
        self.show_password = false;
        self.focus = AuthField::Email;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Fields shown in the current mode, top to bottom.
    pub fn visible_fields(&self) -> &'static [AuthField] {
        if self.mode.is_register() {
            REGISTER_FIELDS
        } else {
            SIGN_IN_FIELDS
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Email => &self.credentials.email,
            AuthField::Password => &self.credentials.password,
            AuthField::ConfirmPassword => &self.credentials.confirm_password,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Email => &mut self.credentials.email,
            AuthField::Password => &mut self.credentials.password,
            AuthField::ConfirmPassword => &mut self.credentials.confirm_password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn insert_str(&mut self, s: &str) {
        let value = self.focused_value_mut();
        value.extend(s.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Whether `field` is currently rendered as bullets.
    pub fn is_masked(&self, field: AuthField) -> bool {
        field.is_secret() && !self.show_password
    }

    /// Completion after a successful registration: sign-in mode, empty fields.
    pub fn finish_registration(&mut self) {
        self.mode = AuthMode::SignIn;
        self.credentials.clear();
        self.focus = AuthField::Email;
    }
}
