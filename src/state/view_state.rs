// View state management
// Contains the current page, theme, both forms and their messages

use tracing::{debug, info};

/// Message shown after a complete contact form submission
pub const CONTACT_SUCCESS: &str = "Form submitted successfully!";
/// Message shown when a contact form field is missing
pub const CONTACT_INCOMPLETE: &str = "Please fill out all fields.";
/// Message shown when the auth form passes validation
pub const AUTH_NOT_CONNECTED: &str = "Authentication not yet connected to backend.";
/// Error shown when an auth form field is missing
pub const AUTH_FIELDS_REQUIRED: &str = "Both fields are required.";

/// Top-level panel shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    /// Static informational cards
    #[default]
    Dashboard,
    /// Sample contact form
    Form,
    /// Login / signup form
    Auth,
}

impl PageId {
    /// All pages, in navigation order
    pub const ALL: [PageId; 3] = [PageId::Dashboard, PageId::Form, PageId::Auth];

    /// Label used by the navigation bar and sidebar
    pub fn label(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Form => "Form",
            PageId::Auth => "Auth",
        }
    }

    /// Glyph shown next to the sidebar label
    pub fn icon(self) -> &'static str {
        match self {
            PageId::Dashboard => "📊",
            PageId::Form => "📝",
            PageId::Auth => "🔒",
        }
    }
}

/// Two-valued display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the root `data-theme` attribute
    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Sub-view of the auth panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

impl AuthView {
    /// The other sub-view
    pub fn other(self) -> Self {
        match self {
            AuthView::Login => AuthView::Signup,
            AuthView::Signup => AuthView::Login,
        }
    }

    /// Heading and submit button label
    pub fn title(self) -> &'static str {
        match self {
            AuthView::Login => "Login",
            AuthView::Signup => "Sign Up",
        }
    }
}

/// Contact form field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
}

/// Auth form field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Username,
    Password,
}

/// Contact form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

impl ContactForm {
    /// True when every field has non-whitespace content
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Auth form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
}

impl AuthForm {
    /// True when every field has non-whitespace content
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }
}

/// Main view state
/// Single instance owned by the application, mutated only through the
/// transition methods below
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Panel shown in the content area
    pub page: PageId,
    /// Current display theme
    pub theme: Theme,
    /// Contact form values
    pub contact_form: ContactForm,
    /// Status message line. Shared by the contact and auth forms.
    pub contact_message: String,
    /// Login or signup
    pub auth_view: AuthView,
    /// Auth form values
    pub auth_form: AuthForm,
    /// Auth validation error
    pub auth_error: String,
}

impl ViewState {
    /// Create a new view state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `target` and clear both transient messages
    pub fn navigate(&mut self, target: PageId) {
        debug!(from = ?self.page, to = ?target, "Navigate");
        self.page = target;
        self.contact_message.clear();
        self.auth_error.clear();
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = self.theme.attribute(), "Theme changed");
        self.theme
    }

    /// Overwrite one contact form field
    pub fn update_contact_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact_form.name = value,
            ContactField::Email => self.contact_form.email = value,
        }
    }

    /// Validate the contact form and set the status message
    /// Fields are cleared only on success
    pub fn submit_contact(&mut self) {
        if self.contact_form.is_complete() {
            debug!("Contact form submitted");
            self.contact_message = CONTACT_SUCCESS.to_string();
            self.contact_form = ContactForm::default();
        } else {
            self.contact_message = CONTACT_INCOMPLETE.to_string();
        }
    }

    /// Select the login or signup sub-view
    pub fn switch_auth_view(&mut self, target: AuthView) {
        self.auth_view = target;
    }

    /// Overwrite one auth form field
    pub fn update_auth_field(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Username => self.auth_form.username = value,
            AuthField::Password => self.auth_form.password = value,
        }
    }

    /// Validate the auth form
    /// No credentials are checked. A complete form only reports that there
    /// is no backend, on the shared status message line.
    pub fn submit_auth(&mut self) {
        if self.auth_form.is_complete() {
            debug!(view = ?self.auth_view, "Auth form accepted");
            self.auth_error.clear();
            self.contact_message = AUTH_NOT_CONNECTED.to_string();
        } else {
            self.auth_error = AUTH_FIELDS_REQUIRED.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_messages() -> ViewState {
        let mut state = ViewState::new();
        state.contact_message = CONTACT_INCOMPLETE.to_string();
        state.auth_error = AUTH_FIELDS_REQUIRED.to_string();
        state
    }

    #[test]
    fn test_view_state_defaults() {
        let state = ViewState::new();
        assert_eq!(state.page, PageId::Dashboard);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.auth_view, AuthView::Login);
        assert!(state.contact_form.name.is_empty());
        assert!(state.contact_form.email.is_empty());
        assert!(state.auth_form.username.is_empty());
        assert!(state.auth_form.password.is_empty());
        assert!(state.contact_message.is_empty());
        assert!(state.auth_error.is_empty());
    }

    #[test]
    fn test_navigate_sets_page_and_clears_messages() {
        for target in PageId::ALL {
            let mut state = state_with_messages();
            state.navigate(target);
            assert_eq!(state.page, target);
            assert!(state.contact_message.is_empty());
            assert!(state.auth_error.is_empty());
        }
    }

    #[test]
    fn test_navigate_to_current_page_still_clears() {
        let mut state = state_with_messages();
        state.navigate(PageId::Dashboard);
        assert!(state.contact_message.is_empty());
        assert!(state.auth_error.is_empty());
    }

    #[test]
    fn test_navigate_keeps_form_values() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Name, "Alice".to_string());
        state.update_auth_field(AuthField::Username, "u".to_string());
        state.navigate(PageId::Auth);
        assert_eq!(state.contact_form.name, "Alice");
        assert_eq!(state.auth_form.username, "u");
    }

    #[test]
    fn test_toggle_theme_is_its_own_inverse() {
        let mut state = ViewState::new();
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.theme.attribute(), "light");

        state.theme = Theme::Dark;
        state.toggle_theme();
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_update_contact_field_leaves_other_untouched() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Email, "a@b.com".to_string());
        state.update_contact_field(ContactField::Name, "Alice".to_string());
        state.update_contact_field(ContactField::Name, "Bob".to_string());
        assert_eq!(state.contact_form.name, "Bob");
        assert_eq!(state.contact_form.email, "a@b.com");
    }

    #[test]
    fn test_submit_contact_success_resets_fields() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Name, "Alice".to_string());
        state.update_contact_field(ContactField::Email, "a@b.com".to_string());
        state.submit_contact();
        assert_eq!(state.contact_message, CONTACT_SUCCESS);
        assert_eq!(state.contact_form, ContactForm::default());
    }

    #[test]
    fn test_submit_contact_missing_name_keeps_fields() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Email, "x@x.com".to_string());
        state.submit_contact();
        assert_eq!(state.contact_message, CONTACT_INCOMPLETE);
        assert_eq!(state.contact_form.name, "");
        assert_eq!(state.contact_form.email, "x@x.com");
    }

    #[test]
    fn test_submit_contact_whitespace_is_empty() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Name, "   ".to_string());
        state.update_contact_field(ContactField::Email, "a@b.com".to_string());
        state.submit_contact();
        assert_eq!(state.contact_message, CONTACT_INCOMPLETE);
        assert_eq!(state.contact_form.name, "   ");
    }

    #[test]
    fn test_submit_contact_does_not_validate_email_format() {
        let mut state = ViewState::new();
        state.update_contact_field(ContactField::Name, "Alice".to_string());
        state.update_contact_field(ContactField::Email, "not an email".to_string());
        state.submit_contact();
        assert_eq!(state.contact_message, CONTACT_SUCCESS);
    }

    #[test]
    fn test_submit_auth_missing_password() {
        let mut state = ViewState::new();
        state.contact_message = "previous".to_string();
        state.update_auth_field(AuthField::Username, "u".to_string());
        state.submit_auth();
        assert_eq!(state.auth_error, AUTH_FIELDS_REQUIRED);
        assert_eq!(state.contact_message, "previous");
        assert_eq!(state.auth_form.username, "u");
    }

    #[test]
    fn test_submit_auth_complete_uses_shared_message() {
        let mut state = ViewState::new();
        state.auth_error = AUTH_FIELDS_REQUIRED.to_string();
        state.update_auth_field(AuthField::Username, "u".to_string());
        state.update_auth_field(AuthField::Password, "p".to_string());
        state.submit_auth();
        assert_eq!(state.auth_error, "");
        assert_eq!(state.contact_message, AUTH_NOT_CONNECTED);
        // Values are kept, unlike the contact form
        assert_eq!(state.auth_form.password, "p");
    }

    #[test]
    fn test_submit_auth_whitespace_is_empty() {
        let mut state = ViewState::new();
        state.update_auth_field(AuthField::Username, "u".to_string());
        state.update_auth_field(AuthField::Password, " \t ".to_string());
        state.submit_auth();
        assert_eq!(state.auth_error, AUTH_FIELDS_REQUIRED);
        assert!(state.contact_message.is_empty());
    }

    #[test]
    fn test_switch_auth_view_alternates() {
        let mut state = ViewState::new();
        for start in [AuthView::Login, AuthView::Signup] {
            state.switch_auth_view(start);
            state.switch_auth_view(state.auth_view.other());
            assert_ne!(state.auth_view, start);
            state.switch_auth_view(state.auth_view.other());
            assert_eq!(state.auth_view, start);
        }
    }

    #[test]
    fn test_switch_auth_view_keeps_values_and_error() {
        let mut state = ViewState::new();
        state.update_auth_field(AuthField::Username, "u".to_string());
        state.submit_auth();
        state.switch_auth_view(AuthView::Signup);
        assert_eq!(state.auth_view, AuthView::Signup);
        assert_eq!(state.auth_form.username, "u");
        assert_eq!(state.auth_error, AUTH_FIELDS_REQUIRED);
    }
}
