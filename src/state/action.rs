// User actions
// Widgets report what happened as actions; the app applies them in order

use super::view_state::{AuthField, AuthView, ContactField, PageId, Theme, ViewState};

/// A user event that transitions the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nav bar or sidebar button
    Navigate(PageId),
    /// Theme toggle button
    ToggleTheme,
    /// Contact form input edited
    UpdateContact(ContactField, String),
    /// Contact form submitted
    SubmitContact,
    /// Login / signup link
    SwitchAuthView(AuthView),
    /// Auth form input edited
    UpdateAuth(AuthField, String),
    /// Auth form submitted
    SubmitAuth,
}

/// Result of applying one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Only the view state changed
    None,
    /// The theme changed and must reach the rendering surface
    ThemeChanged(Theme),
}

impl ViewState {
    /// Apply one action
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::ToggleTheme => return Effect::ThemeChanged(self.toggle_theme()),
            Action::UpdateContact(field, value) => self.update_contact_field(field, value),
            Action::SubmitContact => self.submit_contact(),
            Action::SwitchAuthView(view) => self.switch_auth_view(view),
            Action::UpdateAuth(field, value) => self.update_auth_field(field, value),
            Action::SubmitAuth => self.submit_auth(),
        }
        Effect::None
    }

    /// Apply actions in delivery order, returning the last theme change, if any
    pub fn apply_all<I>(&mut self, actions: I) -> Option<Theme>
    where
        I: IntoIterator<Item = Action>,
    {
        let mut theme_change = None;
        for action in actions {
            if let Effect::ThemeChanged(theme) = self.apply(action) {
                theme_change = Some(theme);
            }
        }
        theme_change
    }
}
