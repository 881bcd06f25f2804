// State management module
// Handles the view state and the actions that transition it

pub mod action;
pub mod view_state;

pub use action::Action;
pub use view_state::{AuthField, AuthView, ContactField, PageId, Theme, ViewState};
