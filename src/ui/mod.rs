// UI module
// Contains layout, panels, components, view models and theme propagation

pub mod components;
pub mod layout;
pub mod panels;
pub mod theme;
pub mod view_model;

pub use layout::render_app_layout;
pub use theme::{ThemeBinding, ThemeSurface};
