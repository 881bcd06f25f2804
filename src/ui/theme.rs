// Theme propagation
// Pushes the view state theme onto the rendering surface as a global attribute

use eframe::egui;
use tracing::debug;

use crate::state::Theme;

/// Root-level attribute key, the egui counterpart of `data-theme`
const THEME_ATTRIBUTE: &str = "data-theme";

/// Something that renders with a global theme attribute
pub trait ThemeSurface {
    /// Set the root theme attribute
    fn set_root_theme(&self, theme: Theme);
}

impl ThemeSurface for egui::Context {
    fn set_root_theme(&self, theme: Theme) {
        self.set_visuals(theme_visuals(theme));
        self.data_mut(|data| data.insert_temp(theme_attribute_id(), theme));
    }
}

fn theme_attribute_id() -> egui::Id {
    egui::Id::new(THEME_ATTRIBUTE)
}

/// Read the root theme attribute back from an egui context
pub fn root_theme(ctx: &egui::Context) -> Option<Theme> {
    ctx.data(|data| data.get_temp::<Theme>(theme_attribute_id()))
}

/// egui visuals for a theme
pub fn theme_visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Accent colors used by cards, pills and the brand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: egui::Color32,
    pub accent: egui::Color32,
    pub secondary: egui::Color32,
    pub error: egui::Color32,
    pub success: egui::Color32,
}

impl Palette {
    /// Palette tuned for the given theme's background
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                primary: egui::Color32::from_rgb(25, 118, 210),
                accent: egui::Color32::from_rgb(255, 152, 0),
                secondary: egui::Color32::from_rgb(66, 66, 66),
                error: egui::Color32::from_rgb(211, 47, 47),
                success: egui::Color32::from_rgb(46, 125, 50),
            },
            Theme::Dark => Self {
                primary: egui::Color32::from_rgb(100, 181, 246),
                accent: egui::Color32::from_rgb(255, 183, 77),
                secondary: egui::Color32::from_rgb(189, 189, 189),
                error: egui::Color32::from_rgb(239, 154, 154),
                success: egui::Color32::from_rgb(129, 199, 132),
            },
        }
    }
}

/// Keeps a surface in sync with the view state theme
/// Remembers what was last written so repeated syncs are no-ops
#[derive(Debug, Default)]
pub struct ThemeBinding {
    applied: Option<Theme>,
}

impl ThemeBinding {
    /// Create a binding that has not written anything yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `theme` to the surface if it differs from the last write
    /// Returns true when the surface was updated
    pub fn sync(&mut self, surface: &impl ThemeSurface, theme: Theme) -> bool {
        if self.applied == Some(theme) {
            return false;
        }
        debug!(theme = theme.attribute(), "Applying root theme attribute");
        surface.set_root_theme(theme);
        self.applied = Some(theme);
        true
    }
}
