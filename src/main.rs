// UI Shell - Main Entry Point
// Native single-window page shell: top bar, sidebar, dashboard, forms

mod config;
mod error;
mod state;
mod ui;

use chrono::Datelike;
use eframe::egui;
use tracing::{info, warn};

use config::Config;
use state::{Action, PageId, ViewState};
use ui::{render_app_layout, ThemeBinding, ThemeSurface};

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        Config::default()
    });
    info!("Configuration loaded: {:?}", config);

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size(config.min_window_size()),
        // The view state owns the theme, not the OS
        follow_system_theme: false,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|cc| {
            let mut app = ShellApp::new();
            // Theme attribute must be on the root before the first frame
            app.mount(&cc.egui_ctx);
            Box::new(app)
        }),
    )
}

/// Main application struct
/// Owns the view state and keeps the surface theme in sync with it
struct ShellApp {
    /// The single view state instance
    state: ViewState,
    /// Last theme written to the rendering surface
    theme: ThemeBinding,
}

impl ShellApp {
    /// Create a new application instance
    fn new() -> Self {
        Self {
            state: ViewState::new(),
            theme: ThemeBinding::new(),
        }
    }

    /// Write the initial theme to the surface
    fn mount(&mut self, surface: &impl ThemeSurface) {
        self.theme.sync(surface, self.state.theme);
    }

    /// Apply a frame's actions in order and propagate any theme change
    /// Returns true when the contact form was just opened and wants focus
    fn dispatch(&mut self, surface: &impl ThemeSurface, actions: Vec<Action>) -> bool {
        let opened_form = actions
            .iter()
            .any(|action| *action == Action::Navigate(PageId::Form));
        if let Some(theme) = self.state.apply_all(actions) {
            self.theme.sync(surface, theme);
        }
        opened_form && self.state.page == PageId::Form
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let year = chrono::Local::now().year();
        let actions = render_app_layout(ctx, &self.state, year);
        if !actions.is_empty() {
            if self.dispatch(ctx, actions) {
                ui::panels::focus_contact_form(ctx);
            }
            // Redraw right away so the new state is visible without further input
            ctx.request_repaint();
        }
    }
}
