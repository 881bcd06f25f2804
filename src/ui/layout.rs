// Main application layout
// Handles the top bar, sidebar, content area and footer

use eframe::egui;

use crate::state::{Action, ViewState};
use crate::ui::components::nav_button;
use crate::ui::panels::render_panel;
use crate::ui::theme::Palette;
use crate::ui::view_model::{shell_view, NavItem, ShellView, BRAND_ACCENT, BRAND_PRIMARY};

/// Render the whole shell for one frame
/// Returns the user actions in the order the widgets reported them
pub fn render_app_layout(ctx: &egui::Context, state: &ViewState, year: i32) -> Vec<Action> {
    let view = shell_view(state, year);
    let palette = Palette::for_theme(state.theme);
    let mut actions = Vec::new();

    render_top_bar(ctx, &view, &palette, &mut actions);
    render_footer(ctx, &view.footer);
    render_sidebar(ctx, &view.nav, &mut actions);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source(view.panel.page())
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                render_panel(ui, &view.panel, &palette, &mut actions);
            });
    });

    actions
}

/// Render the top bar: brand, page buttons, theme toggle
fn render_top_bar(
    ctx: &egui::Context,
    view: &ShellView<'_>,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(BRAND_PRIMARY)
                    .strong()
                    .size(18.0)
                    .color(palette.primary),
            );
            ui.label(
                egui::RichText::new(BRAND_ACCENT)
                    .strong()
                    .size(18.0)
                    .color(palette.accent),
            );
            ui.add_space(24.0);

            for item in &view.nav {
                if nav_button(ui, item, false).clicked() {
                    actions.push(Action::Navigate(item.page));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = view.theme_toggle;
                if ui
                    .button(toggle.label)
                    .on_hover_text(toggle.hover_text)
                    .clicked()
                {
                    actions.push(Action::ToggleTheme);
                }
            });
        });
        ui.add_space(6.0);
    });
}

/// Render the left sidebar with the same destinations as the top bar
fn render_sidebar(ctx: &egui::Context, nav: &[NavItem], actions: &mut Vec<Action>) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.vertical(|ui| {
                for item in nav {
                    if nav_button(ui, item, true).clicked() {
                        actions.push(Action::Navigate(item.page));
                    }
                    ui.add_space(4.0);
                }
            });
        });
}

/// Render the footer line
fn render_footer(ctx: &egui::Context, footer: &str) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(footer).weak().small());
        });
        ui.add_space(4.0);
    });
}
