// Reusable UI components
// Provides the buttons, cards and form rows shared by the panels

use eframe::egui;

use crate::state::Action;
use crate::ui::theme::Palette;
use crate::ui::view_model::{Card, NavItem, Tone};

/// Color for a card tone
pub fn tone_color(palette: &Palette, tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Primary => palette.primary,
        Tone::Accent => palette.accent,
        Tone::Secondary => palette.secondary,
    }
}

/// Render a navigation button, highlighted when its page is active
pub fn nav_button(ui: &mut egui::Ui, item: &NavItem, with_icon: bool) -> egui::Response {
    let text = if with_icon {
        format!("{} {}", item.icon, item.label)
    } else {
        item.label.to_string()
    };
    let text = if item.active {
        egui::RichText::new(text).strong()
    } else {
        egui::RichText::new(text)
    };
    ui.selectable_label(item.active, text)
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).strong())
}

/// Render a small rounded label filled with `color`
pub fn color_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::none()
        .fill(color)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(egui::Color32::WHITE));
        });
}

/// Render a dashboard card with a colored border
pub fn card(ui: &mut egui::Ui, card: &Card, palette: &Palette) {
    let color = tone_color(palette, card.tone);
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, color))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(200.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(card.title).strong().size(16.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(card.glyph).size(28.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(card.description).size(13.0));
                ui.add_space(8.0);
                color_pill(ui, card.tone.label(), color);
            });
        });
}

/// Render an inline status line
pub fn message_line(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add_space(8.0);
    ui.colored_label(color, text);
}

/// Widget id of the input labelled `label`
pub fn input_id(label: &str) -> egui::Id {
    egui::Id::new(("input_row", label))
}

/// Labelled single-line input mirrored from view state
/// Edits become actions built by `on_change`; Enter inside the field
/// pushes `on_enter` after the edit
pub fn input_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    password: bool,
    on_change: impl FnOnce(String) -> Action,
    on_enter: Action,
    actions: &mut Vec<Action>,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .id(input_id(label))
            .password(password)
            .desired_width(280.0),
    );
    if response.changed() {
        actions.push(on_change(buffer));
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        actions.push(on_enter);
    }
    ui.add_space(8.0);
}
