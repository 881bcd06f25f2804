// Panel renderers
// Draw the dashboard, contact form and auth form from their view models

use eframe::egui;

use crate::state::{Action, AuthField, ContactField};
use crate::ui::components::{card, input_id, input_row, message_line, primary_button};
use crate::ui::theme::Palette;
use crate::ui::view_model::{AuthPanel, Card, ContactPanel, PanelView, Severity, StatusLine};

/// First input of the contact form
const CONTACT_FIRST_FIELD: &str = "Name";

/// Give keyboard focus to the contact form's first input on the next frame
pub fn focus_contact_form(ctx: &egui::Context) {
    ctx.memory_mut(|memory| memory.request_focus(input_id(CONTACT_FIRST_FIELD)));
}

/// Render the active panel, collecting user actions
pub fn render_panel(
    ui: &mut egui::Ui,
    panel: &PanelView<'_>,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    ui.add_space(12.0);
    ui.heading(panel.heading());
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(12.0);

    match panel {
        PanelView::Dashboard { cards } => render_dashboard(ui, cards, palette),
        PanelView::Form(form) => render_contact_form(ui, form, palette, actions),
        PanelView::Auth(auth) => render_auth_form(ui, auth, palette, actions),
    }
}

fn render_dashboard(ui: &mut egui::Ui, cards: &[Card], palette: &Palette) {
    // Wraps to a column on narrow windows
    ui.horizontal_wrapped(|ui| {
        for item in cards {
            card(ui, item, palette);
            ui.add_space(12.0);
        }
    });
}

fn status_message(ui: &mut egui::Ui, status: StatusLine<'_>, palette: &Palette) {
    let color = match status.severity {
        Severity::Success => palette.success,
        Severity::Error => palette.error,
        Severity::Info => palette.primary,
    };
    message_line(ui, status.text, color);
}

fn render_contact_form(
    ui: &mut egui::Ui,
    form: &ContactPanel<'_>,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    ui.vertical(|ui| {
        input_row(
            ui,
            CONTACT_FIRST_FIELD,
            form.name,
            false,
            |value| Action::UpdateContact(ContactField::Name, value),
            Action::SubmitContact,
            actions,
        );
        input_row(
            ui,
            "Email",
            form.email,
            false,
            |value| Action::UpdateContact(ContactField::Email, value),
            Action::SubmitContact,
            actions,
        );
        if primary_button(ui, "Submit").clicked() {
            actions.push(Action::SubmitContact);
        }
        if let Some(status) = form.message {
            status_message(ui, status, palette);
        }
    });
}

fn render_auth_form(
    ui: &mut egui::Ui,
    auth: &AuthPanel<'_>,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    ui.vertical(|ui| {
        input_row(
            ui,
            "Username",
            auth.username,
            false,
            |value| Action::UpdateAuth(AuthField::Username, value),
            Action::SubmitAuth,
            actions,
        );
        input_row(
            ui,
            "Password",
            auth.password,
            true,
            |value| Action::UpdateAuth(AuthField::Password, value),
            Action::SubmitAuth,
            actions,
        );
        if primary_button(ui, auth.title).clicked() {
            actions.push(Action::SubmitAuth);
        }
        if let Some(error) = auth.error {
            message_line(ui, error, palette.error);
        }
        if let Some(status) = auth.message {
            status_message(ui, status, palette);
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(auth.prompt).small());
            if ui.link(auth.switch_label).clicked() {
                actions.push(Action::SwitchAuthView(auth.switch_target));
            }
        });
    });
}
