// View models
// Pure projections of the view state; the egui code only draws these

use crate::state::view_state::{CONTACT_INCOMPLETE, CONTACT_SUCCESS};
use crate::state::{AuthView, PageId, Theme, ViewState};

/// Brand shown at the left of the top bar
pub const BRAND_PRIMARY: &str = "Minimal";
pub const BRAND_ACCENT: &str = "UI";

/// Color role of a dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Secondary,
}

impl Tone {
    /// Text of the colored pill
    pub fn label(self) -> &'static str {
        match self {
            Tone::Primary => "Primary",
            Tone::Accent => "Accent",
            Tone::Secondary => "Secondary",
        }
    }
}

/// Static dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const DASHBOARD_CARDS: [Card; 3] = [
    Card {
        title: "Welcome",
        glyph: "👋",
        description: "Your modern, minimalistic dashboard is ready to use.",
        tone: Tone::Primary,
    },
    Card {
        title: "Quick Action",
        glyph: "⚡",
        description: "Access your forms and authentication from the menu.",
        tone: Tone::Accent,
    },
    Card {
        title: "Responsive",
        glyph: "📱",
        description: "Try resizing the window!",
        tone: Tone::Secondary,
    },
];

/// One navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Theme toggle button content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    pub label: &'static str,
    pub hover_text: &'static str,
}

/// How a status line should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Status message with its severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub text: &'a str,
    pub severity: Severity,
}

/// Classify the shared status message; `None` when it is empty
pub fn status_line(text: &str) -> Option<StatusLine<'_>> {
    let severity = match text {
        "" => return None,
        CONTACT_SUCCESS => Severity::Success,
        CONTACT_INCOMPLETE => Severity::Error,
        _ => Severity::Info,
    };
    Some(StatusLine { text, severity })
}

/// Contact form panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPanel<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: Option<StatusLine<'a>>,
}

/// Auth form panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPanel<'a> {
    pub title: &'static str,
    pub username: &'a str,
    pub password: &'a str,
    pub error: Option<&'a str>,
    pub message: Option<StatusLine<'a>>,
    pub prompt: &'static str,
    pub switch_label: &'static str,
    pub switch_target: AuthView,
}

/// Content of the central area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    Dashboard { cards: &'static [Card] },
    Form(ContactPanel<'a>),
    Auth(AuthPanel<'a>),
}

impl PanelView<'_> {
    /// Page this panel belongs to
    pub fn page(&self) -> PageId {
        match self {
            PanelView::Dashboard { .. } => PageId::Dashboard,
            PanelView::Form(_) => PageId::Form,
            PanelView::Auth(_) => PageId::Auth,
        }
    }

    /// Panel heading
    pub fn heading(&self) -> &'static str {
        match self {
            PanelView::Dashboard { .. } => "Dashboard",
            PanelView::Form(_) => "Sample Form",
            PanelView::Auth(auth) => auth.title,
        }
    }
}

/// Everything the shell draws in one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView<'a> {
    pub nav: [NavItem; 3],
    pub theme_toggle: ThemeToggle,
    pub panel: PanelView<'a>,
    pub footer: String,
}

fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

/// Navigation entries with the current page marked active
pub fn nav_items(current: PageId) -> [NavItem; 3] {
    PageId::ALL.map(|page| NavItem {
        page,
        label: page.label(),
        icon: page.icon(),
        active: page == current,
    })
}

/// Toggle button content; names the theme a click switches to
pub fn theme_toggle(theme: Theme) -> ThemeToggle {
    match theme {
        Theme::Light => ThemeToggle {
            label: "🌙 Dark",
            hover_text: "Switch to dark mode",
        },
        Theme::Dark => ThemeToggle {
            label: "☀ Light",
            hover_text: "Switch to light mode",
        },
    }
}

/// Project the active panel
pub fn panel_view(state: &ViewState) -> PanelView<'_> {
    match state.page {
        PageId::Dashboard => PanelView::Dashboard {
            cards: &DASHBOARD_CARDS,
        },
        PageId::Form => PanelView::Form(ContactPanel {
            name: &state.contact_form.name,
            email: &state.contact_form.email,
            message: status_line(&state.contact_message),
        }),
        PageId::Auth => {
            let (prompt, switch_label) = match state.auth_view {
                AuthView::Login => ("Don't have an account?", "Sign Up"),
                AuthView::Signup => ("Already have an account?", "Login"),
            };
            PanelView::Auth(AuthPanel {
                title: state.auth_view.title(),
                username: &state.auth_form.username,
                password: &state.auth_form.password,
                error: non_empty(&state.auth_error),
                message: status_line(&state.contact_message),
                prompt,
                switch_label,
                switch_target: state.auth_view.other(),
            })
        }
    }
}

/// Footer line for the given calendar year
pub fn footer_text(year: i32) -> String {
    format!("© {year} Minimal UI Shell.")
}

/// Project the whole shell
pub fn shell_view(state: &ViewState, year: i32) -> ShellView<'_> {
    ShellView {
        nav: nav_items(state.page),
        theme_toggle: theme_toggle(state.theme),
        panel: panel_view(state),
        footer: footer_text(year),
    }
}
