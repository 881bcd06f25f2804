//! Application configuration
//!
//! Window chrome settings read from environment variables with defaults.
//! Nothing here touches the view state: every launch starts from the same
//! default page, theme and empty forms.

use std::env;

use crate::error::ShellError;

/// Smallest window edge accepted from the environment, in points
const MIN_WINDOW_EDGE: f32 = 320.0;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Native window configuration
    pub window: WindowConfig,
}

/// Native window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial inner width in points
    pub width: f32,
    /// Initial inner height in points
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Minimal UI Shell".to_string(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ShellError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShellError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = WindowConfig::default();

        let title = match lookup("UI_SHELL_TITLE") {
            Some(title) if title.trim().is_empty() => {
                return Err(ShellError::invalid_config(
                    "UI_SHELL_TITLE",
                    &title,
                    "title must not be blank",
                ));
            }
            Some(title) => title,
            None => defaults.title,
        };

        Ok(Self {
            window: WindowConfig {
                title,
                width: parse_edge(&lookup, "UI_SHELL_WIDTH", defaults.width)?,
                height: parse_edge(&lookup, "UI_SHELL_HEIGHT", defaults.height)?,
            },
        })
    }

    /// Minimum window size, never larger than the configured size
    pub fn min_window_size(&self) -> [f32; 2] {
        [
            self.window.width.min(800.0),
            self.window.height.min(600.0),
        ]
    }
}

fn parse_edge<F>(lookup: &F, key: &str, default: f32) -> Result<f32, ShellError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| ShellError::invalid_config(key, &raw, "expected a number"))?;
    if !value.is_finite() || value < MIN_WINDOW_EDGE {
        return Err(ShellError::invalid_config(
            key,
            &raw,
            format!("must be at least {MIN_WINDOW_EDGE}"),
        ));
    }
    Ok(value)
}
