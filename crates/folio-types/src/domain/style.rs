use serde::{Deserialize, Serialize};
use std::fmt;

/// Color scheme for the rendered preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme. The editor exposes theme selection as a toggle.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout template the preview is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Minimal,
    Modern,
    Creative,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Minimal, Layout::Modern, Layout::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Minimal => "minimal",
            Layout::Modern => "modern",
            Layout::Creative => "creative",
        }
    }

    /// The next template in selection order, wrapping around.
    pub fn cycled(&self) -> Layout {
        match self {
            Layout::Minimal => Layout::Modern,
            Layout::Modern => Layout::Creative,
            Layout::Creative => Layout::Minimal,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Modern
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
