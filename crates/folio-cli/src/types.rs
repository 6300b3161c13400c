use clap::ValueEnum;
use folio_types::{Layout, Theme};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ThemeOpt {
    Dark,
    Light,
}

impl From<ThemeOpt> for Theme {
    fn from(opt: ThemeOpt) -> Self {
        match opt {
            ThemeOpt::Dark => Theme::Dark,
            ThemeOpt::Light => Theme::Light,
        }
    }
}

impl fmt::Display for ThemeOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Theme::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LayoutOpt {
    Minimal,
    Modern,
    Creative,
}

impl From<LayoutOpt> for Layout {
    fn from(opt: LayoutOpt) -> Self {
        match opt {
            LayoutOpt::Minimal => Layout::Minimal,
            LayoutOpt::Modern => Layout::Modern,
            LayoutOpt::Creative => Layout::Creative,
        }
    }
}

impl fmt::Display for LayoutOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Layout::from(*self))
    }
}
