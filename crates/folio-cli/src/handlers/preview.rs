use crate::types::{ColorMode, LayoutOpt, OutputFormat, ThemeOpt};
use crate::views::portfolio;
use anyhow::Result;
use folio_engine::editor;
use is_terminal::IsTerminal;
use std::path::Path;

pub fn handle(
    file: Option<&Path>,
    layout: Option<LayoutOpt>,
    theme: Option<ThemeOpt>,
    color: ColorMode,
    format: OutputFormat,
) -> Result<()> {
    let mut record = super::load_record(file)?;

    // Flag overrides restyle the rendered copy only; the file is untouched.
    if let Some(layout) = layout {
        record = editor::set_layout(&record, layout.into());
    }
    if let Some(theme) = theme {
        record = editor::set_theme(&record, theme.into());
    }

    let doc = folio_engine::render(&record);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Plain => {
            let use_color = match color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => std::io::stdout().is_terminal(),
            };
            portfolio::print_document(&doc, use_color);
        }
    }

    Ok(())
}
