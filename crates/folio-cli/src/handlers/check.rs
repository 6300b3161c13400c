use anyhow::Result;
use folio_runtime::import_portfolio;
use std::path::Path;

pub fn handle(file: &Path) -> Result<()> {
    let record = import_portfolio(file)?;

    let name = if record.name.is_empty() {
        "(unnamed)"
    } else {
        record.name.as_str()
    };
    println!(
        "OK: {} — {} skills, {} experience, {} projects ({} layout, {} theme)",
        name,
        record.skills.len(),
        record.experience.len(),
        record.projects.len(),
        record.layout,
        record.theme,
    );
    Ok(())
}
