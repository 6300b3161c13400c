use crate::context::ExecutionContext;
use anyhow::Result;
use folio_runtime::export_portfolio;
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, file: Option<&Path>, output_dir: Option<&Path>) -> Result<()> {
    let record = super::load_record(file)?;

    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.export_dir());
    let path = export_portfolio(&record, &dir)?;

    println!("Exported portfolio to {}", path.display());
    Ok(())
}
