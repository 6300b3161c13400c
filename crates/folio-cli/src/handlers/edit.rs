use crate::context::ExecutionContext;
use crate::ui;
use anyhow::Result;
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, file: Option<&Path>) -> Result<()> {
    let record = super::load_record(file)?;
    ui::run(ctx, record)
}
