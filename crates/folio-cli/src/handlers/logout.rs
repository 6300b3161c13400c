use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    ctx.gate().logout()?;
    println!("Signed out.");
    Ok(())
}
