use crate::context::ExecutionContext;
use anyhow::Result;
use folio_runtime::Config;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_path = Config::path_in(ctx.data_dir());

    println!("Data dir:   {}", ctx.data_dir().display());
    if config_path.exists() {
        println!("Config:     {}", config_path.display());
    } else {
        println!("Config:     (defaults; no {})", config_path.display());
    }
    println!("Export dir: {}", ctx.export_dir().display());

    if ctx.gate().is_logged_in() {
        println!("Session:    logged in");
    } else {
        println!("Session:    logged out");
    }

    Ok(())
}
