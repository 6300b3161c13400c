use crate::args::{Cli, Commands};
use crate::context::ExecutionContext;
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::resolve(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Login { email, password } => handlers::login::handle(&ctx, &email, &password),

        Commands::Logout => handlers::logout::handle(&ctx),

        Commands::Status => handlers::status::handle(&ctx),

        Commands::Edit { file } => handlers::edit::handle(&ctx, file.as_deref()),

        Commands::Preview {
            file,
            layout,
            theme,
            color,
            format,
        } => handlers::preview::handle(file.as_deref(), layout, theme, color, format),

        Commands::Export { file, output_dir } => {
            handlers::export::handle(&ctx, file.as_deref(), output_dir.as_deref())
        }

        Commands::Check { file } => handlers::check::handle(&file),
    }
}
