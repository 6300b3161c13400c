use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, email: &str, password: &str) -> Result<()> {
    let gate = ctx.gate();
    gate.attempt_login(email, password)?;

    println!("Signed in as {}.", email);
    println!("Note: this gate checks input shape only; it is not authentication.");
    Ok(())
}
