//! `zeroapi paths` handler.
//!
//! Prints every candidate location in `key = value` format, with existence
//! flags, for debugging resolution problems.

use anyhow::Result;

use crate::CliContext;

pub fn execute(ctx: &CliContext) -> Result<()> {
    let info = ctx.resolver.layout().path_info()?;
    println!("{info}");
    Ok(())
}
