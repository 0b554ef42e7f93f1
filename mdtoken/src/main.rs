// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use mdtoken::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    mdtoken::run(args)?;
    Ok(())
}
