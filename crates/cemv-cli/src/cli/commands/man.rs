//! `cemv man` – roff man page to stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let cmd = Cli::command();
    let man = Man::new(cmd);
    let mut out = Vec::new();
    man.render(&mut out)?;
    use std::io::Write;
    std::io::stdout().lock().write_all(&out)?;
    Ok(())
}
