// src/bin/cli.rs
use whisky_board::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()?;
    Ok(())
}
