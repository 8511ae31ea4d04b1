// src/bin/cli.rs
use frame_tagger::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
