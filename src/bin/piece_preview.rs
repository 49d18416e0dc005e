use anyhow::Context;
use clap::Parser;
use std::io;
use tetris_queue::config::Config;
use tetris_queue::logging::init_tracing;
use tetris_queue::Controller;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);
    config.apply_color_choice();

    info!(seed = ?config.seed, "starting piece preview");
    let mut controller = Controller::new(config.piece_factory());

    let stdin = io::stdin();
    let stdout = io::stdout();
    controller
        .run(stdin.lock(), &mut stdout.lock())
        .context("menu loop stopped")?;

    Ok(())
}
