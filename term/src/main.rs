use std::io;

use clap::Parser;
use minefield_core::{BoardEngine, GameConfig, RandomLayoutGenerator};

use game_loop::GameLoop;
use input::LineSource;
use render::{Palette, TextRenderer};

mod game_loop;
mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw the board without terminal colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = BoardEngine::new(GameConfig::STANDARD);
    engine.place_mines_with(RandomLayoutGenerator::new(seed))?;
    log::debug!("mines: {:?}", engine.mine_coords());

    let palette = if args.no_color {
        Palette::Plain
    } else {
        Palette::Ansi
    };
    let mut game = GameLoop::new(
        LineSource::new(io::stdin().lock()),
        TextRenderer::new(io::stdout().lock(), palette),
    );

    let outcome = game.run(&mut engine)?;
    log::info!("game finished: {:?}", outcome);
    Ok(())
}
