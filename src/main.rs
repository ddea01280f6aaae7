mod game;
mod input;
mod render;
mod state;
mod term;
mod vec2;

use std::fs::File;

use anyhow::{Context, Result};
use log::{info, warn, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::game::Game;
use crate::state::GameState;
use crate::term::Screen;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

const LOG_FILE: &str = "wrapsnake.log";

fn main() -> Result<()> {
    let log_file = File::create(LOG_FILE)
        .with_context(|| format!("failed to create {}", LOG_FILE))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .context("failed to initialize logger")?;
    info!("starting wrapsnake");

    let mut screen = Screen::new().context("failed to query the terminal")?;
    screen.setup().context("failed to initialize the display")?;

    let mut game = Game::new(screen, GameState::new());
    let outcome = game.run();

    // Always leave the terminal usable, even when the loop failed.
    if let Err(err) = game.restore_terminal() {
        warn!("failed to restore the terminal: {}", err);
    }

    let score = outcome.context("display write failed")?;
    println!("Final score: {}", score);
    Ok(())
}
