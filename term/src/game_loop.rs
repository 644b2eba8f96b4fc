use anyhow::Result;
use minefield_core::{BoardEngine, TurnOutcome};

use crate::input::CommandSource;
use crate::render::Renderer;

pub const LOSS_MESSAGE: &str = "You hit a mine! Game Over...";
pub const WIN_MESSAGE: &str = "Hurray! You win!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    /// Input ran out before the game ended.
    Abandoned,
}

/// Reads commands, feeds them to the engine and redraws after each one.
#[derive(Debug)]
pub struct GameLoop<S, R> {
    source: S,
    renderer: R,
}

impl<S: CommandSource, R: Renderer> GameLoop<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self { source, renderer }
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn run(&mut self, engine: &mut BoardEngine) -> Result<GameOutcome> {
        loop {
            self.renderer.render(&engine.view())?;
            self.renderer.prompt()?;

            let Some(parsed) = self.source.next_command()? else {
                log::info!("input closed before the game ended");
                return Ok(GameOutcome::Abandoned);
            };

            let outcome = match parsed.and_then(|command| engine.play(command)) {
                Ok(outcome) => outcome,
                Err(err) => {
                    log::debug!("command rejected: {:?}", err);
                    self.renderer.message(&err.to_string())?;
                    continue;
                }
            };

            let (result, message) = match outcome {
                TurnOutcome::HitMine => (GameOutcome::Lost, LOSS_MESSAGE),
                TurnOutcome::Won => (GameOutcome::Won, WIN_MESSAGE),
                _ => continue,
            };

            self.renderer.render(&engine.view())?;
            self.renderer.message(message)?;
            return Ok(result);
        }
    }
}
