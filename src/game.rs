use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use crossterm::event::Event;
use crossterm::Result;
use log::{debug, info};

use crate::input::{map_key, Command};
use crate::render;
use crate::state::GameState;
use crate::term::{self, Screen};

/// The game loop: renders a frame, then waits for whichever comes first,
/// the tick deadline or an event from the pump thread.
pub struct Game {
    screen: Screen,
    state: GameState,
    events: Receiver<Event>,
}

impl Game {
    pub fn new(screen: Screen, state: GameState) -> Self {
        let events = term::spawn_event_pump();
        Game { screen, state, events }
    }

    /// Runs until quit or game over and returns the final score.
    ///
    /// Each iteration processes at most one of {tick, event}, so every frame
    /// reflects the state as of the start of its iteration. The tick
    /// interval is recomputed from the score after each step and takes
    /// effect at the next deadline, never mid-wait.
    pub fn run(&mut self) -> Result<u32> {
        let mut deadline = Instant::now() + self.state.tick_interval();

        loop {
            render::draw(&mut self.screen, &self.state)?;
            self.screen.flush()?;

            let timeout = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(timeout) {
                Err(RecvTimeoutError::Timeout) => {
                    self.state.step();
                    deadline = Instant::now() + self.state.tick_interval();
                    if self.state.game_over() {
                        info!("game over, final score {}", self.state.score());
                        break;
                    }
                }
                Ok(Event::Key(key)) => match map_key(&key) {
                    Command::Quit => {
                        info!("quit requested, final score {}", self.state.score());
                        break;
                    }
                    Command::Steer(direction) => self.state.steer(direction),
                    Command::Ignore => {}
                },
                Ok(Event::Resize(width, height)) => {
                    debug!("terminal resized to {}x{}", width, height);
                    self.screen.resync(width, height)?;
                }
                Ok(Event::Mouse(_)) => {}
                // The pump thread only dies with the event source; treat it
                // like a quit.
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(self.state.score())
    }

    pub fn restore_terminal(&mut self) -> Result<()> {
        self.screen.restore()
    }
}
