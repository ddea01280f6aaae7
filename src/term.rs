use std::io::{stdout, Stdout, Write};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use crossterm::event::{read, Event};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, Result};
use log::warn;

use crate::{Coords, TermInt};

/// Thin wrapper over the terminal: raw-mode lifecycle, cell writes and the
/// cached surface size. Rendering treats it as a dumb character grid.
pub struct Screen {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Screen { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide)?;
        self.clear()
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    pub fn size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Adopts the new surface size and clears the buffer so the next frame
    /// repaints from scratch.
    pub fn resync(&mut self, width: TermInt, height: TermInt) -> Result<()> {
        self.width = width;
        self.height = height;
        self.clear()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn put_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch))
    }

    pub fn put_cell(&mut self, pos: Coords, ch: char, bg: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            SetBackgroundColor(bg),
            Print(ch),
            ResetColor
        )
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Spawns the blocking event reader. Events flow through a single-slot
/// channel; the thread stops once the receiving side is dropped.
pub fn spawn_event_pump() -> Receiver<Event> {
    let (tx, rx) = mpsc::sync_channel(1);
    thread::spawn(move || pump_events(tx));
    rx
}

fn pump_events(tx: SyncSender<Event>) {
    loop {
        match read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!("event source failed: {}", err);
                break;
            }
        }
    }
}
