use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, Result};

/// Thin crossterm wrapper: raw-mode alternate screen with a hidden cursor,
/// non-blocking key polling and whole-frame redraws from the top-left.
pub struct Term {
    stdout: Stdout,
}

impl Term {
    pub fn new() -> Self {
        Term { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Drain every key event already queued, without blocking. An empty
    /// result just means no key was pressed this tick.
    pub fn pending_keys(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn wait_key(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn draw_frame(&mut self, frame: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0), style::Print(frame))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::new()
    }
}
