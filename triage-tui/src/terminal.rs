//! Raw-mode terminal: setup, event polling, and drawing styled lines.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{
        Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::render::{Line, Rgb, Style};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    /// Enter the alternate screen with raw mode and mouse capture.
    ///
    /// Everything is restored when the terminal is dropped.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for events. `None` blocks until at least one arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw a full frame, one line per terminal row from the top.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            for span in &line.spans {
                self.apply_style(span.style)?;
                queue!(self.stdout, Print(&span.text))?;
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn apply_style(&mut self, style: Style) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = style.fg {
            queue!(self.stdout, SetForegroundColor(ct_color(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.stdout, SetBackgroundColor(ct_color(bg)))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

fn ct_color(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
