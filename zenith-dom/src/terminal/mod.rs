use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::element::Element;
use crate::event::Event;
use crate::render::{render_lines, Line};
use crate::types::Style;

/// Raw-mode terminal on the alternate screen.
///
/// The previous terminal state is restored when the value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for input. `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };

        if has_event {
            events.extend(Event::from_crossterm(event::read()?));
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.extend(Event::from_crossterm(event::read()?));
            }
        }

        Ok(events)
    }

    /// Draw `root` from the top-left corner, clipped to the screen.
    pub fn render(&mut self, root: &Element) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let lines = render_lines(root, usize::from(width));

        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            SetAttribute(Attribute::Reset)
        )?;
        for (y, line) in lines.iter().take(usize::from(height)).enumerate() {
            // `take(height)` keeps y within u16
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            self.write_line(line)?;
        }
        self.stdout.flush()
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            self.apply_style(span.style)?;
            queue!(self.stdout, Print(&span.text))?;
            queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> io::Result<()> {
        if let Some(fg) = style.foreground {
            queue!(self.stdout, SetForegroundColor(fg.into()))?;
        }
        if let Some(bg) = style.background {
            queue!(self.stdout, SetBackgroundColor(bg.into()))?;
        }
        let text = style.text_style;
        if text.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if text.italic {
            queue!(self.stdout, SetAttribute(Attribute::Italic))?;
        }
        if text.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        if text.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if text.reverse {
            queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}
