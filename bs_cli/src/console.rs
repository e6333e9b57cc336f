//! Terminal state owned by the presentation layer.
//!
//! The library never touches the terminal. Window title, colours and
//! clearing go through [`Console`] so they can be swapped out for a plain
//! implementation when colours are disabled or output is captured.

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType, SetTitle},
};
use std::io::{self, Write};

/// Colour roles used by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Normal,
    Report,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Heading => Color::Cyan,
            Tone::Normal => Color::White,
            Tone::Report => Color::Grey,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

/// Terminal capabilities the interactive session needs
pub trait Console {
    /// Set the window title
    fn set_title(&mut self, title: &str) -> io::Result<()>;

    /// Switch the foreground colour for subsequent output
    fn set_tone(&mut self, tone: Tone) -> io::Result<()>;

    /// Clear the screen and move the cursor home
    fn clear(&mut self) -> io::Result<()>;

    /// Restore the terminal's own colours
    fn reset(&mut self) -> io::Result<()>;
}

/// Console backed by crossterm on stdout
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(
            io::stdout(),
            SetTitle(title),
            SetBackgroundColor(Color::DarkBlue)
        )
    }

    fn set_tone(&mut self, tone: Tone) -> io::Result<()> {
        execute!(io::stdout(), SetForegroundColor(tone.color()))
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn reset(&mut self) -> io::Result<()> {
        execute!(io::stdout(), ResetColor)?;
        io::stdout().flush()
    }
}

/// Console that ignores every request (`--no-color`, tests)
#[derive(Debug, Default)]
pub struct PlainConsole;

impl Console for PlainConsole {
    fn set_title(&mut self, _title: &str) -> io::Result<()> {
        Ok(())
    }

    fn set_tone(&mut self, _tone: Tone) -> io::Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn set_title(&mut self, title: &str) -> io::Result<()> {
        (**self).set_title(title)
    }

    fn set_tone(&mut self, tone: Tone) -> io::Result<()> {
        (**self).set_tone(tone)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }
}
