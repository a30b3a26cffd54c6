//! The color primitive everything else paints through.
//!
//! Any [`WriteColor`] is a [`Terminal`]. A [`Painted`] guard pairs every
//! color change with a reset, including on early returns.

use std::io::{self, IsTerminal, Write};

pub use termcolor::{Ansi, ColorChoice, NoColor, StandardStream, WriteColor};
use termcolor::{Color, ColorSpec};

use crate::palette::{Palette, Style};

impl From<Palette> for Option<Color> {
    fn from(color: Palette) -> Self {
        match color {
            Palette::None => None,
            Palette::Black => Some(Color::Black),
            Palette::Red => Some(Color::Red),
            Palette::Green => Some(Color::Green),
            Palette::Yellow => Some(Color::Yellow),
            Palette::Blue => Some(Color::Blue),
            Palette::Magenta => Some(Color::Magenta),
            Palette::Cyan => Some(Color::Cyan),
            Palette::White => Some(Color::White),
        }
    }
}

/// A writer that can change and reset its colors.
pub trait Terminal: WriteColor {
    /// Foreground and background are set separately since each layer has its
    /// own brightness.
    fn change_color(&mut self, style: Style) -> io::Result<()> {
        if let Some(fg) = Option::<Color>::from(style.fg) {
            self.set_color(
                ColorSpec::new()
                    .set_reset(false)
                    .set_fg(Some(fg))
                    .set_intense(style.fg_bright),
            )?;
        }
        if let Some(bg) = Option::<Color>::from(style.bg) {
            self.set_color(
                ColorSpec::new()
                    .set_reset(false)
                    .set_bg(Some(bg))
                    .set_intense(style.bg_bright),
            )?;
        }
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.reset()
    }
}

impl<W: WriteColor + ?Sized> Terminal for W {}

/// Narrows `Auto` to `Never` when the stream is not a terminal, which
/// termcolor leaves to the caller.
pub fn stream_choice(choice: ColorChoice, is_tty: bool) -> ColorChoice {
    match choice {
        ColorChoice::Auto if !is_tty => ColorChoice::Never,
        choice => choice,
    }
}

pub fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(stream_choice(choice, io::stdout().is_terminal()))
}

pub fn stderr(choice: ColorChoice) -> StandardStream {
    StandardStream::stderr(stream_choice(choice, io::stderr().is_terminal()))
}

/// A color change that is undone when the guard goes away.
///
/// Prefer [`Painted::finish`], which surfaces the reset's error; dropping
/// still resets but swallows it.
pub struct Painted<'a, T: Terminal + ?Sized> {
    term: &'a mut T,
    armed: bool,
}

impl<'a, T: Terminal + ?Sized> Painted<'a, T> {
    pub fn begin(term: &'a mut T, style: Style) -> io::Result<Self> {
        let mut guard = Self { term, armed: true };
        guard.term.change_color(style)?;
        Ok(guard)
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.armed = false;
        self.term.reset_color()
    }
}

impl<T: Terminal + ?Sized> Write for Painted<'_, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.term.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.term.flush()
    }
}

impl<T: Terminal + ?Sized> Drop for Painted<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.term.reset_color();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn output(term: Ansi<Vec<u8>>) -> String {
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[rstest]
    #[case(Style::new(Palette::White, true, Palette::Cyan, false), "\x1b[38;5;15m\x1b[46m")]
    #[case(Style::new(Palette::White, false, Palette::Magenta, false), "\x1b[37m\x1b[45m")]
    #[case(Style::new(Palette::Green, true, Palette::None, false), "\x1b[38;5;10m")]
    #[case(Style::new(Palette::None, false, Palette::Black, true), "\x1b[48;5;8m")]
    #[case(Style::PLAIN, "")]
    fn change_color_writes_each_layer(#[case] style: Style, #[case] expected: &str) {
        let mut term = Ansi::new(Vec::new());
        term.change_color(style).unwrap();
        assert_eq!(output(term), expected);
    }

    #[test]
    fn no_color_terminal_writes_text_only() {
        let mut term = NoColor::new(Vec::new());
        term.change_color(Style::new(Palette::Red, true, Palette::None, false))
            .unwrap();
        term.write_all(b"hi").unwrap();
        term.reset_color().unwrap();
        assert_eq!(term.into_inner(), b"hi");
    }

    #[test]
    fn painted_resets_on_finish() {
        let mut term = Ansi::new(Vec::new());
        let mut painted =
            Painted::begin(&mut term, Style::new(Palette::Blue, false, Palette::None, false))
                .unwrap();
        painted.write_all(b"x").unwrap();
        painted.finish().unwrap();
        assert_eq!(output(term), "\x1b[34mx\x1b[0m");
    }

    #[test]
    fn painted_resets_on_early_return() {
        fn fails(term: &mut Ansi<Vec<u8>>) -> io::Result<()> {
            let mut painted =
                Painted::begin(term, Style::new(Palette::Red, false, Palette::None, false))?;
            painted.write_all(b"oops")?;
            Err(io::Error::other("boom"))
        }

        let mut term = Ansi::new(Vec::new());
        assert!(fails(&mut term).is_err());
        assert_eq!(output(term), "\x1b[31moops\x1b[0m");
    }

    #[rstest]
    #[case(ColorChoice::Auto, false, ColorChoice::Never)]
    #[case(ColorChoice::Auto, true, ColorChoice::Auto)]
    #[case(ColorChoice::Always, false, ColorChoice::Always)]
    #[case(ColorChoice::Never, true, ColorChoice::Never)]
    fn auto_is_narrowed_off_terminals(
        #[case] choice: ColorChoice,
        #[case] is_tty: bool,
        #[case] expected: ColorChoice,
    ) {
        assert_eq!(stream_choice(choice, is_tty), expected);
    }
}
