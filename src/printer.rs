use std::{fmt::Display, io::Write, process};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    palette::{Palette, Style},
    severity::Severity,
    style::{Arg, ColorSpec},
    terminal::{self, ColorChoice, Painted, StandardStream, Terminal},
};

/// Separates the literal pieces of a template.
pub const SPLIT_MARKER: &str = "%v";

/// Default look of a substituted value.
pub const VALUE_STYLE: Style = Style::new(Palette::Green, true, Palette::None, false);

/// Colors of the message part of [`Printer::report_error`].
pub const REPORT_STYLE: Style = Style::new(Palette::Red, false, Palette::Green, false);

pub const FAULT_MESSAGE: &str = "an error has occurred while printing. Error: ";
pub const RANGE_MESSAGE: &str = "values range error, values range include 0 ~ 8, Error: ";

/// Exit status of [`Printer::print_or_exit`] after a fault.
pub const EXIT_FAULT: i32 = 1;

/// What a [`Printer::print`] call wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rendered {
    /// Literal template pieces, always one more than the markers.
    pub segments: usize,
    /// Arguments painted into slots.
    pub values: usize,
}

#[derive(Debug)]
pub struct Printer<T> {
    term: T,
}

impl Printer<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(terminal::stdout(choice))
    }
}

impl<T: Terminal> Printer<T> {
    pub fn new(term: T) -> Self {
        Self { term }
    }

    pub fn into_inner(self) -> T {
        self.term
    }

    /// Writes the severity label, then `template` with each `%v` replaced by
    /// the argument at the same position.
    ///
    /// Surplus arguments are dropped and surplus slots stay empty, so a
    /// trailing `"\n"` argument after a template ending in `%v`-free text
    /// terminates the line.
    pub fn print(&mut self, severity: Severity, template: &str, args: &[Arg]) -> Result<Rendered> {
        self.render_label(severity)?;

        let mut rendered = Rendered::default();
        for (k, segment) in template.split(SPLIT_MARKER).enumerate() {
            self.term.write_all(segment.as_bytes())?;
            rendered.segments += 1;

            if let Some(arg) = args.get(k) {
                match arg {
                    Arg::Styled(spec) => self.render_custom(spec)?,
                    Arg::Plain(value) => self.render_default(value)?,
                }
                rendered.values += 1;
            }
        }

        if args.len() > rendered.segments {
            trace!("ignoring {} surplus argument(s)", args.len() - rendered.segments);
        }
        debug!(
            "printed {} segment(s) and {} value(s) at {:?}",
            rendered.segments, rendered.values, severity
        );
        Ok(rendered)
    }

    /// Like [`Printer::print`], but a failure is reported through
    /// [`Printer::report_fault`] and ends the process with [`EXIT_FAULT`].
    pub fn print_or_exit(&mut self, severity: Severity, template: &str, args: &[Arg]) -> Rendered {
        match self.print(severity, template, args) {
            Ok(rendered) => rendered,
            Err(e) => process::exit(self.report_fault(&e)),
        }
    }

    /// Reports a failed print as an `Error:` line and returns the status to
    /// exit with.
    pub fn report_fault(&mut self, err: &Error) -> i32 {
        // the terminal may be the thing that failed
        let _ = self.report_error(Severity::Error, FAULT_MESSAGE, err);
        let _ = self.term.flush();
        EXIT_FAULT
    }

    /// Writes the severity label followed by `message` and `err` in the
    /// report colors, ending the line.
    pub fn report_error(
        &mut self,
        severity: Severity,
        message: &str,
        err: &dyn Display,
    ) -> Result<()> {
        self.render_label(severity)?;

        let mut painted = Painted::begin(&mut self.term, REPORT_STYLE)?;
        write!(painted, "{message}")?;
        writeln!(painted, "{err}")?;
        painted.finish()?;
        Ok(())
    }

    fn render_label(&mut self, severity: Severity) -> Result<()> {
        let mut painted = Painted::begin(&mut self.term, severity.style())?;
        if let Some(label) = severity.label() {
            painted.write_all(label.as_bytes())?;
        }
        painted.finish()?;
        Ok(())
    }

    fn render_custom(&mut self, spec: &ColorSpec) -> Result<()> {
        let style = match spec.style() {
            Ok(style) => style,
            Err(e) => {
                debug!(
                    "color spec {}/{} is outside the palette",
                    spec.fg_color, spec.bg_color
                );
                self.render_default(&spec.value)?;
                self.term.write_all(b"\n")?;
                return self.report_error(Severity::Warning, RANGE_MESSAGE, &e);
            }
        };

        let mut painted = Painted::begin(&mut self.term, style)?;
        painted.write_all(spec.value.as_bytes())?;
        painted.finish()?;
        Ok(())
    }

    fn render_default(&mut self, value: &str) -> Result<()> {
        let mut painted = Painted::begin(&mut self.term, VALUE_STYLE)?;
        painted.write_all(value.as_bytes())?;
        painted.finish()?;
        Ok(())
    }
}

/// [`Printer::print`] on stdout.
pub fn print(severity: Severity, template: &str, args: &[Arg]) -> Result<Rendered> {
    Printer::stdout(ColorChoice::Auto).print(severity, template, args)
}

/// [`Printer::print_or_exit`] on stdout.
pub fn print_or_exit(severity: Severity, template: &str, args: &[Arg]) -> Rendered {
    Printer::stdout(ColorChoice::Auto).print_or_exit(severity, template, args)
}

/// [`Printer::report_error`] on stdout.
pub fn report_error(severity: Severity, message: &str, err: &dyn Display) -> Result<()> {
    Printer::stdout(ColorChoice::Auto).report_error(severity, message, err)
}
