//! Colored, severity prefixed terminal messages.
//!
//! A template is split on `%v` and each gap is filled with the argument at the
//! same position, painted bright green or in the colors of a [`ColorSpec`]:
//!
//! ```no_run
//! use cprint::{cprint, ColorSpec, Palette, Severity};
//!
//! let version = ColorSpec::fg(Palette::Yellow, true, "0.3.1");
//! cprint!(Severity::Notice, "installed %v on %v", version, "2014-05-31", "\n").unwrap();
//! ```

pub mod error;
mod macros;
pub mod palette;
pub mod printer;
pub mod severity;
pub mod style;
pub mod terminal;

pub use error::{Error, Result};
pub use palette::{Palette, Style};
pub use printer::{
    print, print_or_exit, report_error, Printer, Rendered, EXIT_FAULT, FAULT_MESSAGE, SPLIT_MARKER,
};
pub use severity::Severity;
pub use style::{Arg, ColorSpec};
pub use terminal::{Ansi, ColorChoice, NoColor, Painted, StandardStream, Terminal, WriteColor};
