/// Prints to stdout, converting each argument with [`Arg::from`](crate::Arg).
///
/// ```no_run
/// # use cprint::{cprint, Severity};
/// cprint!(Severity::Debug, "value=%v, done", "42").unwrap();
/// ```
#[macro_export]
macro_rules! cprint {
    ($severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::print(
            $severity,
            $template,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Like [`cprint!`], but on a given [`Printer`](crate::Printer).
#[macro_export]
macro_rules! cprint_to {
    ($printer:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $printer.print(
            $severity,
            $template,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}
