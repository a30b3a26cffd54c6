use std::{fmt::Display, io::Write, process::exit, str::FromStr};

use cprint::{terminal, Arg, ColorChoice, ColorSpec, Printer, Severity};
use log::{debug, LevelFilter};
use sarge::{tag, ArgumentParser};

fn main() {
    let parser = ArgumentParser::new();
    let help = parser.add::<bool>(tag::both('h', "help"));

    let severity = parser.add::<String>(tag::both('s', "severity"));

    let color = parser.add::<String>(tag::both('c', "color"));

    let newline = parser.add::<bool>(tag::both('n', "newline"));

    let verbose = parser.add::<bool>(tag::both('v', "verbose"));

    let remainder = match parser.parse() {
        Err(e) => fail("error (while parsing arguments): ", e),
        Ok(r) => r,
    };

    if matches!(help.get(), Ok(true)) {
        println!(
            "{} [options] <template> [args...]",
            parser.binary().unwrap_or("cprint".into())
        );
        println!("  -h /     --help          : prints this help message");
        println!("  -s / --severity <name>   : debug, warning, error, notice or none");
        println!("  -c /    --color <when>   : auto, always or never (default: auto)");
        println!("  -n /  --newline          : ends the output with a newline");
        println!("  -v /  --verbose          : logs debug information to stderr");
        println!();
        println!("  every %v in the template is replaced by the next argument;");
        println!("  an argument like @red+,blue:text is printed in its own colors");
        println!("  (+ means bright), and @@text prints a literal @text");

        exit(0);
    }

    init_logging(matches!(verbose.get(), Ok(true)));

    let severity = match severity.get() {
        Ok(s) => parse_or_fail::<Severity>(&s),
        Err(_) => Severity::Unset,
    };

    let choice = match color.get() {
        Ok(c) => parse_or_fail::<ColorChoice>(&c),
        Err(_) => ColorChoice::Auto,
    };

    let mut positional = remainder.into_iter();
    let template = positional
        .next()
        .unwrap_or_else(|| fail("error (while parsing arguments): ", "missing template"));

    let args: Vec<Arg> = positional.map(|a| parse_arg(&a)).collect();
    debug!("severity {severity:?}, color {choice:?}, {} argument(s)", args.len());

    let mut printer = Printer::stdout(choice);
    printer.print_or_exit(severity, &template, &args);

    if matches!(newline.get(), Ok(true)) {
        println!();
    }
    if let Err(e) = std::io::stdout().flush() {
        fail("error (while writing output): ", e);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_arg(raw: &str) -> Arg {
    match raw.strip_prefix('@') {
        Some(rest) if rest.starts_with('@') => Arg::Plain(rest.to_string()),
        Some(rest) => Arg::Styled(parse_or_fail::<ColorSpec>(rest)),
        None => Arg::Plain(raw.to_string()),
    }
}

fn parse_or_fail<T>(s: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    s.parse()
        .unwrap_or_else(|e| fail("error (while parsing arguments): ", e))
}

fn fail(message: &str, err: impl Display) -> ! {
    let mut stderr = Printer::new(terminal::stderr(ColorChoice::Auto));
    let _ = stderr.report_error(Severity::Error, message, &err);
    exit(1);
}
