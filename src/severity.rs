use std::str::FromStr;

use crate::{
    error::Error,
    palette::{Palette, Style},
};

/// Which label, if any, precedes a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Debug,
    Warning,
    Error,
    Notice,
    #[default]
    Unset,
}

impl Severity {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Severity::Debug => Some("Debug: "),
            // the misspelling is what existing output has always looked like
            Severity::Warning => Some("Waring: "),
            Severity::Error => Some("Error: "),
            Severity::Notice => Some("Notice: "),
            Severity::Unset => None,
        }
    }

    pub fn style(self) -> Style {
        match self {
            Severity::Debug => Style::new(Palette::White, true, Palette::Cyan, false),
            Severity::Warning => Style::new(Palette::White, false, Palette::Magenta, false),
            Severity::Error => Style::new(Palette::White, true, Palette::Red, false),
            Severity::Notice => Style::new(Palette::White, true, Palette::Green, false),
            Severity::Unset => Style::PLAIN,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "warning" | "waring" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "notice" => Ok(Severity::Notice),
            "none" | "unset" => Ok(Severity::Unset),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Severity::Debug, Some("Debug: "))]
    #[case(Severity::Warning, Some("Waring: "))]
    #[case(Severity::Error, Some("Error: "))]
    #[case(Severity::Notice, Some("Notice: "))]
    #[case(Severity::Unset, None)]
    fn labels(#[case] severity: Severity, #[case] expected: Option<&str>) {
        assert_eq!(severity.label(), expected);
    }

    #[test]
    fn unset_changes_no_color() {
        assert!(Severity::Unset.style().is_plain());
        assert!(!Severity::Notice.style().is_plain());
    }

    #[rstest]
    #[case("debug", Severity::Debug)]
    #[case("Waring", Severity::Warning)]
    #[case("warning", Severity::Warning)]
    #[case("none", Severity::Unset)]
    fn parses(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown() {
        let err = "fatal".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown severity: fatal");
    }
}
