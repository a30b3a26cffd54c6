use std::{fmt::Display, str::FromStr};

use crate::{
    error::{Error, Result},
    palette::{Palette, Style},
};

/// A value with its own colors.
///
/// The indexes are kept raw so that a bad one can still be printed; see
/// [`ColorSpec::style`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorSpec {
    pub fg_color: i32,
    pub fg_bright: bool,
    pub bg_color: i32,
    pub bg_bright: bool,
    pub value: String,
}

impl ColorSpec {
    pub fn new(
        fg_color: i32,
        fg_bright: bool,
        bg_color: i32,
        bg_bright: bool,
        value: impl Into<String>,
    ) -> Self {
        Self {
            fg_color,
            fg_bright,
            bg_color,
            bg_bright,
            value: value.into(),
        }
    }

    pub fn fg(color: Palette, bright: bool, value: impl Into<String>) -> Self {
        Self::new(color.index().into(), bright, 0, false, value)
    }

    pub fn style(&self) -> Result<Style> {
        Ok(Style::new(
            Palette::try_from(self.fg_color)?,
            self.fg_bright,
            Palette::try_from(self.bg_color)?,
            self.bg_bright,
        ))
    }
}

/// Parses `FG[+][,BG[+]]:TEXT`, where colors are names or indexes and `+`
/// marks them bright. Indexes are not range checked here.
impl FromStr for ColorSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (colors, value) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidColorSpec(format!("missing `:` in `{s}`")))?;

        let (fg, bg) = match colors.split_once(',') {
            Some((fg, bg)) => (fg, Some(bg)),
            None => (colors, None),
        };

        let (fg_color, fg_bright) = parse_color(fg)?;
        let (bg_color, bg_bright) = match bg {
            Some(bg) => parse_color(bg)?,
            None => (0, false),
        };

        Ok(Self::new(fg_color, fg_bright, bg_color, bg_bright, value))
    }
}

fn parse_color(s: &str) -> Result<(i32, bool)> {
    let s = s.trim();
    let (name, bright) = match s.strip_suffix('+') {
        Some(name) => (name, true),
        None => (s, false),
    };

    if name.is_empty() {
        return Ok((0, bright));
    }
    if let Ok(index) = name.parse::<i32>() {
        return Ok((index, bright));
    }
    let color: Palette = name.parse()?;
    Ok((color.index().into(), bright))
}

/// One value substituted into a template slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Rendered in the default bright green.
    Plain(String),
    Styled(ColorSpec),
}

impl Arg {
    pub fn plain(value: impl Display) -> Self {
        Arg::Plain(value.to_string())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Plain(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Plain(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Plain(value.clone())
    }
}

impl From<ColorSpec> for Arg {
    fn from(value: ColorSpec) -> Self {
        Arg::Styled(value)
    }
}
