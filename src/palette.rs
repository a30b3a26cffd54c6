use std::str::FromStr;

use crate::error::Error;

/// The nine terminal colors a [`crate::ColorSpec`] may name, `None` meaning
/// "leave this layer alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    None = 0,
    Black = 1,
    Red = 2,
    Green = 3,
    Yellow = 4,
    Blue = 5,
    Magenta = 6,
    Cyan = 7,
    White = 8,
}

impl Palette {
    pub const ALL: [Palette; 9] = [
        Palette::None,
        Palette::Black,
        Palette::Red,
        Palette::Green,
        Palette::Yellow,
        Palette::Blue,
        Palette::Magenta,
        Palette::Cyan,
        Palette::White,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::None => "none",
            Palette::Black => "black",
            Palette::Red => "red",
            Palette::Green => "green",
            Palette::Yellow => "yellow",
            Palette::Blue => "blue",
            Palette::Magenta => "magenta",
            Palette::Cyan => "cyan",
            Palette::White => "white",
        }
    }
}

impl TryFrom<i32> for Palette {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Palette::ALL.get(i).copied())
            .ok_or(Error::PaletteOutOfRange { index })
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i32>() {
            return Palette::try_from(index);
        }

        Palette::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidColorSpec(format!("unknown color `{s}`")))
    }
}

/// A validated foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Palette,
    pub fg_bright: bool,
    pub bg: Palette,
    pub bg_bright: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        fg: Palette::None,
        fg_bright: false,
        bg: Palette::None,
        bg_bright: false,
    };

    pub const fn new(fg: Palette, fg_bright: bool, bg: Palette, bg_bright: bool) -> Self {
        Self {
            fg,
            fg_bright,
            bg,
            bg_bright,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.fg == Palette::None && self.bg == Palette::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Palette::None)]
    #[case(2, Palette::Red)]
    #[case(8, Palette::White)]
    fn index_in_range_maps_to_color(#[case] index: i32, #[case] expected: Palette) {
        assert_eq!(Palette::try_from(index).unwrap(), expected);
        assert_eq!(i32::from(expected.index()), index);
    }

    #[rstest]
    #[case(-1)]
    #[case(9)]
    #[case(10)]
    #[case(i32::MIN)]
    fn index_out_of_range_is_rejected(#[case] index: i32) {
        let err = Palette::try_from(index).unwrap_err();
        assert!(matches!(err, Error::PaletteOutOfRange { index: i } if i == index));
        assert_eq!(err.to_string(), "index out of range");
    }

    #[test]
    fn parses_names_and_indexes() {
        assert_eq!("Magenta".parse::<Palette>().unwrap(), Palette::Magenta);
        assert_eq!("7".parse::<Palette>().unwrap(), Palette::Cyan);
        assert!("purple".parse::<Palette>().is_err());
    }
}
