use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write to the terminal: {0}")]
    Io(#[from] io::Error),

    /// A palette index outside `0 ~ 8`.
    #[error("index out of range")]
    PaletteOutOfRange { index: i32 },

    #[error("unknown severity: {0}")]
    InvalidSeverity(String),

    #[error("invalid color spec: {0}")]
    InvalidColorSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
