//! Fehlertypen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiFehler {
    #[error("Ungültiges Argument: {0}")]
    UngueltigesArgument(String),

    #[error("Berechnung abgebrochen.")]
    Abgebrochen,

    #[error("Ein-/Ausgabefehler: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PiFehler>;
