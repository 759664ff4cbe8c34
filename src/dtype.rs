// Gleitkommabreite, die zur Übersetzungszeit festgelegt wird.
// Standard ist doppelte Genauigkeit; mit dem Feature `einfache-genauigkeit` wird f32 verwendet.

/// Gleitkommatyp für die gesamte Referenzrechnung.
#[cfg(not(feature = "einfache-genauigkeit"))]
#[allow(clippy::upper_case_acronyms)]
pub type DTYPE = f64;

/// Gleitkommatyp für die gesamte Referenzrechnung.
#[cfg(feature = "einfache-genauigkeit")]
#[allow(clippy::upper_case_acronyms)]
pub type DTYPE = f32;

/// Lesbarer Name der gewählten Genauigkeit (für Log-Ausgaben).
pub const DTYPE_NAME: &str = if cfg!(feature = "einfache-genauigkeit") {
    "f32"
} else {
    "f64"
};
