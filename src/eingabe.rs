use std::io::{BufRead, Write};     // Für Ein-/Ausgabe-Operationen
use tracing::warn;

use crate::fehler::{PiFehler, Result};
use crate::konfiguration::{DEFAULT_SCHRITTE, MIN_SCHRITTE};

// Hilfsfunktion für Benutzereingabe
pub fn lies_eingabe<R: BufRead, W: Write>(
    eingabe: &mut R,
    ausgabe: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(ausgabe, "{}", prompt)?;
    ausgabe.flush()?;
    let mut zeile = String::new();
    eingabe.read_line(&mut zeile)?;
    Ok(zeile.trim().to_string())
}

// Validierung der eingegebenen Schrittzahl
pub fn validiere_schrittzahl(eingabe: &str) -> Result<u32> {
    match eingabe.trim().parse::<u32>() {
        Ok(n) if n >= MIN_SCHRITTE => Ok(n),
        Ok(_) => Err(PiFehler::UngueltigesArgument(format!(
            "Schrittzahl muss mindestens {} sein.",
            MIN_SCHRITTE
        ))),
        Err(_) => Err(PiFehler::UngueltigesArgument(
            "Ungültige Eingabe. Bitte gib eine positive ganze Zahl ein.".to_string(),
        )),
    }
}

/// Fragt die Schrittzahl ab und bestätigt den Start der Berechnung.
///
/// Ungültige Eingaben fallen auf [`DEFAULT_SCHRITTE`] zurück. Beginnt die
/// Antwort auf die Rückfrage mit `n`, wird [`PiFehler::Abgebrochen`] geliefert.
pub fn frage_schrittzahl<R: BufRead, W: Write>(eingabe: &mut R, ausgabe: &mut W) -> Result<u32> {
    let zeile = lies_eingabe(eingabe, ausgabe, "\nGib die Anzahl der Schritte ein: ")?;

    // Validierung mit Fallback auf Standardwert
    let schritte = match validiere_schrittzahl(&zeile) {
        Ok(n) => n,
        Err(e) => {
            warn!(eingabe = %zeile, "{}", e);
            writeln!(ausgabe, "Verwende Standardwert von {} Schritten.", DEFAULT_SCHRITTE)?;
            DEFAULT_SCHRITTE
        }
    };

    // Bestätigung durch Benutzer
    if lies_eingabe(
        eingabe,
        ausgabe,
        "\nMöchtest du mit der Berechnung fortfahren? (Y/n): ",
    )?
    .to_lowercase()
    .starts_with('n')
    {
        return Err(PiFehler::Abgebrochen);
    }

    Ok(schritte)
}
