use num_traits::Float;                         // Gemeinsame Schnittstelle für f32 und f64
use std::fmt;
use std::io::{self, Write};                    // Für die Ausgabe der Ergebniszeile
use std::time::{Duration, Instant};            // Für Zeitmessung
use tracing::{debug, info};

use crate::dtype::{DTYPE, DTYPE_NAME};
use crate::fehler::{PiFehler, Result};
use crate::konfiguration::MIN_SCHRITTE;

/// Feste Beschriftung der Ergebniszeile.
pub const BESCHRIFTUNG: &str = "Pi ref CPU : ";

/// Breite, in der Stützstellen und Summe gespeichert werden.
///
/// Die Umwandlungen entsprechen einem `as`-Cast in die jeweilige Breite,
/// damit f32 und f64 dieselben Werte liefern wie eine Implementierung mit
/// gleicher IEEE-754-Breite in einer anderen Sprache.
pub trait Gleitkomma: Float + fmt::Display {
    /// Schleifenindex in die Gleitkommabreite umwandeln.
    fn aus_index(i: u32) -> Self;
    /// Zwischenergebnis auf die Gleitkommabreite runden.
    fn aus_f64(wert: f64) -> Self;
    /// Verlustfrei nach f64 erweitern.
    fn als_f64(self) -> f64;
}

macro_rules! impl_gleitkomma {
    ($($t:ty),*) => {
        $(
            impl Gleitkomma for $t {
                #[inline]
                fn aus_index(i: u32) -> Self {
                    i as $t
                }

                #[inline]
                fn aus_f64(wert: f64) -> Self {
                    wert as $t
                }

                #[inline]
                fn als_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_gleitkomma!(f32, f64);

/// Ergebnis einer gemessenen Referenzrechnung.
#[derive(Debug, Clone, Copy)]
pub struct Ergebnis {
    pub pi_approx: f64,  // Angenäherter Pi Wert
    pub schritte: u32,   // Anzahl der Teilintervalle
    pub dauer: Duration, // Berechnungsdauer
}

impl Ergebnis {
    /// Betrag der Abweichung vom tatsächlichen π.
    pub fn abweichung(&self) -> f64 {
        (self.pi_approx - std::f64::consts::PI).abs()
    }
}

/// Berechnet π mit der Mittelpunktsregel für ∫₀¹ 4/(1+x²) dx.
///
/// - Breite eines Teilintervalls: `schritt = 1 / schritte`
/// - Stützstelle: `x = (i + 0.5) * schritt`
/// - π ≈ 4 * schritt * Σ 1/(1+x²)
///
/// `schritt`, `x`, `x²` und die laufende Summe werden in `T` gespeichert.
/// Die Ausdrücke mit den Konstanten 0.5, 1 und 4 werden in f64 ausgewertet
/// und erst beim Speichern auf `T` gerundet; das Ergebnis bleibt f64.
/// Mit `T = f32` entstehen so dieselben Werte wie bei einer C-Referenz mit
/// `float` und doppelt genauen Literalen. Der globale Fehler fällt mit
/// O(1/schritte²).
///
/// # Fehler
/// `schritte == 0` liefert [`PiFehler::UngueltigesArgument`].
pub fn berechne_referenz_pi<T: Gleitkomma>(schritte: u32) -> Result<f64> {
    if schritte < MIN_SCHRITTE {
        return Err(PiFehler::UngueltigesArgument(format!(
            "Schrittzahl muss mindestens {} sein, war {}",
            MIN_SCHRITTE, schritte
        )));
    }

    let schritt = T::aus_f64(1.0 / T::aus_index(schritte).als_f64());
    let mut summe = T::zero();

    for i in 0..schritte {
        let x = T::aus_f64((T::aus_index(i).als_f64() + 0.5) * schritt.als_f64());
        let quadrat = (x * x).als_f64();     // x² in der Breite von T
        summe = T::aus_f64(summe.als_f64() + 1.0 / (1.0 + quadrat));
    }

    Ok(4.0 * schritt.als_f64() * summe.als_f64())
}

/// Erzeugt die Ergebniszeile mit genau 10 Nachkommastellen.
///
/// Die Zeile endet wie die C-Referenz (`"%.10lf \n"`) mit einem Leerzeichen,
/// damit Ausgaben byteweise verglichen werden können.
pub fn formatiere_referenz(wert: f64) -> String {
    format!("{}{:.10} ", BESCHRIFTUNG, wert)
}

/// Berechnet π und schreibt die Ergebniszeile in `ausgabe`.
pub fn schreibe_referenz_pi<T, W>(schritte: u32, ausgabe: &mut W) -> Result<f64>
where
    T: Gleitkomma,
    W: Write,
{
    let wert = berechne_referenz_pi::<T>(schritte)?;
    writeln!(ausgabe, "{}", formatiere_referenz(wert))?;
    Ok(wert)
}

/// Referenzrechnung mit der übersetzten Genauigkeit `DTYPE`, Ausgabe auf stdout.
pub fn compute_reference_pi(schritte: u32) -> Result<()> {
    debug!(schritte, dtype = DTYPE_NAME, "starte Referenzrechnung");
    let stdout = io::stdout();
    let mut sperre = stdout.lock();
    schreibe_referenz_pi::<DTYPE, _>(schritte, &mut sperre)?;
    sperre.flush()?;
    Ok(())
}

/// Wie [`berechne_referenz_pi`], zusätzlich mit Zeitmessung.
pub fn miss_referenz_pi<T: Gleitkomma>(schritte: u32) -> Result<Ergebnis> {
    let start = Instant::now();
    let pi_approx = berechne_referenz_pi::<T>(schritte)?;
    let dauer = start.elapsed();
    info!(schritte, ?dauer, "Referenzrechnung fertig");

    Ok(Ergebnis {
        pi_approx,
        schritte,
        dauer,
    })
}
