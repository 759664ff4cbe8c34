//! CPU-Referenz für π mit der Mittelpunktsregel.
//!
//! π = ∫₀¹ 4/(1+x²) dx, angenähert durch die Summe der Rechteckflächen,
//! jeweils ausgewertet in der Mitte jedes Teilintervalls.
//! Die Berechnung ist absichtlich sequentiell: sie dient als Vergleichswert
//! für eine beschleunigte Implementierung.

pub mod dtype;
pub mod eingabe;
pub mod fehler;
pub mod konfiguration;
pub mod konvergenz;
pub mod protokoll;
pub mod referenz;

pub use dtype::DTYPE;
pub use fehler::{PiFehler, Result};
pub use referenz::{
    berechne_referenz_pi, compute_reference_pi, formatiere_referenz, miss_referenz_pi,
    schreibe_referenz_pi, Ergebnis, Gleitkomma,
};
