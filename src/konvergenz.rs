//! Konvergenzverhalten der Referenzrechnung.
//!
//! Die Tabelle zeigt, wie die Abweichung mit jeder Verzehnfachung der
//! Schrittzahl etwa um den Faktor 100 fällt. Der Genauigkeitsvergleich macht
//! den Rundungsfehler der Summation in einfacher Genauigkeit sichtbar.

use std::f64::consts::PI;
use std::io::Write;
use tracing::debug;

use crate::fehler::Result;
use crate::konfiguration::KONVERGENZ_START;
use crate::referenz::{berechne_referenz_pi, Gleitkomma};

/// Eine Zeile der Konvergenztabelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KonvergenzZeile {
    pub schritte: u32,
    pub pi_approx: f64,
    pub abweichung: f64,
}

/// Ergebnis derselben Rechnung mit f32- und f64-Summe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Praezisionsvergleich {
    pub schritte: u32,
    pub einfach: f64,
    pub doppelt: f64,
}

impl Praezisionsvergleich {
    pub fn abweichung_einfach(&self) -> f64 {
        (self.einfach - PI).abs()
    }

    pub fn abweichung_doppelt(&self) -> f64 {
        (self.doppelt - PI).abs()
    }
}

/// Schrittzahlen 10, 100, 1000, ... bis einschließlich `bis`.
///
/// Liegt `bis` unter dem Startwert, besteht die Folge nur aus `bis`.
pub fn zehnerpotenzen(bis: u32) -> Vec<u32> {
    if bis < KONVERGENZ_START {
        return vec![bis];
    }
    std::iter::successors(Some(KONVERGENZ_START), |n| n.checked_mul(10))
        .take_while(|&n| n <= bis)
        .collect()
}

/// Berechnet π in `T` für jede Zehnerpotenz bis `bis`.
pub fn konvergenztabelle<T: Gleitkomma>(bis: u32) -> Result<Vec<KonvergenzZeile>> {
    zehnerpotenzen(bis)
        .into_iter()
        .map(|schritte| -> Result<KonvergenzZeile> {
            let pi_approx = berechne_referenz_pi::<T>(schritte)?;
            let abweichung = (pi_approx - PI).abs();
            debug!(schritte, abweichung, "Konvergenzzeile");
            Ok(KonvergenzZeile {
                schritte,
                pi_approx,
                abweichung,
            })
        })
        .collect()
}

/// Rechnet `schritte` einmal in f32 und einmal in f64.
pub fn vergleiche_genauigkeit(schritte: u32) -> Result<Praezisionsvergleich> {
    Ok(Praezisionsvergleich {
        schritte,
        einfach: berechne_referenz_pi::<f32>(schritte)?,
        doppelt: berechne_referenz_pi::<f64>(schritte)?,
    })
}

pub fn schreibe_tabelle<W: Write>(zeilen: &[KonvergenzZeile], ausgabe: &mut W) -> Result<()> {
    writeln!(ausgabe, "{:>12}  {:>14}  {:>12}", "Schritte", "π Annäherung", "Abweichung")?;
    for zeile in zeilen {
        writeln!(
            ausgabe,
            "{:>12}  {:>14.10}  {:>12.3e}",
            zeile.schritte, zeile.pi_approx, zeile.abweichung
        )?;
    }
    Ok(())
}

pub fn schreibe_vergleich<W: Write>(vergleich: &Praezisionsvergleich, ausgabe: &mut W) -> Result<()> {
    writeln!(ausgabe, "Schritte:        {}", vergleich.schritte)?;
    writeln!(
        ausgabe,
        "f32:             {:.10}  (Abweichung {:.3e})",
        vergleich.einfach,
        vergleich.abweichung_einfach()
    )?;
    writeln!(
        ausgabe,
        "f64:             {:.10}  (Abweichung {:.3e})",
        vergleich.doppelt,
        vergleich.abweichung_doppelt()
    )?;
    Ok(())
}
