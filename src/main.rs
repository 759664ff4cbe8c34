use anyhow::Result;
use clap::Parser;                                  // Für Kommandozeilenargumente
use std::io::{self, Write};                        // Für Ein-/Ausgabe-Operationen
use tracing::info;

use pi_referenz::dtype::{DTYPE, DTYPE_NAME};
use pi_referenz::eingabe::frage_schrittzahl;
use pi_referenz::konfiguration::Argumente;
use pi_referenz::konvergenz::{
    konvergenztabelle, schreibe_tabelle, schreibe_vergleich, vergleiche_genauigkeit,
};
use pi_referenz::{
    compute_reference_pi, formatiere_referenz, miss_referenz_pi, protokoll, PiFehler,
};

// Begrüßung für den interaktiven Modus
fn zeige_banner() {
    println!("\nAnnäherung von Pi (π) durch die Mittelpunktsregel für ∫₀¹ 4/(1+x²) dx.");
    println!("Sequentielle CPU-Referenz zur Prüfung beschleunigter Implementierungen.");
    println!("Gleitkommatyp: {}", DTYPE_NAME);
}

// Hauptprogramm
fn main() -> Result<()> {
    let args = Argumente::parse();
    protokoll::initialisiere(args.verbose);

    // Schrittzahl aus den Argumenten oder interaktiv abfragen
    let schritte = match args.schritte {
        Some(n) => n,
        None => {
            zeige_banner();
            let stdin = io::stdin();
            match frage_schrittzahl(&mut stdin.lock(), &mut io::stdout()) {
                Ok(n) => n,
                Err(PiFehler::Abgebrochen) => {
                    println!("\n{}", PiFehler::Abgebrochen);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    };
    info!(schritte, dtype = DTYPE_NAME, "Schrittzahl festgelegt");

    let stdout = io::stdout();
    let mut ausgabe = stdout.lock();

    if args.konvergenz {
        let tabelle = konvergenztabelle::<DTYPE>(schritte)?;
        schreibe_tabelle(&tabelle, &mut ausgabe)?;
        writeln!(ausgabe)?;
    }

    if args.vergleich {
        let vergleich = vergleiche_genauigkeit(schritte)?;
        schreibe_vergleich(&vergleich, &mut ausgabe)?;
        writeln!(ausgabe)?;
    }

    if args.details {
        let ergebnis = miss_referenz_pi::<DTYPE>(schritte)?;
        writeln!(ausgabe, "{}", formatiere_referenz(ergebnis.pi_approx))?;
        writeln!(ausgabe, "Eigentliches π:  {:.10}", std::f64::consts::PI)?;
        writeln!(ausgabe, "Abweichung:      {:.10}", ergebnis.abweichung())?;
        writeln!(ausgabe, "Schritte:        {}", ergebnis.schritte)?;
        writeln!(ausgabe, "Berechnungszeit: {:.2?}", ergebnis.dauer)?;
    } else {
        ausgabe.flush()?;
        drop(ausgabe);
        compute_reference_pi(schritte)?;
    }

    Ok(())
}
