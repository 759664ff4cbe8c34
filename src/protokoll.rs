// Einrichtung der Log-Ausgabe auf stderr, damit stdout nur Ergebnisse enthält.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Umgebungsvariable für eigene Filterregeln, z.B. `PI_REFERENZ_LOG=debug`.
pub const LOG_VARIABLE: &str = "PI_REFERENZ_LOG";

/// Log-Stufe aus der Anzahl der `-v` Schalter.
pub fn stufe(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn initialisiere(verbose: u8) {
    let format = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .compact();

    let filter = EnvFilter::builder()
        .with_default_directive(stufe(verbose).into())
        .with_env_var(LOG_VARIABLE)
        .from_env_lossy();

    // Ein zweiter Aufruf (z.B. in Tests) lässt den bestehenden Subscriber stehen.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mehr_v_mehr_ausgabe() {
        assert_eq!(stufe(0), LevelFilter::WARN);
        assert_eq!(stufe(1), LevelFilter::INFO);
        assert_eq!(stufe(2), LevelFilter::DEBUG);
        assert_eq!(stufe(7), LevelFilter::TRACE);
    }

    #[test]
    fn doppelte_initialisierung_ist_harmlos() {
        initialisiere(0);
        initialisiere(2);
    }
}
