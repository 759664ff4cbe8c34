// Konfigurationskonstanten und Kommandozeilenargumente
use clap::Parser;

pub const MIN_SCHRITTE: u32 = 1;               // Weniger als ein Teilintervall ergibt keine Schrittweite
pub const DEFAULT_SCHRITTE: u32 = 1_000_000;   // Standardwert für die Schrittzahl
pub const KONVERGENZ_START: u32 = 10;          // Kleinste Schrittzahl der Konvergenztabelle

/// Berechnet die CPU-Referenz für π mit der Mittelpunktsregel.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pi_referenz", version)]
pub struct Argumente {
    /// Anzahl der Teilintervalle; ohne Angabe wird interaktiv gefragt
    pub schritte: Option<u32>,

    /// Konvergenztabelle für 10, 100, ... bis zur Schrittzahl ausgeben
    #[arg(long)]
    pub konvergenz: bool,

    /// Einfache und doppelte Genauigkeit gegenüberstellen
    #[arg(long)]
    pub vergleich: bool,

    /// Zusätzlich tatsächliches π, Abweichung und Dauer ausgeben
    #[arg(long)]
    pub details: bool,

    /// Mehr Log-Ausgaben (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
