use pi_referenz::konvergenz::{konvergenztabelle, vergleiche_genauigkeit};
use pi_referenz::{berechne_referenz_pi, schreibe_referenz_pi, PiFehler, DTYPE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

#[test]
fn million_schritte_treffen_pi() {
    let wert = berechne_referenz_pi::<f64>(1_000_000).unwrap();
    assert!((wert - PI).abs() < 5e-6, "{}", wert);
}

#[test]
fn konvergenz_bei_zehnerpotenzen() {
    let mut letzte = f64::INFINITY;
    for schritte in [10, 100, 1000, 10_000] {
        let abweichung = (berechne_referenz_pi::<f64>(schritte).unwrap() - PI).abs();
        assert!(abweichung < letzte, "{} Schritte: {} >= {}", schritte, abweichung, letzte);
        letzte = abweichung;
    }
}

#[test]
fn abweichung_faellt_quadratisch() {
    let tabelle = konvergenztabelle::<f64>(1000).unwrap();
    for paar in tabelle.windows(2) {
        // Verzehnfachte Schrittzahl: Fehler etwa um Faktor 100 kleiner
        let faktor = paar[0].abweichung / paar[1].abweichung;
        assert!(faktor > 50.0 && faktor < 200.0, "Faktor {}", faktor);
    }
}

#[test]
fn ein_schritt() {
    let wert = berechne_referenz_pi::<f64>(1).unwrap();
    assert!((wert - 4.0 * 1.0 * (1.0 / (1.0 + 0.25))).abs() < 1e-15);
}

#[test]
fn wiederholung_ist_bitgleich() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let schritte = rng.gen_range(1..50_000u32);

        let a = berechne_referenz_pi::<f64>(schritte).unwrap();
        let b = berechne_referenz_pi::<f64>(schritte).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "f64, {} Schritte", schritte);

        let a = berechne_referenz_pi::<f32>(schritte).unwrap();
        let b = berechne_referenz_pi::<f32>(schritte).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "f32, {} Schritte", schritte);
    }
}

#[test]
fn ausgabe_ist_bitgleich() {
    let mut erste = Vec::new();
    let mut zweite = Vec::new();
    schreibe_referenz_pi::<DTYPE, _>(123_457, &mut erste).unwrap();
    schreibe_referenz_pi::<DTYPE, _>(123_457, &mut zweite).unwrap();
    assert_eq!(erste, zweite);
}

#[test]
fn ausgabeformat() {
    let mut puffer = Vec::new();
    schreibe_referenz_pi::<f64, _>(1_000_000, &mut puffer).unwrap();
    let zeile = String::from_utf8(puffer).unwrap();
    let zeile = zeile.strip_suffix(" \n").unwrap();

    let wert = zeile.strip_prefix("Pi ref CPU : ").unwrap();
    let (ganz, nachkomma) = wert.split_once('.').unwrap();
    assert_eq!(ganz, "3");
    assert_eq!(nachkomma.len(), 10);
    assert!(nachkomma.chars().all(|c| c.is_ascii_digit()));
    assert!(wert.starts_with("3.14159"));
}

#[test]
fn doppelte_genauigkeit_ist_genauer() {
    let vergleich = vergleiche_genauigkeit(10_000_000).unwrap();
    assert_ne!(vergleich.einfach, vergleich.doppelt);
    assert!(vergleich.abweichung_doppelt() < vergleich.abweichung_einfach());
    assert!(vergleich.abweichung_doppelt() < 1e-8);
}

#[test]
fn null_schritte() {
    assert!(matches!(
        berechne_referenz_pi::<f32>(0),
        Err(PiFehler::UngueltigesArgument(_))
    ));
    let mut puffer = Vec::new();
    assert!(schreibe_referenz_pi::<f64, _>(0, &mut puffer).is_err());
    assert!(puffer.is_empty());
}

#[test]
fn zeilen_der_c_referenz() {
    let zeile = |n| {
        let mut puffer = Vec::new();
        schreibe_referenz_pi::<f32, _>(n, &mut puffer).unwrap();
        String::from_utf8(puffer).unwrap()
    };
    assert_eq!(zeile(3), "Pi ref CPU : 3.1508491184 \n");
    assert_eq!(zeile(10), "Pi ref CPU : 3.1424259654 \n");
    assert_eq!(zeile(1000), "Pi ref CPU : 3.1415931668 \n");

    let mut puffer = Vec::new();
    schreibe_referenz_pi::<f64, _>(1000, &mut puffer).unwrap();
    assert_eq!(puffer, b"Pi ref CPU : 3.1415927369 \n");
}
