//! Tests scénarios : le pipeline complet sur des saisies réalistes.
//!
//! - extraction + somme + affichage bout à bout
//! - déterminisme (même texte => même affichage)
//! - budget temps global sur une grosse saisie

use std::time::{Duration, Instant};

use super::{calculer, extraire_nombres, formater_nombre, somme};

fn somme_affichee(texte: &str) -> String {
    formater_nombre(somme(&extraire_nombres(texte)))
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

#[test]
fn scn_virgules_et_decimales() {
    let c = calculer("10, 20, 30.5").unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(c.stats.nombre, 3);
    assert_eq!(c.stats.somme, 60.5);
    assert_eq!(c.stats.min, 10.0);
    assert_eq!(c.stats.max, 30.5);
    assert_eq!(c.moyenne_formatee(), "20.1666666667");
}

#[test]
fn scn_nombres_dans_les_mots() {
    assert_eq!(extraire_nombres("abc123def456"), vec![123.0, 456.0]);
    assert_eq!(somme_affichee("abc123def456"), "579");
}

#[test]
fn scn_negatifs() {
    assert_eq!(extraire_nombres("-5 10"), vec![-5.0, 10.0]);
    assert_eq!(somme(&[-5.0, 10.0]), 5.0);
    assert_eq!(somme_affichee("-1000 -234.5"), "-1٬234.5");
}

#[test]
fn scn_texte_melange() {
    let texte = "Courses: pain 2.35, lait 1.10, fromage 7.8 (total?)";
    assert_eq!(extraire_nombres(texte), vec![2.35, 1.1, 7.8]);
    assert_eq!(somme_affichee(texte), "11.25");
}

#[test]
fn scn_chiffres_arabes_et_groupement() {
    // ١٠٠٠ + ٢٥٠٠ = 3500
    assert_eq!(somme_affichee("١٠٠٠ و ٢٥٠٠"), "3٬500");
}

#[test]
fn scn_montants_a_grands_nombres() {
    assert_eq!(somme_affichee("999999 1"), "1٬000٬000");
    assert_eq!(somme_affichee("1234567"), "1٬234٬567");
}

#[test]
fn scn_deterministe() {
    let texte = "0.1 0.2 0.3 x 44.44 -1.01";
    let a = somme_affichee(texte);
    for _ in 0..20 {
        assert_eq!(somme_affichee(texte), a);
    }
    assert_eq!(a, "44.03");
}

#[test]
fn scn_grosse_saisie_sous_budget() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let texte = (1..=5000).map(|i| i.to_string()).collect::<Vec<_>>().join(", ");
    let c = calculer(&texte).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 5000*5001/2
    assert_eq!(c.stats.somme, 12_502_500.0);
    assert_eq!(c.somme_formatee(), "12٬502٬500");
}
