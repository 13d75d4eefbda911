//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler extraction / somme / affichage avec des saisies hostiles.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : aucune panique, et le pipeline ne refuse que vide / sans nombre

use std::time::{Duration, Instant};

use super::{calculer, extraire_nombres, formater_nombre, somme, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies (bornée) ------------------------ */

/// Alphabet hostile : chiffres de plusieurs écritures, signes, points, emoji,
/// blancs exotiques, caractères de contrôle.
const ALPHABET: &[char] = &[
    '0', '1', '5', '9', '-', '-', '.', '.', ',', ' ', '\n', '\t', 'a', 'Z', 'é', 'π', '٠', '٣',
    '٩', '٬', '۷', '१', '٫', '🚀', '🧮', '\u{0}', '\u{200B}', '\u{FEFF}', 'e', '+', '∞',
];

fn gen_saisie(rng: &mut Rng, longueur_max: u32) -> String {
    let n = rng.pick(longueur_max + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn contient_chiffre(s: &str) -> bool {
    s.chars().any(|c| c.is_numeric())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_pipeline_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let saisie = gen_saisie(&mut rng, 40);

        match calculer(&saisie) {
            Ok(c) => {
                assert_eq!(c.stats.nombre, c.nombres.len(), "saisie={saisie:?}");
                let _ = c.somme_formatee();
                let _ = c.moyenne_formatee();
                seen_ok += 1;
            }
            Err(ErreurCalcul::EntreeVide) => {
                assert!(saisie.trim().is_empty(), "saisie={saisie:?}");
                seen_err += 1;
            }
            Err(ErreurCalcul::AucunNombre) => {
                assert!(extraire_nombres(&saisie).is_empty(), "saisie={saisie:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucun refus vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_sans_chiffre_donne_vide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let saisie: String = gen_saisie(&mut rng, 30)
            .chars()
            .filter(|c| !c.is_numeric())
            .collect();
        assert!(!contient_chiffre(&saisie));
        assert!(extraire_nombres(&saisie).is_empty(), "saisie={saisie:?}");
    }
}

#[test]
fn fuzz_safe_affichage_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let saisie = gen_saisie(&mut rng, 24);
        let a = formater_nombre(somme(&extraire_nombres(&saisie)));
        let b = formater_nombre(somme(&extraire_nombres(&saisie)));
        assert_eq!(a, b, "saisie={saisie:?}");
        assert!(!a.contains(','), "virgule ASCII dans {a:?}");
    }
}

#[test]
fn fuzz_safe_octets_arbitraires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xDEAD_BEEF_u64);

    for _ in 0..200 {
        budget(t0, max);

        let octets: Vec<u8> = (0..rng.pick(64)).map(|_| rng.pick(256) as u8).collect();
        let saisie = String::from_utf8_lossy(&octets);
        let _ = calculer(&saisie);
        let _ = formater_nombre(somme(&extraire_nombres(&saisie)));
    }
}

#[test]
fn fuzz_safe_valeurs_extremes() {
    for x in [
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        5e-324,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ] {
        let _ = formater_nombre(x);
        let _ = somme(&[x, x]);
    }

    // f64::MAX entier : tous les chiffres, aucun point
    let s = formater_nombre(f64::MAX);
    assert!(!s.contains('.'));
    assert!(s.starts_with("179٬769"));
}
