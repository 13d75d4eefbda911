// src/noyau/agregat.rs

use super::decimal::{arrondir, PRECISION};

/// Somme arrondie à PRECISION décimales (anti-bruit flottant).
/// Séquence vide => 0.0.
pub fn somme(nombres: &[f64]) -> f64 {
    if nombres.is_empty() {
        return 0.0;
    }
    arrondir(nombres.iter().sum(), PRECISION)
}

/// Statistiques descriptives d’une séquence NON vide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistiques {
    pub nombre: usize,
    pub somme: f64,
    pub min: f64,
    pub max: f64,
    /// somme (arrondie) / nombre
    pub moyenne: f64,
}

impl Statistiques {
    /// None si la séquence est vide : min/max/moyenne n’y ont pas de sens.
    pub fn depuis(nombres: &[f64]) -> Option<Self> {
        let (&premier, reste) = nombres.split_first()?;

        let (min, max) = reste
            .iter()
            .fold((premier, premier), |(lo, hi), &x| (lo.min(x), hi.max(x)));

        let somme = somme(nombres);
        let nombre = nombres.len();

        Some(Self {
            nombre,
            somme,
            min,
            max,
            moyenne: somme / nombre as f64,
        })
    }
}
