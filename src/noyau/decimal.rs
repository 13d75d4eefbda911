// src/noyau/decimal.rs
//
// Arrondi décimal EXACT d’un f64 (valeur binaire exacte -> rationnel -> entier scalé).
// Sert à la fois à la somme (anti-bruit flottant) et à l’affichage à 10 décimales.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Nombre de décimales conservées (somme + affichage).
pub const PRECISION: usize = 10;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn puissance_dix(n: usize) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

/// Écrit `scaled / 10^digits` avec exactement `digits` chiffres après le point.
/// Tout se fait sur les chiffres de l’entier : aucun passage par f64.
pub fn texte_decimal(scaled: &BigInt, digits: usize) -> String {
    let signe = if scaled.is_negative() { "-" } else { "" };
    let chiffres = scaled.magnitude().to_str_radix(10);

    if digits == 0 {
        return format!("{signe}{chiffres}");
    }

    // au moins un chiffre avant le point
    let chiffres = format!("{chiffres:0>largeur$}", largeur = digits + 1);
    let (entier, fraction) = chiffres.split_at(chiffres.len() - digits);
    format!("{signe}{entier}.{fraction}")
}

/* ------------------------ Arrondi (demi au pair) ------------------------ */

/// r -> entier le plus proche, égalité => pair.
fn arrondi_demi_pair(r: &BigRational) -> BigInt {
    let plancher = r.floor();
    let reste = r - &plancher; // dans [0, 1)
    let base = plancher.to_integer();
    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));

    match reste.cmp(&demi) {
        Ordering::Less => base,
        Ordering::Greater => base + 1,
        Ordering::Equal => {
            if (&base % BigInt::from(2)).is_zero() {
                base
            } else {
                base + 1
            }
        }
    }
}

/// x -> round(x * 10^digits) sur la valeur binaire exacte de x.
/// None si x n’est pas fini (inf / NaN).
pub fn arrondi_scaled(x: f64, digits: usize) -> Option<BigInt> {
    let exact = BigRational::from_float(x)?;
    let scaled = exact * BigRational::from_integer(puissance_dix(digits));
    Some(arrondi_demi_pair(&scaled))
}

/// Arrondit x à `digits` décimales et renvoie le f64 le plus proche du décimal obtenu.
///
/// - inf / NaN : renvoyés tels quels (rien à arrondir)
/// - échec interne : 0.0
pub fn arrondir(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }

    match arrondi_scaled(x, digits) {
        Some(scaled) => texte_decimal(&scaled, digits)
            .parse::<f64>()
            .unwrap_or(0.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texte_decimal_complete_les_zeros() {
        assert_eq!(texte_decimal(&BigInt::from(5), 3), "0.005");
        assert_eq!(texte_decimal(&BigInt::from(-1234), 2), "-12.34");
        assert_eq!(texte_decimal(&BigInt::from(-7), 2), "-0.07");
        assert_eq!(texte_decimal(&BigInt::from(42), 0), "42");
        assert_eq!(texte_decimal(&BigInt::from(0), 2), "0.00");
    }

    #[test]
    fn arrondi_supprime_le_bruit_flottant() {
        assert_eq!(arrondir(0.1 + 0.2, PRECISION), 0.3);
        assert_eq!(arrondir(1.0 - 0.9, PRECISION), 0.1);
    }

    #[test]
    fn egalite_exacte_vers_le_pair() {
        // 0.125 et 0.375 sont exacts en binaire
        assert_eq!(arrondi_scaled(0.125, 2), Some(BigInt::from(12)));
        assert_eq!(arrondi_scaled(0.375, 2), Some(BigInt::from(38)));
        assert_eq!(arrondi_scaled(-0.125, 2), Some(BigInt::from(-12)));
    }

    #[test]
    fn non_finis_inchanges() {
        assert!(arrondir(f64::NAN, PRECISION).is_nan());
        assert_eq!(arrondir(f64::INFINITY, PRECISION), f64::INFINITY);
        assert_eq!(arrondi_scaled(f64::NEG_INFINITY, PRECISION), None);
    }
}
