// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed};

use super::decimal::{arrondi_scaled, texte_decimal, PRECISION};

/// Séparateur de milliers affiché (U+066C, virgule arabe des milliers).
pub const SEPARATEUR_MILLIERS: char = '\u{066C}';

/* ------------------------ Groupement ------------------------ */

/// "1234567" -> "1٬234٬567" (chiffres ASCII seulement, sans signe).
fn grouper_chiffres(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3 * SEPARATEUR_MILLIERS.len_utf8());
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR_MILLIERS);
        }
        out.push(c);
    }
    out
}

fn grouper_entier(n: &BigInt) -> String {
    let chiffres = grouper_chiffres(&n.abs().to_str_radix(10));
    if n.is_negative() {
        format!("-{chiffres}")
    } else {
        chiffres
    }
}

/* ------------------------ Affichage ------------------------ */

/// Formate un nombre pour l’affichage :
/// - entier => groupé, sans point
/// - sinon  => 10 décimales max, zéros finaux retirés, partie entière groupée
/// - échec  => représentation brute du f64
pub fn formater_nombre(x: f64) -> String {
    formater_groupe(x).unwrap_or_else(|| x.to_string())
}

fn formater_groupe(x: f64) -> Option<String> {
    if !x.is_finite() {
        return None;
    }

    if x.fract() == 0.0 {
        return BigInt::from_f64(x).map(|n| grouper_entier(&n));
    }

    let scaled = arrondi_scaled(x, PRECISION)?;
    let texte = texte_decimal(&scaled, PRECISION);
    let texte = texte.trim_end_matches('0').trim_end_matches('.');

    let (signe, corps) = match texte.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", texte),
    };

    match corps.split_once('.') {
        Some((entier, decimales)) => Some(format!(
            "{signe}{}.{decimales}",
            grouper_chiffres(entier)
        )),
        // Arrondi à un entier : ±0 s’affiche "0"
        None if corps == "0" => Some("0".to_string()),
        None => Some(format!("{signe}{}", grouper_chiffres(corps))),
    }
}
