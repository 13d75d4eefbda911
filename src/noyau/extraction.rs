// src/noyau/extraction.rs

use regex::Regex;
use std::sync::OnceLock;

/// Motif d’un nombre : signe optionnel, partie entière obligatoire,
/// point + décimales optionnels. `\d` = chiffres décimaux Unicode.
const MOTIF_NOMBRE: &str = r"-?\d+\.?\d*";

/// Un seul chiffre décimal Unicode (même classe que dans MOTIF_NOMBRE).
const MOTIF_CHIFFRE: &str = r"^\d$";

static MOTIF: OnceLock<Option<Regex>> = OnceLock::new();
static CHIFFRE: OnceLock<Option<Regex>> = OnceLock::new();

fn compiler(cellule: &'static OnceLock<Option<Regex>>, motif: &str) -> Option<&'static Regex> {
    cellule
        .get_or_init(|| match Regex::new(motif) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("motif invalide ({motif}): {e}");
                None
            }
        })
        .as_ref()
}

fn motif() -> Option<&'static Regex> {
    compiler(&MOTIF, MOTIF_NOMBRE)
}

/// Extrait tous les nombres d’un texte libre, de gauche à droite.
///
/// Jamais d’erreur :
/// - texte vide / blanc => vide
/// - jeton non convertible => ignoré, on continue
/// - motif indisponible => vide
pub fn extraire_nombres(texte: &str) -> Vec<f64> {
    if texte.trim().is_empty() {
        return Vec::new();
    }

    let Some(re) = motif() else {
        return Vec::new();
    };

    re.find_iter(texte)
        .filter_map(|m| {
            let v = convertir_jeton(m.as_str());
            if v.is_none() {
                log::debug!("jeton ignoré: {:?}", m.as_str());
            }
            v
        })
        .collect()
}

/// Jeton brut -> f64. None si dégénéré ou non convertible.
fn convertir_jeton(brut: &str) -> Option<f64> {
    if brut.is_empty() || brut == "-" || brut == "." {
        return None;
    }

    let ascii = brut.chars().map(chiffre_ascii).collect::<Option<String>>()?;
    ascii.parse::<f64>().ok()
}

fn est_chiffre(c: char) -> bool {
    let mut tampon = [0u8; 4];
    compiler(&CHIFFRE, MOTIF_CHIFFRE).is_some_and(|re| re.is_match(c.encode_utf8(&mut tampon)))
}

/// Ramène un caractère du jeton en ASCII.
///
/// Les chiffres Unicode vont par blocs contigus de 0 à 9 : la valeur d’un chiffre
/// est son écart au début de sa suite de chiffres, modulo 10.
fn chiffre_ascii(c: char) -> Option<char> {
    match c {
        '0'..='9' | '-' | '.' => Some(c),
        _ if est_chiffre(c) => {
            let mut debut = c as u32;
            while let Some(precedent) = debut.checked_sub(1).and_then(char::from_u32) {
                if !est_chiffre(precedent) {
                    break;
                }
                debut -= 1;
            }
            char::from_digit((c as u32 - debut) % 10, 10)
        }
        _ => None,
    }
}
