//! Noyau — calcul (pipeline réel)
//!
//! texte -> extraction -> statistiques (somme arrondie, min, max, moyenne)
//!
//! Les deux refus (entrée vide, aucun nombre) sont faits ici, avant l’agrégat :
//! min/max/moyenne ne sont jamais calculés sur une séquence vide.

use thiserror::Error;

use super::agregat::Statistiques;
use super::extraction::extraire_nombres;
use super::format::formater_nombre;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("Aucun nombre valide dans le texte saisi")]
    AucunNombre,
}

/// Résultat d’un calcul réussi : nombres extraits + statistiques.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub nombres: Vec<f64>,
    pub stats: Statistiques,
}

impl Calcul {
    pub fn somme_formatee(&self) -> String {
        formater_nombre(self.stats.somme)
    }

    pub fn min_formate(&self) -> String {
        formater_nombre(self.stats.min)
    }

    pub fn max_formate(&self) -> String {
        formater_nombre(self.stats.max)
    }

    pub fn moyenne_formatee(&self) -> String {
        formater_nombre(self.stats.moyenne)
    }
}

/// API publique : extrait, agrège, et renvoie le calcul complet.
pub fn calculer(texte: &str) -> Result<Calcul, ErreurCalcul> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let nombres = extraire_nombres(s);
    let stats = Statistiques::depuis(&nombres).ok_or(ErreurCalcul::AucunNombre)?;

    log::debug!(
        "calcul: {} nombre(s), somme = {}",
        stats.nombre,
        stats.somme
    );

    Ok(Calcul { nombres, stats })
}
