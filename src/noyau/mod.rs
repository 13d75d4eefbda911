//! Noyau Somme intelligente
//!
//! Organisation interne :
//! - extraction.rs : texte libre -> nombres (motif `-?\d+\.?\d*`)
//! - agregat.rs    : somme arrondie + statistiques
//! - decimal.rs    : arrondi décimal exact (rationnels)
//! - format.rs     : affichage groupé (séparateur U+066C)
//! - calcul.rs     : pipeline complet

pub mod agregat;
pub mod calcul;
pub mod decimal;
pub mod extraction;
pub mod format;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use agregat::{somme, Statistiques};
pub use calcul::{calculer, Calcul, ErreurCalcul};
pub use extraction::extraire_nombres;
pub use format::formater_nombre;
