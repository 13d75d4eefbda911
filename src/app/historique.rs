//! src/app/historique.rs
//!
//! Historique des opérations (seul état durable de l’application).
//!
//! Contrats :
//! - Fichier JSON UTF-8 : tableau de `{timestamp, numbers, result, count}`.
//! - Au plus HISTORIQUE_MAX opérations (les plus anciennes partent en premier).
//! - Fichier absent / corrompu / pas un tableau => historique vide, jamais d’échec au démarrage.
//! - Sauvegarde = réécriture complète du fichier.
//! - inf / NaN écrits "Infinity" / "-Infinity" / "NaN" (JSON n’a pas de nombre pour eux).
//! - Une entrée dont `count` ne vaut pas `numbers.len()` est ignorée au chargement.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nombre maximal d’opérations conservées.
pub const HISTORIQUE_MAX: usize = 100;

/// Format d’horodatage écrit (ISO-8601 local, microsecondes).
const FORMAT_HORODATAGE: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Error)]
pub enum ErreurHistorique {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON invalide: {0}")]
    Json(#[from] serde_json::Error),

    #[error("le fichier d’historique n’est pas un tableau JSON")]
    PasUnTableau,
}

/* ------------------------ Opération ------------------------ */

/// Une opération réussie, figée à sa création.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "timestamp")]
    horodatage: String,

    #[serde(rename = "numbers", with = "flottants")]
    nombres: Vec<f64>,

    #[serde(rename = "result", with = "flottant")]
    resultat: f64,

    #[serde(rename = "count")]
    nombre: usize,
}

impl Operation {
    /// Horodatée maintenant (heure locale). `nombre` suit toujours `nombres`.
    pub fn nouvelle(nombres: Vec<f64>, resultat: f64) -> Self {
        let horodatage = Local::now().format(FORMAT_HORODATAGE).to_string();
        Self::avec_horodatage(horodatage, nombres, resultat)
    }

    pub fn avec_horodatage(horodatage: impl Into<String>, nombres: Vec<f64>, resultat: f64) -> Self {
        let nombre = nombres.len();
        Self {
            horodatage: horodatage.into(),
            nombres,
            resultat,
            nombre,
        }
    }

    pub fn nombres(&self) -> &[f64] {
        &self.nombres
    }

    pub fn resultat(&self) -> f64 {
        self.resultat
    }

    pub fn nombre(&self) -> usize {
        self.nombre
    }

    /// Heure de l’opération (ISO local ou RFC 3339). None si illisible.
    pub fn heure(&self) -> Option<NaiveTime> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.horodatage, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.time());
        }
        DateTime::parse_from_rfc3339(&self.horodatage)
            .ok()
            .map(|dt| dt.naive_local().time())
    }
}

/* ------------------------ Flottants JSON ------------------------ */

/// f64 tel qu’écrit dans le fichier : nombre JSON, ou texte pour inf / NaN.
#[derive(Clone, Copy, Debug)]
struct Flottant(f64);

impl Serialize for Flottant {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let x = self.0;
        if x.is_nan() {
            s.serialize_str("NaN")
        } else if x == f64::INFINITY {
            s.serialize_str("Infinity")
        } else if x == f64::NEG_INFINITY {
            s.serialize_str("-Infinity")
        } else {
            s.serialize_f64(x)
        }
    }
}

struct VisiteurFlottant;

impl<'de> Visitor<'de> for VisiteurFlottant {
    type Value = Flottant;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("un nombre, \"Infinity\", \"-Infinity\" ou \"NaN\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Flottant, E> {
        Ok(Flottant(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Flottant, E> {
        Ok(Flottant(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Flottant, E> {
        Ok(Flottant(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Flottant, E> {
        match v {
            "Infinity" => Ok(Flottant(f64::INFINITY)),
            "-Infinity" => Ok(Flottant(f64::NEG_INFINITY)),
            "NaN" => Ok(Flottant(f64::NAN)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Flottant {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(VisiteurFlottant)
    }
}

mod flottant {
    use super::Flottant;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
        Flottant(*x).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Flottant::deserialize(d).map(|f| f.0)
    }
}

mod flottants {
    use super::Flottant;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &[f64], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(v.iter().copied().map(Flottant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
        let v = Vec::<Flottant>::deserialize(d)?;
        Ok(v.into_iter().map(|f| f.0).collect())
    }
}

/* ------------------------ Store ------------------------ */

/// Historique borné, possédé par l’UI et injecté dans l’état.
#[derive(Clone, Debug, Default)]
pub struct HistoriqueStore {
    chemin: Option<PathBuf>,
    operations: Vec<Operation>,
}

impl HistoriqueStore {
    /// Historique sans fichier (wasm, tests).
    pub fn en_memoire() -> Self {
        Self::default()
    }

    /// Charge l’historique depuis `chemin`. Toute erreur => historique vide (journalisée).
    pub fn charger(chemin: impl Into<PathBuf>) -> Self {
        let chemin = chemin.into();

        let operations = if chemin.exists() {
            match lire_operations(&chemin) {
                Ok(ops) => ops,
                Err(e) => {
                    log::warn!("historique illisible ({}): {e}", chemin.display());
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let mut store = Self {
            chemin: Some(chemin),
            operations,
        };
        store.borner();
        log::info!("historique chargé: {} opération(s)", store.len());
        store
    }

    /// Ajoute une opération en fin de journal, puis borne à HISTORIQUE_MAX.
    pub fn ajouter(&mut self, op: Operation) {
        self.operations.push(op);
        self.borner();
    }

    fn borner(&mut self) {
        if self.operations.len() > HISTORIQUE_MAX {
            let excedent = self.operations.len() - HISTORIQUE_MAX;
            self.operations.drain(..excedent);
        }
    }

    /// Réécrit tout le fichier. Sans chemin : rien à faire.
    pub fn sauvegarder(&self) -> Result<(), ErreurHistorique> {
        let Some(chemin) = &self.chemin else {
            return Ok(());
        };

        if let Some(parent) = chemin.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.operations)?;
        fs::write(chemin, json)?;
        Ok(())
    }

    /// Toutes les opérations, de la plus ancienne à la plus récente.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Les `n` plus récentes, la plus récente d’abord.
    pub fn recentes(&self, n: usize) -> impl Iterator<Item = &Operation> {
        self.operations.iter().rev().take(n)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Lit un fichier d’historique. Les entrées mal formées d’un tableau valide sont ignorées.
pub fn lire_operations(chemin: &Path) -> Result<Vec<Operation>, ErreurHistorique> {
    let texte = fs::read_to_string(chemin)?;
    let valeur: serde_json::Value = serde_json::from_str(&texte)?;

    let serde_json::Value::Array(entrees) = valeur else {
        return Err(ErreurHistorique::PasUnTableau);
    };

    Ok(entrees
        .into_iter()
        .filter_map(|e| match serde_json::from_value::<Operation>(e) {
            Ok(op) if op.nombre == op.nombres.len() => Some(op),
            Ok(op) => {
                log::warn!(
                    "entrée d’historique ignorée: count={} pour {} nombre(s)",
                    op.nombre,
                    op.nombres.len()
                );
                None
            }
            Err(err) => {
                log::warn!("entrée d’historique ignorée: {err}");
                None
            }
        })
        .collect())
}
