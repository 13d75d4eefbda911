// Configuration (fichier TOML optionnel)
//
// <config_dir>/somme-intelligente/config.toml
//
//   [historique]
//   fichier = "/chemin/historique.json"
//
//   [affichage]
//   polices = ["/chemin/police.ttf"]
//   delai_felicitations = 0.5

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dossier de l’application (données + configuration).
pub const DOSSIER_APP: &str = "somme-intelligente";

/// Nom du fichier d’historique (compatible avec les anciens fichiers).
pub const FICHIER_HISTORIQUE: &str = "smart_calculator_history.json";

const FICHIER_CONFIG: &str = "config.toml";

/// Délai maximal accepté pour les félicitations (secondes).
pub const DELAI_MAX: f64 = 60.0;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Section [historique]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoriqueConfig {
    /// Chemin explicite du fichier d’historique.
    #[serde(default)]
    pub fichier: Option<PathBuf>,
}

/// Section [affichage]
#[derive(Debug, Clone, Deserialize)]
pub struct AffichageConfig {
    /// Polices essayées avant les candidates intégrées.
    #[serde(default)]
    pub polices: Vec<PathBuf>,

    /// Délai (secondes) avant le message de félicitations.
    #[serde(default = "delai_felicitations_defaut")]
    pub delai_felicitations: f64,
}

fn delai_felicitations_defaut() -> f64 {
    0.5
}

impl Default for AffichageConfig {
    fn default() -> Self {
        Self {
            polices: Vec::new(),
            delai_felicitations: delai_felicitations_defaut(),
        }
    }
}

/// Configuration racine
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub historique: HistoriqueConfig,

    #[serde(default)]
    pub affichage: AffichageConfig,
}

impl Config {
    /// Chemin de l’historique : configuré, sinon dossier de données,
    /// sinon dossier personnel, sinon dossier courant.
    pub fn chemin_historique(&self) -> PathBuf {
        if let Some(p) = &self.historique.fichier {
            return p.clone();
        }
        if let Some(data) = dirs::data_dir() {
            return data.join(DOSSIER_APP).join(FICHIER_HISTORIQUE);
        }
        if let Some(home) = dirs::home_dir() {
            return home.join(FICHIER_HISTORIQUE);
        }
        PathBuf::from(FICHIER_HISTORIQUE)
    }

    /// Délai borné : jamais négatif ni NaN, au plus DELAI_MAX.
    pub fn delai_felicitations(&self) -> f64 {
        let d = self.affichage.delai_felicitations;
        if d.is_finite() && d >= 0.0 {
            d.min(DELAI_MAX)
        } else {
            delai_felicitations_defaut()
        }
    }
}

pub fn chemin_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER_CONFIG))
}

pub fn lire_config(chemin: &Path) -> Result<Config, ErreurConfig> {
    let texte = fs::read_to_string(chemin)?;
    Ok(toml::from_str(&texte)?)
}

/// Charge la configuration utilisateur. Absente => défauts ; invalide => défauts + avertissement.
pub fn charger_config() -> Config {
    let Some(chemin) = chemin_config() else {
        return Config::default();
    };

    if !chemin.exists() {
        return Config::default();
    }

    match lire_config(&chemin) {
        Ok(config) => {
            log::info!("configuration chargée: {}", chemin.display());
            config
        }
        Err(e) => {
            log::warn!("configuration ignorée ({}): {e}", chemin.display());
            Config::default()
        }
    }
}
