//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de l’application (entrée, résultat, infos, fenêtres ouvertes,
//! félicitations en attente) et l’historique injecté, puis offrir les commandes
//! de l’interface (calculer / effacer / historique / aide) sans logique d’affichage.
//!
//! Contrats :
//! - Le calcul passe uniquement par le noyau.
//! - Un calcul réussi ajoute UNE opération à l’historique puis le sauvegarde.
//! - Une erreur de sauvegarde est journalisée, jamais remontée à l’UI.

use crate::noyau::{self, Calcul, ErreurCalcul};

use super::historique::{HistoriqueStore, Operation};
use super::messages::{
    message_felicitations, ERREUR_AUCUN_NOMBRE, ERREUR_ENTREE_VIDE, HISTORIQUE_VIDE,
    INVITE_RESULTAT, TEXTE_AIDE, TITRE_AIDE, TITRE_ERREUR, TITRE_FELICITATIONS, TITRE_HISTORIQUE,
};

/// Opérations listées dans la fenêtre Historique.
pub const NB_FENETRE_HISTORIQUE: usize = 10;

/// Opérations listées dans le panneau « Dernières opérations ».
pub const NB_PANNEAU_RECENT: usize = 5;

/// Commandes offertes à la vue (boutons, raccourcis clavier).
pub trait Commandes {
    /// Extrait, additionne, affiche et enregistre.
    fn calculer_texte(&mut self, texte: &str);

    /// Vide l’entrée et remet l’affichage du résultat à l’invite.
    fn effacer(&mut self);

    fn afficher_historique(&mut self);

    fn afficher_aide(&mut self);
}

/// Fenêtre modale ouverte par-dessus l’écran principal.
#[derive(Clone, Debug, PartialEq)]
pub enum Fenetre {
    Message { titre: String, texte: String },
    Historique,
}

/// Félicitations différées : l’échéance est fixée à la première frame qui les voit.
#[derive(Clone, Debug, PartialEq)]
pub struct Felicitations {
    pub message: String,
    pub echeance: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct AppSomme {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub infos: String,

    // --- état durable (injecté) ---
    pub historique: HistoriqueStore,

    // --- fenêtres (la dernière est au premier plan) ---
    pub fenetres: Vec<Fenetre>,

    // --- félicitations ---
    pub felicitations: Option<Felicitations>,
    pub delai_felicitations: f64,

    // --- UX ---
    pub focus_entree: bool,
}

impl AppSomme {
    pub fn new(historique: HistoriqueStore, delai_felicitations: f64) -> Self {
        Self {
            entree: String::new(),
            resultat: INVITE_RESULTAT.to_string(),
            infos: String::new(),
            historique,
            fenetres: Vec::new(),
            felicitations: None,
            delai_felicitations,
            focus_entree: true,
        }
    }

    /// Calcule le contenu courant de l’entrée.
    pub fn calculer(&mut self) {
        let texte = self.entree.clone();
        self.calculer_texte(&texte);
    }

    pub fn ouvrir_message(&mut self, titre: impl Into<String>, texte: impl Into<String>) {
        self.fenetres.push(Fenetre::Message {
            titre: titre.into(),
            texte: texte.into(),
        });
    }

    /// Ferme la fenêtre au premier plan.
    pub fn fermer_fenetre(&mut self) {
        self.fenetres.pop();
        self.focus_entree = true;
    }

    pub fn fenetre_active(&self) -> Option<&Fenetre> {
        self.fenetres.last()
    }

    /// Fait avancer les félicitations en attente.
    ///
    /// Renvoie le temps restant (secondes) si elles ne sont pas encore dues,
    /// pour que la vue redemande une frame à temps.
    pub fn avancer_felicitations(&mut self, maintenant: f64) -> Option<f64> {
        let f = self.felicitations.as_mut()?;
        let echeance = *f.echeance.get_or_insert(maintenant + self.delai_felicitations);

        if maintenant < echeance {
            return Some(echeance - maintenant);
        }

        if let Some(f) = self.felicitations.take() {
            self.ouvrir_message(TITRE_FELICITATIONS, f.message);
        }
        None
    }

    fn deposer_resultat(&mut self, calcul: &Calcul) {
        self.resultat = format!("Résultat : {}", calcul.somme_formatee());
        self.infos = format!(
            "Nombre de valeurs : {}\nMinimum : {}\nMaximum : {}\nMoyenne : {}",
            calcul.stats.nombre,
            calcul.min_formate(),
            calcul.max_formate(),
            calcul.moyenne_formatee(),
        );
    }

    fn enregistrer(&mut self, calcul: Calcul) {
        self.historique
            .ajouter(Operation::nouvelle(calcul.nombres, calcul.stats.somme));

        if let Err(e) = self.historique.sauvegarder() {
            log::error!("sauvegarde de l’historique impossible: {e}");
        }
    }
}

impl Commandes for AppSomme {
    fn calculer_texte(&mut self, texte: &str) {
        self.focus_entree = true;

        let calcul = match noyau::calculer(texte) {
            Ok(c) => c,
            Err(ErreurCalcul::EntreeVide) => {
                self.ouvrir_message(TITRE_ERREUR, ERREUR_ENTREE_VIDE);
                return;
            }
            Err(ErreurCalcul::AucunNombre) => {
                self.ouvrir_message(TITRE_ERREUR, ERREUR_AUCUN_NOMBRE);
                return;
            }
        };

        self.deposer_resultat(&calcul);

        let message = message_felicitations(calcul.stats.nombre, calcul.stats.somme);
        self.enregistrer(calcul);

        self.felicitations = Some(Felicitations {
            message,
            echeance: None,
        });
    }

    fn effacer(&mut self) {
        self.entree.clear();
        self.resultat = INVITE_RESULTAT.to_string();
        self.infos.clear();
        self.focus_entree = true;
    }

    fn afficher_historique(&mut self) {
        if self.historique.is_empty() {
            self.ouvrir_message(TITRE_HISTORIQUE, HISTORIQUE_VIDE);
        } else {
            self.fenetres.push(Fenetre::Historique);
        }
    }

    fn afficher_aide(&mut self) {
        self.ouvrir_message(TITRE_AIDE, TEXTE_AIDE);
    }
}

/* ------------------------ Lignes d’historique (texte seul) ------------------------ */

fn heure_txt(op: &Operation, format: &str) -> String {
    op.heure()
        .map(|t| t.format(format).to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Ligne du panneau « Dernières opérations ».
pub fn ligne_recente(op: &Operation) -> String {
    format!(
        "Résultat : {} ({} nombres) - {}",
        noyau::formater_nombre(op.resultat()),
        op.nombre(),
        heure_txt(op, "%H:%M"),
    )
}

/// Entrée numérotée (1 = la plus récente) de la fenêtre Historique.
pub fn ligne_historique(rang: usize, op: &Operation) -> String {
    format!(
        "{rang}. Résultat : {}\n   Nombre de valeurs : {} - Heure : {}",
        noyau::formater_nombre(op.resultat()),
        op.nombre(),
        heure_txt(op, "%H:%M:%S"),
    )
}
