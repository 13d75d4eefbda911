// src/app.rs
//
// Somme intelligente — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, vue.rs, historique.rs, messages.rs)
// - Ré-exporter AppSomme (pour main.rs: use crate::app::AppSomme;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Ctrl+Enter est géré dans vue.rs (quand le champ a le focus).
// - Les félicitations différées avancent ici, une fois par frame.

pub mod etat;
pub mod historique;
pub mod messages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppSomme;`
pub use etat::{AppSomme, Commandes};
pub use historique::HistoriqueStore;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppSomme {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC : ferme la fenêtre ouverte, sinon efface l’entrée (comme "Effacer").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.fenetre_active().is_some() {
                self.fermer_fenetre();
            } else {
                self.effacer();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // Félicitations : horloge de frame egui (natif + web), pas de thread.
        let maintenant = ctx.input(|i| i.time);
        if let Some(reste) = self.avancer_felicitations(maintenant) {
            match attente(reste) {
                Some(d) => ctx.request_repaint_after(d),
                None => ctx.request_repaint(),
            }
        }

        self.ui_fenetres(ctx);
    }
}

/// Temps restant -> Duration. None si non représentable (négatif, NaN, démesuré).
fn attente(reste: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(reste).ok()
}
