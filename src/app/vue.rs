// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppSomme (etat.rs) pour natif + wasm
// - Gros boutons (tactile), focus redonné à l’entrée après chaque action
// - Ctrl+Enter calcule (quand le champ est focus), Enter seul = retour à la ligne
// - Fenêtres modales : une seule au premier plan (la dernière ouverte)
//
// Note :
// - Toute action passe par le trait Commandes (etat.rs), jamais directement par le noyau.

use eframe::egui;

use super::etat::{
    ligne_historique, ligne_recente, AppSomme, Commandes, Fenetre, NB_FENETRE_HISTORIQUE,
    NB_PANNEAU_RECENT,
};
use super::messages::{HISTORIQUE_VIDE, TITRE_HISTORIQUE};

const COULEUR_TITRE: egui::Color32 = egui::Color32::from_rgb(51, 153, 255);
const COULEUR_RESULTAT: egui::Color32 = egui::Color32::from_rgb(25, 128, 25);
const COULEUR_CALCULER: egui::Color32 = egui::Color32::from_rgb(51, 179, 77);
const COULEUR_EFFACER: egui::Color32 = egui::Color32::from_rgb(204, 102, 102);
const COULEUR_HISTORIQUE: egui::Color32 = egui::Color32::from_rgb(102, 102, 204);
const COULEUR_AIDE: egui::Color32 = egui::Color32::from_rgb(153, 153, 153);

impl AppSomme {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("🧮 Somme intelligente").color(COULEUR_TITRE));
                });
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                self.ui_commandes(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_recent(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Saisissez les nombres (séparés par des virgules ou des espaces) :");

        let resp = ui.add(
            egui::TextEdit::multiline(&mut self.entree)
                .desired_width(ui.available_width())
                .desired_rows(4)
                .hint_text("Ex: 10, 20, 30.5 ou 15 25 35")
                .id_salt("entree_somme"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Ctrl+Enter calcule (seulement si le champ est focus) ---
        let ctrl_enter = ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && ctrl_enter {
            self.calculer();
        }

        ui.add_space(4.0);

        let calc = ui.add_sized(
            [ui.available_width(), 44.0],
            egui::Button::new(egui::RichText::new("🚀 Calculer").size(18.0))
                .fill(COULEUR_CALCULER),
        );
        if calc.clicked() {
            self.calculer();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        ui.label(
            egui::RichText::new(&self.resultat)
                .size(20.0)
                .strong()
                .color(COULEUR_RESULTAT),
        );

        if !self.infos.is_empty() {
            ui.add_space(4.0);
            Self::champ_monospace(ui, "infos_out", &self.infos, 4);
        }
    }

    fn ui_commandes(&mut self, ui: &mut egui::Ui) {
        ui.columns(3, |cols| {
            if Self::bouton(&mut cols[0], "🗑 Effacer", COULEUR_EFFACER) {
                self.effacer();
            }
            if Self::bouton(&mut cols[1], "📚 Historique", COULEUR_HISTORIQUE) {
                self.afficher_historique();
            }
            if Self::bouton(&mut cols[2], "❓ Aide", COULEUR_AIDE) {
                self.afficher_aide();
            }
        });
    }

    fn ui_recent(&mut self, ui: &mut egui::Ui) {
        ui.label("Dernières opérations :");

        if self.historique.is_empty() {
            ui.weak(HISTORIQUE_VIDE);
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("recent_scroll")
            .max_height(160.0)
            .show(ui, |ui| {
                for op in self.historique.recentes(NB_PANNEAU_RECENT) {
                    ui.weak(ligne_recente(op));
                }
            });
    }

    /* ------------------------ Fenêtres ------------------------ */

    /// Affiche la fenêtre au premier plan (s’il y en a une).
    pub fn ui_fenetres(&mut self, ctx: &egui::Context) {
        let Some(fenetre) = self.fenetre_active().cloned() else {
            return;
        };

        let (titre, corps) = match fenetre {
            Fenetre::Message { titre, texte } => (titre, texte),
            Fenetre::Historique => (TITRE_HISTORIQUE.to_string(), self.texte_historique()),
        };

        let mut ouvert = true;
        let mut fermer = false;

        egui::Window::new(titre)
            .id(egui::Id::new(("fenetre", self.fenetres.len())))
            .open(&mut ouvert)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                egui::ScrollArea::vertical()
                    .max_height(360.0)
                    .show(ui, |ui| {
                        ui.label(corps);
                    });
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.add_sized([120.0, 36.0], egui::Button::new("OK")).clicked() {
                        fermer = true;
                    }
                });
            });

        if fermer || !ouvert {
            self.fermer_fenetre();
        }
    }

    fn texte_historique(&self) -> String {
        self.historique
            .recentes(NB_FENETRE_HISTORIQUE)
            .enumerate()
            .map(|(i, op)| ligne_historique(i + 1, op))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /* ------------------------ Widgets ------------------------ */

    fn bouton(ui: &mut egui::Ui, label: &str, fond: egui::Color32) -> bool {
        ui.add_sized(
            [ui.available_width(), 40.0],
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE)).fill(fond),
        )
        .clicked()
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
