//! src/app/messages.rs
//!
//! Textes de l’UI (aide, félicitations, erreurs). Aucun état, aucun rendu.

pub const TITRE_ERREUR: &str = "Erreur";
pub const TITRE_AIDE: &str = "Aide";
pub const TITRE_HISTORIQUE: &str = "Historique des opérations";
pub const TITRE_FELICITATIONS: &str = "Félicitations !";

pub const INVITE_RESULTAT: &str = "Saisissez des nombres puis appuyez sur Calculer";
pub const ERREUR_ENTREE_VIDE: &str = "Veuillez d’abord saisir des nombres";
pub const ERREUR_AUCUN_NOMBRE: &str = "Aucun nombre valide trouvé dans le texte saisi";
pub const HISTORIQUE_VIDE: &str = "Aucune opération précédente";

pub const TEXTE_AIDE: &str = "\
Utilisation :

1. Saisissez les nombres dans la zone de texte
2. Séparez-les par des virgules ou des espaces
3. Appuyez sur « Calculer »
4. Le résultat s’affiche avec des informations complémentaires

Exemples :
• 10, 20, 30
• 15 25 35
• 1.5, 2.7, 3.8

Fonctionnalités :
• Historique enregistré automatiquement
• Statistiques (nombre, minimum, maximum, moyenne)
• Nombres décimaux et négatifs
• Interface simple";

/// Message de félicitations selon la taille du calcul ;
/// mention spéciale si le résultat est un multiple non nul de 100.
pub fn message_felicitations(nombre: usize, resultat: f64) -> String {
    let mut message = if nombre <= 5 {
        "Beau travail ! Calcul précis et soigné ! 🌟".to_string()
    } else if nombre <= 15 {
        "Impressionnant ! Plusieurs nombres traités sans effort ! 🚀".to_string()
    } else {
        "Exceptionnel ! Une grande série de données maîtrisée ! 🏆".to_string()
    };

    if resultat % 100.0 == 0.0 && resultat != 0.0 {
        message.push_str(" Le résultat est un nombre remarquable ! 🎯");
    }

    message
}
