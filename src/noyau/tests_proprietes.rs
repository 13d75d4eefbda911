//! Propriétés (proptest) : extraction, somme et affichage.

use proptest::prelude::*;

use super::format::SEPARATEUR_MILLIERS;
use super::{extraire_nombres, formater_nombre, somme};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Aucun chiffre => aucun nombre.
    #[test]
    fn prop_sans_chiffre_vide(s in "\\PC*") {
        let sans: String = s.chars().filter(|c| !c.is_numeric()).collect();
        prop_assert!(extraire_nombres(&sans).is_empty());
    }

    // N’importe quelle chaîne : pas de panique, affichage stable.
    #[test]
    fn prop_jamais_de_panique(s in any::<String>()) {
        let a = formater_nombre(somme(&extraire_nombres(&s)));
        let b = formater_nombre(somme(&extraire_nombres(&s)));
        prop_assert_eq!(a, b);
    }

    // Entiers séparés par des mots : on les retrouve tous, dans l’ordre.
    #[test]
    fn prop_entiers_retrouves(v in prop::collection::vec(-1_000_000i64..1_000_000, 1..20)) {
        let texte = v.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" et ");
        let attendu: Vec<f64> = v.iter().map(|&n| n as f64).collect();
        prop_assert_eq!(extraire_nombres(&texte), attendu);
    }

    // Somme d’entiers : exacte (pas de bruit à arrondir).
    #[test]
    fn prop_somme_entiers_exacte(v in prop::collection::vec(-1_000_000i64..1_000_000, 0..50)) {
        let nombres: Vec<f64> = v.iter().map(|&n| n as f64).collect();
        prop_assert_eq!(somme(&nombres), v.iter().sum::<i64>() as f64);
    }

    // Entier => pas de point ; groupes de 3 chiffres après le premier.
    #[test]
    fn prop_entier_groupe(n in -1_000_000_000_000i64..1_000_000_000_000) {
        let s = formater_nombre(n as f64);
        prop_assert!(!s.contains('.'));

        let corps = s.trim_start_matches('-');
        let groupes: Vec<&str> = corps.split(SEPARATEUR_MILLIERS).collect();
        prop_assert!(!groupes[0].is_empty() && groupes[0].len() <= 3);
        for g in &groupes[1..] {
            prop_assert_eq!(g.len(), 3);
        }

        let chiffres: String = groupes.concat();
        prop_assert_eq!(chiffres, n.unsigned_abs().to_string());
    }

    // Décimales : jamais plus de 10, jamais de zéro final.
    #[test]
    fn prop_decimales_nettoyees(x in -1e9f64..1e9) {
        let s = formater_nombre(x);
        if let Some((_, dec)) = s.split_once('.') {
            prop_assert!(!dec.is_empty() && dec.len() <= 10);
            prop_assert!(!dec.ends_with('0'));
        }
    }
}
