//! Noyau — erreurs du pipeline.
//!
//! Une seule enum pour toute la chaîne jetons -> postfixe -> arbre -> valeur.
//! Chaque variante porte le jeton fautif (et sa position quand elle existe)
//! pour que la vue puisse afficher “expression invalide” sans planter.
//!
//! Division par zéro : PAS une erreur (flottants IEEE-754, voir eval.rs).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Entrée vide : rien à afficher (non fatal côté UI).
    #[error("aucun jeton reconnu")]
    AucunJeton,

    /// Jeton ni nombre ni opérateur (ex: "." isolé, ","), refusé par la politique.
    #[error("jeton non classé '{jeton}' (position {position})")]
    JetonNonClasse { jeton: String, position: usize },

    #[error("parenthèses déséquilibrées : '{jeton}' sans correspondance (élément {position})")]
    ParenthesesDesequilibrees { jeton: String, position: usize },

    #[error("expression malformée : {0}")]
    ExpressionMalformee(#[from] Malformation),

    #[error("opérande invalide : '{texte}'")]
    OperandeInvalide { texte: String },
}

/// Détail d’un flux postfixe qui ne donne pas un arbre unique.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("expression vide")]
    Vide,

    #[error("opérateur '{operateur}' sans deux opérandes (élément {position})")]
    ManqueOperandes { operateur: String, position: usize },

    #[error("{restants} sous-arbres restent sans opérateur")]
    RacinesMultiples { restants: usize },
}
