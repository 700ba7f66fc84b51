//! Noyau du calcul (sans UI)
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation + opérateurs
//! - rpn.rs     : shunting-yard (infixe espacé -> postfixe)
//! - arbre.rs   : arbre d’expression construit depuis le postfixe
//! - eval.rs    : évaluation f64 + pipeline complet
//! - saisie.rs  : accumulation des touches (espacement)
//! - format.rs  : résultat réinjectable, panneau des jetons, dessin de l’arbre
//! - erreur.rs  : erreurs du pipeline

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, Politique};
