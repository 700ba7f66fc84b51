//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, jetons, arbre, erreur)
//! et offrir les actions du pavé (touche, DEL, C, AC, =) sans logique d’affichage.
//!
//! Contrats :
//! - L’entrée est toujours construite par `noyau::saisie` (espacement garanti).
//! - Les jetons suivent l’entrée à chaque touche (panneau en direct).
//! - "=" réinjecte le résultat comme nouvelle entrée (calculs enchaînés).
//! - Une erreur n’efface ni l’entrée ni le dernier arbre.

use crate::noyau::arbre::Noeud;
use crate::noyau::format::format_resultat;
use crate::noyau::jetons::{tokenize, Jeton};
use crate::noyau::saisie::{self, Touche};
use crate::noyau::{eval_expression, ErreurCalcul, Politique};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub jetons: Vec<Jeton>,
    pub postfixe: String,
    pub arbre: Option<Noeud>,
    pub erreur: String,

    // --- paramètres ---
    pub politique: Politique,
}

impl AppCalc {
    pub fn new(politique: Politique) -> Self {
        Self {
            politique,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche(&mut self, t: Touche) {
        self.entree = saisie::ajouter(&self.entree, t);
        self.maj_jetons();
    }

    /// Texte tapé au clavier : touches du pavé, '=' calcule, le reste est ignoré.
    pub fn saisir(&mut self, texte: &str) {
        for (i, morceau) in texte.split('=').enumerate() {
            if i > 0 {
                self.calculer();
            }
            self.entree = saisie::saisir_texte(&self.entree, morceau);
        }
        self.maj_jetons();
    }

    /// DEL : retire la dernière touche.
    pub fn retour_arriere(&mut self) {
        self.entree = saisie::retirer(&self.entree);
        self.maj_jetons();
    }

    /// C : effacer seulement l’entrée (l’arbre affiché reste).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.maj_jetons();
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        *self = Self::new(self.politique.clone());
    }

    /// "=" : pipeline complet, résultat réinjecté dans l’entrée.
    pub fn calculer(&mut self) {
        match eval_expression(&self.entree, &self.politique) {
            Ok(calcul) => {
                self.entree = format_resultat(calcul.valeur);
                self.postfixe = calcul.postfixe;
                self.arbre = Some(calcul.arbre);
                self.erreur.clear();
                self.maj_jetons();
            }
            // rien à calculer : pas un message d’erreur
            Err(ErreurCalcul::AucunJeton) => self.erreur.clear(),
            Err(e) => {
                tracing::info!(entree = %self.entree, "calcul refusé : {e}");
                self.erreur = format!("Expression invalide : {e}");
            }
        }
    }

    fn maj_jetons(&mut self) {
        self.jetons = tokenize(&self.entree);
    }
}
