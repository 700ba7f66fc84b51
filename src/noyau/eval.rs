//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfixe (shunting-yard) -> arbre -> valeur f64
//!
//! Remarque : les jetons servent à l’affichage (et au contrôle optionnel des
//! jetons non classés) ; la conversion travaille sur la chaîne espacée.

use serde::Deserialize;

use super::arbre::{from_postfix, Noeud};
use super::erreur::{ErreurCalcul, Malformation};
use super::jetons::{tokenize, Jeton, Op};
use super::rpn::to_postfix_avec;

/// Politique de validation du noyau (section `[noyau]` des réglages).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Politique {
    /// ')' orpheline ou '(' non fermée => erreur (sinon : tolérées).
    pub parentheses_strictes: bool,
    /// Point / Inconnu => erreur dès les jetons (sinon : l’évaluation tranche).
    pub rejeter_jetons_inconnus: bool,
}

impl Default for Politique {
    fn default() -> Self {
        Self {
            parentheses_strictes: true,
            rejeter_jetons_inconnus: false,
        }
    }
}

/// Tout ce que le pipeline produit pour un "=".
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub jetons: Vec<Jeton>,
    pub postfixe: String,
    pub arbre: Noeud,
    pub valeur: f64,
}

/// API publique : évalue une expression espacée de bout en bout.
pub fn eval_expression(expr_str: &str, politique: &Politique) -> Result<Calcul, ErreurCalcul> {
    let s = expr_str.trim();

    // 1) Jetons (aucun => rien à calculer, ex: "", "abc", "inf")
    let jetons = tokenize(s);
    if jetons.is_empty() {
        return Err(ErreurCalcul::AucunJeton);
    }
    if politique.rejeter_jetons_inconnus {
        if let Some((position, j)) = jetons.iter().enumerate().find(|(_, j)| j.kind.est_non_classe()) {
            return Err(ErreurCalcul::JetonNonClasse {
                jeton: j.texte.clone(),
                position,
            });
        }
    }

    // 2) Postfixe
    let postfixe = to_postfix_avec(s, politique)?;

    // 3) Arbre
    let arbre = from_postfix(&postfixe)?;

    // 4) Valeur
    let valeur = eval_arbre(&arbre)?;
    tracing::debug!(expression = s, valeur, "évaluation");

    Ok(Calcul {
        jetons,
        postfixe,
        arbre,
        valeur,
    })
}

enum Tache<'a> {
    Visiter(&'a Noeud),
    Appliquer(Op),
}

/// Évaluation en profondeur (gauche puis droite), avec une pile de tâches
/// explicite : la profondeur de l’arbre ne touche pas la pile d’appels.
///
/// Division par zéro : sémantique IEEE-754 (inf / NaN), jamais une erreur.
pub fn eval_arbre(noeud: &Noeud) -> Result<f64, ErreurCalcul> {
    let mut taches = vec![Tache::Visiter(noeud)];
    let mut valeurs: Vec<f64> = Vec::new();

    while let Some(tache) = taches.pop() {
        match tache {
            Tache::Visiter(Noeud::Operande(texte)) => valeurs.push(lire_operande(texte)?),
            Tache::Visiter(Noeud::Operateur { op, gauche, droite }) => {
                taches.push(Tache::Appliquer(*op));
                taches.push(Tache::Visiter(&**droite));
                taches.push(Tache::Visiter(&**gauche));
            }
            Tache::Appliquer(op) => {
                // droite empilée en dernier
                let (Some(b), Some(a)) = (valeurs.pop(), valeurs.pop()) else {
                    return Err(Malformation::Vide.into());
                };
                valeurs.push(op.appliquer(a, b));
            }
        }
    }

    valeurs.pop().ok_or_else(|| Malformation::Vide.into())
}

/// Un opérande doit être un réel fini ("inf", "NaN", "(", "." sont refusés).
fn lire_operande(texte: &str) -> Result<f64, ErreurCalcul> {
    texte
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ErreurCalcul::OperandeInvalide {
            texte: texte.to_string(),
        })
}
