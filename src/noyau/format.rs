// src/noyau/format.rs

use super::arbre::Noeud;
use super::jetons::Jeton;

/* ------------------------ Résultat ------------------------ */

/// Valeur -> texte réinjectable comme nouvelle entrée.
///
/// - entiers sans ".0" (14.0 => "14")
/// - -0 => "0"
/// - non finis : "inf", "-inf", "NaN" (refusés comme opérandes ensuite)
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/* ------------------------ Panneau des jetons ------------------------ */

pub fn lignes_jetons(jetons: &[Jeton]) -> Vec<String> {
    jetons
        .iter()
        .map(|j| format!("valeur : {}, type : {}", j.texte, j.kind.libelle()))
        .collect()
}

/* ------------------------ Dessin de l’arbre ------------------------ */

/// Dessin ASCII, un noeud par ligne (gauche au-dessus de droite).
///
/// Chaque noeud a sa propre ligne : deux feuilles "2" restent deux lignes.
pub fn dessin_arbre(racine: &Noeud) -> String {
    let mut out = String::from(racine.etiquette());
    let mut pile: Vec<(&Noeud, String, bool)> = Vec::new();
    empiler_enfants(&mut pile, racine, String::new());

    while let Some((noeud, prefixe, dernier)) = pile.pop() {
        out.push('\n');
        out.push_str(&prefixe);
        out.push_str(if dernier { "`-- " } else { "|-- " });
        out.push_str(noeud.etiquette());

        let suite = format!("{prefixe}{}", if dernier { "    " } else { "|   " });
        empiler_enfants(&mut pile, noeud, suite);
    }
    out
}

fn empiler_enfants<'a>(pile: &mut Vec<(&'a Noeud, String, bool)>, noeud: &'a Noeud, prefixe: String) {
    if let Noeud::Operateur { gauche, droite, .. } = noeud {
        pile.push((&**droite, prefixe.clone(), true));
        pile.push((&**gauche, prefixe, false));
    }
}
