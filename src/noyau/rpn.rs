// src/noyau/rpn.rs
//
// Shunting-yard : infixe espacé -> postfixe espacé
//
// Règles:
// - l’entrée est une suite d’éléments séparés par des espaces
//   (la saisie insère les espaces autour des opérateurs/parenthèses)
// - les éléments vides (espaces répétés) sont ignorés
// - les quatre opérateurs sont gauche-associatifs : à précédence égale, on dépile
//
// Parenthèses:
// - politique stricte (défaut) : ')' orpheline ou '(' non fermée => erreur
// - politique tolérante : ')' orpheline ignorée,
//   '(' restantes vidées dans la sortie (refusées ensuite par arbre.rs / eval.rs)

use super::eval::Politique;
use super::erreur::ErreurCalcul;
use super::jetons::Op;

/// Précédence d’un élément de la pile : 0 pour tout ce qui n’est pas opérateur.
fn precedence(element: &str) -> u8 {
    Op::depuis_texte(element).map_or(0, Op::precedence)
}

/// Conversion infixe -> postfixe, parenthèses strictes.
///
/// Exemple:
///   "2 + 3 * 4"  =>  "2 3 4 * +"
pub fn to_postfix(expression: &str) -> Result<String, ErreurCalcul> {
    to_postfix_avec(expression, &Politique::default())
}

pub fn to_postfix_avec(expression: &str, politique: &Politique) -> Result<String, ErreurCalcul> {
    let mut out: Vec<&str> = Vec::new();
    let mut pile: Vec<&str> = Vec::new();

    for (position, element) in expression.split(' ').filter(|e| !e.is_empty()).enumerate() {
        match element {
            "(" => pile.push(element),

            ")" => {
                // dépile jusqu’à '(' (exclue)
                let mut ferme = false;
                while let Some(top) = pile.pop() {
                    if top == "(" {
                        ferme = true;
                        break;
                    }
                    out.push(top);
                }

                if !ferme && politique.parentheses_strictes {
                    return Err(ErreurCalcul::ParenthesesDesequilibrees {
                        jeton: element.to_string(),
                        position,
                    });
                }
            }

            _ => match Op::depuis_texte(element) {
                None => out.push(element),

                Some(op) => {
                    while let Some(&top) = pile.last() {
                        if top == "(" || precedence(top) < op.precedence() {
                            break;
                        }
                        out.extend(pile.pop());
                    }
                    pile.push(element);
                }
            },
        }
    }

    // vide la pile
    while let Some(top) = pile.pop() {
        if top == "(" && politique.parentheses_strictes {
            return Err(ErreurCalcul::ParenthesesDesequilibrees {
                jeton: top.to_string(),
                position: position_derniere_ouvrante(expression),
            });
        }
        out.push(top);
    }

    let postfixe = out.join(" ");
    tracing::debug!(infixe = expression, postfixe = %postfixe, "postfixe");
    Ok(postfixe)
}

/// Position (index d’élément) de la '(' restée ouverte la plus à droite.
fn position_derniere_ouvrante(expression: &str) -> usize {
    let mut ouvertes: Vec<usize> = Vec::new();
    for (i, e) in expression.split(' ').filter(|e| !e.is_empty()).enumerate() {
        match e {
            "(" => ouvertes.push(i),
            ")" => {
                ouvertes.pop();
            }
            _ => {}
        }
    }
    ouvertes.last().copied().unwrap_or(0)
}
