// src/noyau/arbre.rs
//
// Arbre d’expression binaire.
// - Operande : texte du littéral (parsé seulement à l’évaluation)
// - Operateur : exactement deux enfants possédés (Box), ni partage ni cycle
//
// Construit depuis un flux postfixe ; immuable ensuite.

use std::fmt;

use super::erreur::{ErreurCalcul, Malformation};
use super::jetons::Op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Operande(String),
    Operateur {
        op: Op,
        gauche: Box<Noeud>,
        droite: Box<Noeud>,
    },
}

impl Noeud {
    pub fn operateur(op: Op, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Operateur {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Nombre total de noeuds (opérandes + opérateurs).
    pub fn nb_noeuds(&self) -> usize {
        let mut pile = vec![self];
        let mut n = 0;
        while let Some(noeud) = pile.pop() {
            n += 1;
            if let Noeud::Operateur { gauche, droite, .. } = noeud {
                pile.push(&**gauche);
                pile.push(&**droite);
            }
        }
        n
    }

    /// Profondeur (une feuille seule = 1).
    pub fn profondeur(&self) -> usize {
        let mut pile = vec![(self, 1)];
        let mut max = 0;
        while let Some((noeud, niveau)) = pile.pop() {
            max = max.max(niveau);
            if let Noeud::Operateur { gauche, droite, .. } = noeud {
                pile.push((&**gauche, niveau + 1));
                pile.push((&**droite, niveau + 1));
            }
        }
        max
    }

    /// Texte affiché pour ce noeud seul (littéral ou symbole).
    pub fn etiquette(&self) -> &str {
        match self {
            Noeud::Operande(t) => t,
            Noeud::Operateur { op, .. } => op.symbole(),
        }
    }
}

// Les parcours sont itératifs : une chaîne "1 + 1 + ... + 1" donne un arbre
// aussi profond que le nombre de termes.

/// Libère l’arbre avec une pile explicite (le drop récursif des Box déborde).
impl Drop for Noeud {
    fn drop(&mut self) {
        let Noeud::Operateur { gauche, droite, .. } = self else {
            return;
        };
        let mut pile = vec![detacher(gauche), detacher(droite)];
        while let Some(mut noeud) = pile.pop() {
            if let Noeud::Operateur { gauche, droite, .. } = &mut noeud {
                pile.push(detacher(gauche));
                pile.push(detacher(droite));
            }
            // `noeud` n’a plus que des feuilles vides : drop immédiat
        }
    }
}

fn detacher(enfant: &mut Box<Noeud>) -> Noeud {
    std::mem::replace(&mut **enfant, Noeud::Operande(String::new()))
}

enum Morceau<'a> {
    Noeud(&'a Noeud),
    Symbole(Op),
    Fermante,
}

/// Infixe totalement parenthésé : "((2 + 3) * 4)".
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pile = vec![Morceau::Noeud(self)];
        while let Some(m) = pile.pop() {
            match m {
                Morceau::Noeud(Noeud::Operande(t)) => f.write_str(t)?,
                Morceau::Noeud(Noeud::Operateur { op, gauche, droite }) => {
                    f.write_str("(")?;
                    pile.push(Morceau::Fermante);
                    pile.push(Morceau::Noeud(&**droite));
                    pile.push(Morceau::Symbole(*op));
                    pile.push(Morceau::Noeud(&**gauche));
                }
                Morceau::Symbole(op) => write!(f, " {} ", op.symbole())?,
                Morceau::Fermante => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

/// Construit l’arbre à partir d’un postfixe espacé.
///
/// - opérande  => empile une feuille
/// - opérateur => dépile droite puis gauche, empile le noeud
/// - à la fin, il doit rester exactement une racine
pub fn from_postfix(postfixe: &str) -> Result<Noeud, ErreurCalcul> {
    let mut st: Vec<Noeud> = Vec::new();

    for (position, element) in postfixe.split(' ').filter(|e| !e.is_empty()).enumerate() {
        match Op::depuis_texte(element) {
            None => st.push(Noeud::Operande(element.to_string())),

            Some(op) => {
                let manque = || Malformation::ManqueOperandes {
                    operateur: element.to_string(),
                    position,
                };
                let droite = st.pop().ok_or_else(manque)?;
                let gauche = st.pop().ok_or_else(manque)?;
                st.push(Noeud::operateur(op, gauche, droite));
            }
        }
    }

    let racine = st.pop().ok_or(Malformation::Vide)?;
    if !st.is_empty() {
        return Err(Malformation::RacinesMultiples {
            restants: st.len() + 1,
        }
        .into());
    }

    tracing::debug!(noeuds = racine.nb_noeuds(), profondeur = racine.profondeur(), "arbre");
    Ok(racine)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feuille(s: &str) -> Noeud {
        Noeud::Operande(s.into())
    }

    #[test]
    fn gauche_est_le_premier_empile() {
        let a = from_postfix("8 3 -").unwrap();
        assert_eq!(a, Noeud::operateur(Op::Sub, feuille("8"), feuille("3")));
    }

    #[test]
    fn structure_precedence() {
        let a = from_postfix("2 3 4 * +").unwrap();
        assert_eq!(
            a,
            Noeud::operateur(
                Op::Add,
                feuille("2"),
                Noeud::operateur(Op::Mul, feuille("3"), feuille("4"))
            )
        );
        assert_eq!(a.nb_noeuds(), 5);
        assert_eq!(a.profondeur(), 3);
        assert_eq!(a.to_string(), "(2 + (3 * 4))");
    }

    #[test]
    fn feuille_seule() {
        let a = from_postfix("3.14").unwrap();
        assert_eq!(a, feuille("3.14"));
        assert_eq!(a.etiquette(), "3.14");
    }

    #[test]
    fn valeurs_egales_restent_distinctes() {
        // "2 2 +" : deux feuilles, aucun aliasing dans l’arbre
        let a = from_postfix("2 2 +").unwrap();
        assert_eq!(a.nb_noeuds(), 3);
    }

    #[test]
    fn operateur_avant_operandes() {
        let e = from_postfix("+ 2").unwrap_err();
        assert_eq!(
            e,
            ErreurCalcul::ExpressionMalformee(Malformation::ManqueOperandes {
                operateur: "+".into(),
                position: 0
            })
        );

        let e = from_postfix("2 +").unwrap_err();
        assert!(matches!(
            e,
            ErreurCalcul::ExpressionMalformee(Malformation::ManqueOperandes { position: 1, .. })
        ));
    }

    #[test]
    fn racines_multiples() {
        let e = from_postfix("1 2 3 +").unwrap_err();
        assert_eq!(
            e,
            ErreurCalcul::ExpressionMalformee(Malformation::RacinesMultiples { restants: 2 })
        );
    }

    /// "1 1 + 1 + ... 1 +" : peigne gauche de `n` feuilles.
    fn peigne(n: usize) -> String {
        let mut s = String::from("1");
        for _ in 1..n {
            s.push_str(" 1 +");
        }
        s
    }

    #[test]
    fn arbre_tres_profond_sans_debordement() {
        let a = from_postfix(&peigne(100_000)).unwrap();
        assert_eq!(a.nb_noeuds(), 199_999);
        assert_eq!(a.profondeur(), 100_000);
        let texte = a.to_string();
        assert_eq!(texte.matches('(').count(), 99_999);
        assert!(texte.ends_with("+ 1) + 1) + 1)"));
        drop(a);
    }

    #[test]
    fn affichage_parenthese() {
        let a = from_postfix("1 2 - 3 4 / *").unwrap();
        assert_eq!(a.to_string(), "((1 - 2) * (3 / 4))");
        assert_eq!(from_postfix("7").unwrap().to_string(), "7");
    }

    #[test]
    fn postfixe_vide() {
        assert_eq!(
            from_postfix("  ").unwrap_err(),
            ErreurCalcul::ExpressionMalformee(Malformation::Vide)
        );
    }
}
