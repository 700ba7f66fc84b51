//! Tests de propriétés : pipeline complet contre une évaluation de référence.
//!
//! - expressions totalement parenthésées générées aléatoirement (proptest)
//! - chaînes plates sans parenthèses : précédence + associativité gauche
//! - aller-retour jetons, saisie compacte == saisie espacée
//! - entrées arbitraires : jamais de panique, seulement Ok / Err

use proptest::prelude::*;

use super::eval::{eval_expression, Politique};
use super::jetons::{format_jetons, tokenize, Op};
use super::rpn::to_postfix;
use super::saisie::saisir_texte;

/* ------------------------ Modèle de référence ------------------------ */

#[derive(Clone, Debug)]
enum Ex {
    Nb(u32),
    Bin(Box<Ex>, Op, Box<Ex>),
}

impl Ex {
    fn valeur(&self) -> f64 {
        match self {
            Ex::Nb(n) => f64::from(*n),
            Ex::Bin(a, op, b) => op.appliquer(a.valeur(), b.valeur()),
        }
    }

    /// Infixe espacé, chaque opération entre parenthèses.
    fn texte(&self) -> String {
        match self {
            Ex::Nb(n) => n.to_string(),
            Ex::Bin(a, op, b) => format!("( {} {} {} )", a.texte(), op.symbole(), b.texte()),
        }
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul), Just(Op::Div)]
}

fn ex() -> impl Strategy<Value = Ex> {
    let feuille = (0u32..1000).prop_map(Ex::Nb);
    feuille.prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), op(), inner).prop_map(|(a, o, b)| Ex::Bin(Box::new(a), o, Box::new(b)))
    })
}

/// Égalité bit à bit, NaN compris (même suite d’opérations des deux côtés).
fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/// Référence pour une chaîne plate : termes multiplicatifs, puis somme gauche->droite.
fn valeur_plate(premier: u32, suite: &[(Op, u32)]) -> f64 {
    let mut total = 0.0;
    let mut op_total = Op::Add;
    let mut terme = f64::from(premier);

    for &(op, n) in suite {
        match op {
            Op::Mul | Op::Div => terme = op.appliquer(terme, f64::from(n)),
            Op::Add | Op::Sub => {
                total = op_total.appliquer(total, terme);
                op_total = op;
                terme = f64::from(n);
            }
        }
    }
    op_total.appliquer(total, terme)
}

/* ------------------------ Cas nommés ------------------------ */

#[test]
fn cas_de_reference() {
    let p = Politique::default();
    for (s, postfixe, v) in [
        ("8 - 3 - 1", "8 3 - 1 -", 4.0),
        ("2 + 3 * 4", "2 3 4 * +", 14.0),
        ("( 2 + 3 ) * 4", "2 3 + 4 *", 20.0),
        ("1 / 0", "1 0 /", f64::INFINITY),
    ] {
        let c = eval_expression(s, &p).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));
        assert_eq!(c.postfixe, postfixe, "expr={s:?}");
        assert_eq!(c.valeur, v, "expr={s:?}");
    }
}

#[test]
fn postfixe_deja_trie_inchange() {
    // un seul niveau d’opérateurs, sans parenthèses : l’ordre des opérandes est gardé
    assert_eq!(to_postfix("4 * 5").unwrap(), "4 5 *");
    assert_eq!(to_postfix("4 + 5 + 6").unwrap(), "4 5 + 6 +");
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn parenthese_egale_reference(e in ex()) {
        let s = e.texte();
        let c = eval_expression(&s, &Politique::default())
            .map_err(|err| TestCaseError::fail(format!("expr={s:?} err={err}")))?;
        prop_assert!(meme_valeur(c.valeur, e.valeur()), "expr={s:?} {} != {}", c.valeur, e.valeur());
        prop_assert_eq!(c.arbre.nb_noeuds(), s.split(' ').filter(|x| *x != "(" && *x != ")").count());
    }

    #[test]
    fn chaine_plate_precedence(premier in 0u32..100, suite in prop::collection::vec((op(), 0u32..100), 0..12)) {
        let mut s = premier.to_string();
        for (op, n) in &suite {
            s.push_str(&format!(" {} {n}", op.symbole()));
        }
        let c = eval_expression(&s, &Politique::default())
            .map_err(|err| TestCaseError::fail(format!("expr={s:?} err={err}")))?;
        let attendu = valeur_plate(premier, &suite);
        prop_assert!(meme_valeur(c.valeur, attendu), "expr={s:?} {} != {attendu}", c.valeur);
    }

    #[test]
    fn aller_retour_jetons(e in ex()) {
        let s = e.texte();
        prop_assert_eq!(format_jetons(&tokenize(&s)), s);
    }

    #[test]
    fn saisie_compacte_equivalente(e in ex()) {
        let s = e.texte();
        let compact: String = s.chars().filter(|c| *c != ' ').collect();
        let saisi = saisir_texte("", &compact);
        prop_assert_eq!(saisi.trim(), s.as_str());
    }

    #[test]
    fn entree_arbitraire_sans_panique(s in "\\PC{0,40}") {
        let _ = tokenize(&s);
        let _ = eval_expression(&s, &Politique::default());
        let _ = eval_expression(&s, &Politique { parentheses_strictes: false, rejeter_jetons_inconnus: true });
    }
}
