// src/noyau/saisie.rs
//
// Accumulation des touches en une expression espacée.
//
// Contrat avec rpn.rs : opérateurs et parenthèses sont entourés d’un espace
// simple, les chiffres et '.' sont collés. Jamais de double espace.

use super::jetons::Op;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Op),
    ParOuvrante,
    ParFermante,
}

impl Touche {
    /// Touche correspondant à un caractère tapé au clavier (None si hors pavé).
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '(' => Some(Touche::ParOuvrante),
            ')' => Some(Touche::ParFermante),
            _ => Op::depuis_texte(c.encode_utf8(&mut [0; 4])).map(Touche::Operateur),
        }
    }

    /// Texte de la touche (libellé du bouton = texte inséré).
    pub fn texte(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::ParOuvrante => "(".to_string(),
            Touche::ParFermante => ")".to_string(),
        }
    }

    fn est_collee(self) -> bool {
        matches!(self, Touche::Chiffre(_) | Touche::Point)
    }
}

/// Ajoute une touche à l’entrée courante.
pub fn ajouter(entree: &str, touche: Touche) -> String {
    let mut out = String::with_capacity(entree.len() + 3);

    if touche.est_collee() {
        out.push_str(entree);
        out.push_str(&touche.texte());
        return out;
    }

    // opérateur / parenthèse : " x " sans doubler l’espace
    let base = entree.trim_end_matches(' ');
    out.push_str(base);
    if !base.is_empty() {
        out.push(' ');
    }
    out.push_str(&touche.texte());
    out.push(' ');
    out
}

/// Retire la dernière touche (avec son espacement si c’était un opérateur).
///
/// Un mot réinjecté ("inf", "-inf", "NaN") n’est pas une touche : il part d’un bloc.
pub fn retirer(entree: &str) -> String {
    let mut out = entree.trim_end_matches(' ').to_string();

    match out.pop() {
        Some(c) if c.is_ascii_digit() || c == '.' => {}
        Some(c) if c.is_ascii_alphabetic() => {
            let n = out.trim_end_matches(|l: char| l.is_ascii_alphabetic()).len();
            out.truncate(n);
            // signe collé au mot ; un opérateur '-' serait suivi d’un espace
            if out.ends_with('-') {
                out.pop();
            }
        }
        Some(_) => {
            let n = out.trim_end_matches(' ').len();
            out.truncate(n);
        }
        None => {}
    }
    out
}

/// Rejoue une suite de caractères tapés (les autres caractères sont ignorés).
pub fn saisir_texte(entree: &str, texte: &str) -> String {
    texte
        .chars()
        .filter_map(Touche::depuis_char)
        .fold(entree.to_string(), |acc, t| ajouter(&acc, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espaces_autour_des_operateurs() {
        assert_eq!(saisir_texte("", "(2+3)*4"), "( 2 + 3 ) * 4");
        assert_eq!(saisir_texte("", "12.5/4"), "12.5 / 4");
    }

    #[test]
    fn jamais_de_double_espace() {
        let s = saisir_texte("", "((1+2))*(3)");
        assert!(!s.contains("  "), "s={s:?}");
        assert_eq!(s.trim(), "( ( 1 + 2 ) ) * ( 3 )");
    }

    #[test]
    fn chainage_apres_resultat() {
        // le résultat réinjecté sert de base à la saisie suivante
        assert_eq!(saisir_texte("14", "+1"), "14 + 1");
        assert_eq!(saisir_texte("14", "5"), "145");
    }

    #[test]
    fn caracteres_hors_pave_ignores() {
        assert_eq!(saisir_texte("", "2 x= 3"), "23");
        assert_eq!(Touche::depuis_char('^'), None);
        assert_eq!(Touche::depuis_char('-'), Some(Touche::Operateur(Op::Sub)));
    }

    #[test]
    fn retirer_chiffre_puis_operateur() {
        let s = saisir_texte("", "2+35");
        let s = retirer(&s);
        assert_eq!(s, "2 + 3");
        let s = retirer(&s);
        assert_eq!(s, "2 + ");
        let s = retirer(&s);
        assert_eq!(s, "2");
        let s = retirer(&s);
        assert_eq!(s, "");
        assert_eq!(retirer(""), "");
    }

    #[test]
    fn retirer_resultat_non_fini_d_un_bloc() {
        assert_eq!(retirer("inf"), "");
        assert_eq!(retirer("-inf"), "");
        assert_eq!(retirer("NaN"), "");
        assert_eq!(retirer("inf "), "");
        // seul le mot part, pas l’opérateur qui précède
        assert_eq!(retirer("2 - inf"), "2 - ");
    }

    #[test]
    fn retirer_puis_ressaisir_reste_coherent() {
        let s = retirer(&saisir_texte("", "(2+3)"));
        assert_eq!(saisir_texte(&s, ")*2"), "( 2 + 3 ) * 2");
    }
}
