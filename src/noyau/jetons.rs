// src/noyau/jetons.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Un littéral numérique OU un caractère seul, suivi d’espaces (consommés).
///
/// La classe `[+*,\-./]` est la plage ASCII '*'..='/' : elle couvre aussi
/// ',' et '.', d’où les jetons Point / Inconnu plus bas.
static MOTIF: Lazy<Regex> = Lazy::new(|| {
    // Motif constant : ne peut pas échouer à la compilation.
    Regex::new(r"([0-9]+(?:\.[0-9]+)?|[+*,\-./()])\s*").expect("motif du lexer invalide")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeJeton {
    Entier,
    Flottant,

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // "." isolé (ex: "3." donne Entier puis Point)
    Point,
    // tout le reste (ex: ",")
    Inconnu,
}

impl TypeJeton {
    /// Libellé affiché dans le panneau des jetons.
    pub fn libelle(self) -> &'static str {
        match self {
            TypeJeton::Entier => "Entier",
            TypeJeton::Flottant => "Flottant",
            TypeJeton::Plus => "Opérateur addition",
            TypeJeton::Minus => "Opérateur soustraction",
            TypeJeton::Star => "Opérateur multiplication",
            TypeJeton::Slash => "Opérateur division",
            TypeJeton::LPar => "Parenthèse ouvrante",
            TypeJeton::RPar => "Parenthèse fermante",
            TypeJeton::Point => "Point",
            TypeJeton::Inconnu => "Inconnu",
        }
    }

    /// Point et Inconnu : jetons qui ne peuvent pas entrer dans un calcul.
    pub fn est_non_classe(self) -> bool {
        matches!(self, TypeJeton::Point | TypeJeton::Inconnu)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub kind: TypeJeton,
    pub texte: String,
}

/// Les quatre opérateurs binaires. Tout le reste est opérande ou parenthèse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn depuis_texte(s: &str) -> Option<Op> {
        match s {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }

    /// Précédence (gauche-associatif pour les quatre).
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    /// Combinaison flottante IEEE-754 (x/0 => ±inf ou NaN, pas d’erreur).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// - aucun motif trouvé => vecteur vide (pas une erreur : “rien à afficher”)
/// - les espaces sont consommés, jamais émis
/// - les caractères hors motif (lettres, etc.) sont ignorés
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let out: Vec<Jeton> = MOTIF
        .find_iter(s)
        .map(|m| {
            let texte = m.as_str().trim();
            Jeton {
                kind: classer(texte),
                texte: texte.to_string(),
            }
        })
        .collect();

    tracing::trace!(entree = s, nb = out.len(), "jetons");
    out
}

fn classer(texte: &str) -> TypeJeton {
    match texte {
        "+" => TypeJeton::Plus,
        "-" => TypeJeton::Minus,
        "*" => TypeJeton::Star,
        "/" => TypeJeton::Slash,
        "(" => TypeJeton::LPar,
        ")" => TypeJeton::RPar,
        "." => TypeJeton::Point,
        _ if est_entier(texte) => TypeJeton::Entier,
        _ if est_flottant(texte) => TypeJeton::Flottant,
        _ => TypeJeton::Inconnu,
    }
}

fn est_entier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn est_flottant(s: &str) -> bool {
    match s.split_once('.') {
        Some((ent, frac)) => est_entier(ent) && est_entier(frac),
        None => false,
    }
}

/// Forme normalisée : textes des jetons séparés par un espace.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.texte.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
