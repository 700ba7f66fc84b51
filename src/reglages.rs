//! src/reglages.rs
//!
//! Réglages lus UNE fois au démarrage (natif) depuis un fichier TOML optionnel.
//!
//! Ordre :
//! - chemin dans `CALCULATRICE_REGLAGES` si défini
//! - sinon `calculatrice.toml` dans le dossier courant
//! - fichier absent => valeurs par défaut (pas une erreur)
//! - fichier illisible ou invalide => avertissement + valeurs par défaut (main.rs)
//!
//! Exemple :
//! ```toml
//! [fenetre]
//! largeur = 520.0
//! hauteur = 740.0
//!
//! [journal]
//! filtre = "calculatrice_arbre=debug"
//!
//! [noyau]
//! parentheses_strictes = true
//! rejeter_jetons_inconnus = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::Politique;

pub const FICHIER_DEFAUT: &str = "calculatrice.toml";
pub const VAR_CHEMIN: &str = "CALCULATRICE_REGLAGES";

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin:?} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },
    #[error("réglages invalides : {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub fenetre: Fenetre,
    pub journal: Journal,
    pub noyau: Politique,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 520.0,
            hauteur: 740.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Journal {
    /// Filtre `tracing_subscriber::EnvFilter` (RUST_LOG a priorité).
    pub filtre: String,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            filtre: "info".to_string(),
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        Ok(toml::from_str(texte)?)
    }

    /// Lit un fichier précis. Absent => `Ok(None)`.
    pub fn depuis_fichier(chemin: &Path) -> Result<Option<Self>, ErreurReglages> {
        match std::fs::read_to_string(chemin) {
            Ok(texte) => Self::depuis_toml(&texte).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ErreurReglages::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            }),
        }
    }
}

/// Chemin du fichier de réglages (variable d’environnement ou défaut).
pub fn chemin_reglages() -> PathBuf {
    std::env::var_os(VAR_CHEMIN)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FICHIER_DEFAUT))
}
