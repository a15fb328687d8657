// src/noyau/erreur.rs
//
// Deux familles d’erreurs seulement :
// - EchecArithmetique : la seule erreur du moteur (jamais remontée à l’appelant,
//   elle devient l’état Erreur).
// - ErreurMagasin : lecture/écriture du magasin persistant (trou de durabilité,
//   l’état en mémoire reste valide).

use thiserror::Error;

/// Échec d’un calcul binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EchecArithmetique {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("modulo par zéro")]
    ModuloParZero,

    #[error("résultat non fini (dépassement ou puissance invalide)")]
    ResultatNonFini,
}

/// Échec d’accès au magasin persistant.
#[derive(Debug, Error)]
pub enum ErreurMagasin {
    #[error("accès fichier impossible: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON invalide: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stockage navigateur indisponible: {0}")]
    Navigateur(String),
}
