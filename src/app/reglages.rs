// src/app/reglages.rs
//
// Réglages UI (langue, thème), persistés dans le même magasin que la mémoire.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::langue::Langue;
use crate::noyau::magasin::{ecrire_json, lire_json, Magasin, CLE_REGLAGES};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub langue: Langue,
    pub theme_sombre: bool,
}

impl Reglages {
    /// Réglages du magasin ; défauts si absents ou illisibles.
    pub fn charger(magasin: &dyn Magasin) -> Self {
        match lire_json::<Reglages, _>(magasin, CLE_REGLAGES) {
            Ok(r) => r.unwrap_or_default(),
            Err(e) => {
                warn!(erreur = %e, "réglages illisibles, valeurs par défaut");
                Self::default()
            }
        }
    }

    pub fn enregistrer(&self, magasin: &mut dyn Magasin) {
        if let Err(e) = ecrire_json(magasin, CLE_REGLAGES, self) {
            warn!(erreur = %e, "réglages non persistés");
        }
    }
}
