// src/noyau/magasin.rs
//
// Magasin persistant (clé -> texte), à la manière de localStorage.
// - primitives : lire_texte / ecrire_texte
// - au-dessus : mémoire (nombre JSON), historique (tableau JSON)
// - clé absente => valeur par défaut (0, vide)
//
// Implémentations :
// - MagasinVolatile : en mémoire (tests, repli)
// - MagasinFichier  : document JSON dans le dossier de données (natif)
// - MagasinLocal    : localStorage du navigateur (wasm32)

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::erreur::ErreurMagasin;
use super::etat::HISTORIQUE_MAX;

pub const CLE_MEMOIRE: &str = "calculatorMemory";
pub const CLE_HISTORIQUE: &str = "calculatorHistory";
pub const CLE_REGLAGES: &str = "calculatorSettings";

pub trait Magasin {
    fn lire_texte(&self, cle: &str) -> Result<Option<String>, ErreurMagasin>;

    fn ecrire_texte(&mut self, cle: &str, valeur: String) -> Result<(), ErreurMagasin>;

    fn lire_memoire(&self) -> Result<f64, ErreurMagasin> {
        let m: Option<f64> = lire_json(self, CLE_MEMOIRE)?;
        Ok(m.filter(|v| v.is_finite()).unwrap_or(0.0))
    }

    fn ecrire_memoire(&mut self, memoire: f64) -> Result<(), ErreurMagasin> {
        ecrire_json(self, CLE_MEMOIRE, &memoire)
    }

    /// Historique, le plus récent en tête, tronqué à 10.
    fn lire_historique(&self) -> Result<Vec<String>, ErreurMagasin> {
        let mut h: Vec<String> = lire_json(self, CLE_HISTORIQUE)?.unwrap_or_default();
        h.truncate(HISTORIQUE_MAX);
        Ok(h)
    }

    fn ecrire_historique(&mut self, historique: &[String]) -> Result<(), ErreurMagasin> {
        ecrire_json(self, CLE_HISTORIQUE, &historique)
    }
}

/// Lecture JSON typée d’une clé (None si absente).
pub fn lire_json<T, M>(magasin: &M, cle: &str) -> Result<Option<T>, ErreurMagasin>
where
    T: DeserializeOwned,
    M: Magasin + ?Sized,
{
    match magasin.lire_texte(cle)? {
        Some(texte) => Ok(Some(serde_json::from_str(&texte)?)),
        None => Ok(None),
    }
}

pub fn ecrire_json<T, M>(magasin: &mut M, cle: &str, valeur: &T) -> Result<(), ErreurMagasin>
where
    T: Serialize + ?Sized,
    M: Magasin + ?Sized,
{
    let texte = serde_json::to_string(valeur)?;
    magasin.ecrire_texte(cle, texte)
}

/* ------------------------ Volatile ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct MagasinVolatile {
    entrees: HashMap<String, String>,
}

impl Magasin for MagasinVolatile {
    fn lire_texte(&self, cle: &str) -> Result<Option<String>, ErreurMagasin> {
        Ok(self.entrees.get(cle).cloned())
    }

    fn ecrire_texte(&mut self, cle: &str, valeur: String) -> Result<(), ErreurMagasin> {
        self.entrees.insert(cle.to_string(), valeur);
        Ok(())
    }
}

/* ------------------------ Fichier (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub use fichier::MagasinFichier;

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Tout le magasin dans un seul document JSON, réécrit à chaque écriture.
    #[derive(Debug)]
    pub struct MagasinFichier {
        chemin: PathBuf,
        entrees: BTreeMap<String, String>,
    }

    impl MagasinFichier {
        /// `<données>/calculatrice_simple/etat.json`
        pub fn chemin_par_defaut() -> Option<PathBuf> {
            dirs::data_dir().map(|d| d.join("calculatrice_simple").join("etat.json"))
        }

        /// Ouvre (ou prépare) le document. Fichier absent => magasin vide.
        pub fn ouvrir(chemin: impl Into<PathBuf>) -> Result<Self, ErreurMagasin> {
            let chemin = chemin.into();
            let entrees = if chemin.exists() {
                let contenu = std::fs::read_to_string(&chemin)?;
                serde_json::from_str(&contenu)?
            } else {
                BTreeMap::new()
            };
            Ok(Self { chemin, entrees })
        }

        pub fn chemin(&self) -> &Path {
            &self.chemin
        }

        fn enregistrer(&self) -> Result<(), ErreurMagasin> {
            if let Some(parent) = self.chemin.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contenu = serde_json::to_string_pretty(&self.entrees)?;
            std::fs::write(&self.chemin, contenu)?;
            Ok(())
        }
    }

    impl Magasin for MagasinFichier {
        fn lire_texte(&self, cle: &str) -> Result<Option<String>, ErreurMagasin> {
            Ok(self.entrees.get(cle).cloned())
        }

        fn ecrire_texte(&mut self, cle: &str, valeur: String) -> Result<(), ErreurMagasin> {
            self.entrees.insert(cle.to_string(), valeur);
            self.enregistrer()
        }
    }
}

/* ------------------------ localStorage (web) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub use local::MagasinLocal;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::*;

    fn erreur_js(e: wasm_bindgen::JsValue) -> ErreurMagasin {
        ErreurMagasin::Navigateur(format!("{e:?}"))
    }

    pub struct MagasinLocal {
        stockage: web_sys::Storage,
    }

    impl MagasinLocal {
        pub fn ouvrir() -> Result<Self, ErreurMagasin> {
            let w = web_sys::window()
                .ok_or_else(|| ErreurMagasin::Navigateur("window() indisponible".into()))?;
            let stockage = w
                .local_storage()
                .map_err(erreur_js)?
                .ok_or_else(|| ErreurMagasin::Navigateur("localStorage absent".into()))?;
            Ok(Self { stockage })
        }
    }

    impl Magasin for MagasinLocal {
        fn lire_texte(&self, cle: &str) -> Result<Option<String>, ErreurMagasin> {
            self.stockage.get_item(cle).map_err(erreur_js)
        }

        fn ecrire_texte(&mut self, cle: &str, valeur: String) -> Result<(), ErreurMagasin> {
            self.stockage.set_item(cle, &valeur).map_err(erreur_js)
        }
    }
}
