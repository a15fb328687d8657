//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier le moteur (noyau) à l’écran egui.
//! - `Ecran` : sortie d’affichage du moteur (valeur, aperçu, taille de police).
//! - `AppCalc` : moteur + écran + réglages (langue, thème).
//!
//! Contrats :
//! - Toute modification de la calculatrice passe par `envoyer` (un évènement à la fois).
//! - Pas de rendu egui ici.

use tracing::warn;

use super::langue::Libelle;
use super::reglages::Reglages;
use crate::noyau::format::format_memoire;
use crate::noyau::magasin::{Magasin, MagasinVolatile};
use crate::noyau::{Afficheur, Evenement, Moteur};

/// 1rem en points egui.
const POINTS_PAR_REM: f32 = 16.0;

#[derive(Clone, Debug)]
pub struct Ecran {
    pub valeur: String,
    pub apercu: String,
    pub taille_rem: f32,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            valeur: "0".to_string(),
            apercu: String::new(),
            taille_rem: 2.75,
        }
    }
}

impl Ecran {
    pub fn taille_points(&self) -> f32 {
        self.taille_rem * POINTS_PAR_REM
    }
}

impl Afficheur for Ecran {
    fn rendre(&mut self, valeur: &str, apercu: &str) {
        self.valeur.clear();
        self.valeur.push_str(valeur);
        self.apercu.clear();
        self.apercu.push_str(apercu);
    }

    fn fixer_echelle_police(&mut self, rem: f32) {
        self.taille_rem = rem;
    }
}

pub struct AppCalc {
    pub moteur: Moteur,
    pub ecran: Ecran,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(magasin_plateforme())
    }
}

impl AppCalc {
    pub fn new(magasin: Box<dyn Magasin>) -> Self {
        let moteur = Moteur::ouvrir(magasin);
        let reglages = Reglages::charger(moteur.magasin());
        let mut ecran = Ecran::default();
        moteur.rendre(&mut ecran);

        Self {
            moteur,
            ecran,
            reglages,
        }
    }

    /* ------------------------ Actions ------------------------ */

    pub fn envoyer(&mut self, evenement: Evenement) {
        self.moteur.traiter(evenement, &mut self.ecran);
    }

    pub fn basculer_langue(&mut self) {
        self.reglages.langue = self.reglages.langue.suivante();
        self.reglages.enregistrer(self.moteur.magasin_mut());
    }

    pub fn basculer_theme(&mut self) {
        self.reglages.theme_sombre = !self.reglages.theme_sombre;
        self.reglages.enregistrer(self.moteur.magasin_mut());
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn texte(&self, l: Libelle) -> &'static str {
        self.reglages.langue.texte(l)
    }

    pub fn memoire_affichee(&self) -> String {
        format_memoire(self.moteur.etat().memoire())
    }

    pub fn historique(&self) -> &[String] {
        self.moteur.etat().historique()
    }
}

/// Magasin durable de la plateforme ; volatile si indisponible.
#[cfg(not(target_arch = "wasm32"))]
fn magasin_plateforme() -> Box<dyn Magasin> {
    use crate::noyau::magasin::MagasinFichier;

    let Some(chemin) = MagasinFichier::chemin_par_defaut() else {
        warn!("dossier de données introuvable, magasin volatile");
        return Box::new(MagasinVolatile::default());
    };

    match MagasinFichier::ouvrir(&chemin) {
        Ok(m) => {
            tracing::info!(chemin = %m.chemin().display(), "magasin fichier ouvert");
            Box::new(m)
        }
        Err(e) => {
            warn!(erreur = %e, "magasin fichier illisible, magasin volatile");
            Box::new(MagasinVolatile::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn magasin_plateforme() -> Box<dyn Magasin> {
    use crate::noyau::magasin::MagasinLocal;

    match MagasinLocal::ouvrir() {
        Ok(m) => Box::new(m),
        Err(e) => {
            warn!(erreur = %e, "localStorage indisponible, magasin volatile");
            Box::new(MagasinVolatile::default())
        }
    }
}
