//! Moteur : état + magasin.
//!
//! Un évènement à la fois, traité jusqu’au bout :
//! état -> écriture mémoire/historique si modifiés -> rendu.
//! Une écriture ratée est journalisée et n’altère jamais l’état.

use tracing::{debug, warn};

use super::affichage::Afficheur;
use super::etat::{EtatMoteur, Phase};
use super::evenement::Evenement;
use super::format::echelle_police;
use super::magasin::Magasin;

pub struct Moteur {
    etat: EtatMoteur,
    magasin: Box<dyn Magasin>,
}

impl Moteur {
    /// Charge mémoire + historique ; valeurs par défaut si la lecture échoue.
    pub fn ouvrir(magasin: Box<dyn Magasin>) -> Self {
        let memoire = magasin.lire_memoire().unwrap_or_else(|e| {
            warn!(erreur = %e, "mémoire illisible, remise à 0");
            0.0
        });
        let historique = magasin.lire_historique().unwrap_or_else(|e| {
            warn!(erreur = %e, "historique illisible, remis à vide");
            Vec::new()
        });

        debug!(memoire, entrees = historique.len(), "moteur ouvert");

        Self {
            etat: EtatMoteur::new(memoire, historique),
            magasin,
        }
    }

    pub fn etat(&self) -> &EtatMoteur {
        &self.etat
    }

    pub fn magasin(&self) -> &dyn Magasin {
        self.magasin.as_ref()
    }

    pub fn magasin_mut(&mut self) -> &mut dyn Magasin {
        self.magasin.as_mut()
    }

    /// Traite un évènement puis rend l’affichage.
    pub fn traiter(&mut self, evenement: Evenement, afficheur: &mut dyn Afficheur) {
        let changements = self.etat.appliquer(evenement);

        debug!(?evenement, valeur = self.etat.valeur(), "évènement traité");
        if self.etat.phase() == Phase::Erreur {
            if let Some(cause) = self.etat.cause_erreur() {
                debug!(%cause, "passage en erreur");
            }
        }

        if changements.memoire {
            if let Err(e) = self.magasin.ecrire_memoire(self.etat.memoire()) {
                warn!(erreur = %e, "mémoire non persistée");
            }
        }
        if changements.historique {
            if let Err(e) = self.magasin.ecrire_historique(self.etat.historique()) {
                warn!(erreur = %e, "historique non persisté");
            }
        }

        self.rendre(afficheur);
    }

    /// Rendu seul (premier affichage, changement de thème…).
    pub fn rendre(&self, afficheur: &mut dyn Afficheur) {
        let valeur = self.etat.valeur();
        afficheur.rendre(valeur, &self.etat.apercu());
        afficheur.fixer_echelle_police(echelle_police(valeur));
    }
}
