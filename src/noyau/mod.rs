//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - operateur.rs : six opérateurs binaires (énumération fermée) + échecs
//! - format.rs    : texte <-> nombre, arrondi 10 décimales, taille de police
//! - etat.rs      : EtatMoteur + machine à états (saisie / attente / erreur)
//! - evenement.rs : évènements d’entrée + adaptateur clavier
//! - magasin.rs   : magasin persistant (mémoire, historique, réglages)
//! - affichage.rs : sortie d’affichage (implémentée par la vue)
//! - moteur.rs    : état + magasin, un évènement à la fois

pub mod affichage;
pub mod erreur;
pub mod etat;
pub mod evenement;
pub mod format;
pub mod magasin;
pub mod moteur;
pub mod operateur;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use affichage::Afficheur;
pub use evenement::Evenement;
pub use moteur::Moteur;
pub use operateur::Operateur;
