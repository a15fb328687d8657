// src/noyau/affichage.rs

/// Sortie d’affichage (implémentée par la vue).
pub trait Afficheur {
    /// Valeur courante + aperçu de l’opération en attente ("12 +" ou vide).
    fn rendre(&mut self, valeur: &str, apercu: &str);

    /// Taille de police en rem (purement cosmétique).
    fn fixer_echelle_police(&mut self, rem: f32);
}
