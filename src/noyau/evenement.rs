// src/noyau/evenement.rs
//
// Évènements d’entrée (produits par l’adaptateur clavier / boutons).
// Un chiffre hors 0..=9 est une violation de contrat de l’appelant.

use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    ToutEffacer,
    EffacerEntree,
    Retour,
    ChangerSigne,
    Pourcentage,
    MemoireEffacer,
    MemoireRappel,
    MemoireAjouter,
    MemoireSoustraire,
    EffacerHistorique,
}

impl Evenement {
    /// Adaptateur clavier pour les caractères tapés.
    /// Les touches nommées (Entrée, Échap, Retour arrière, Suppr) sont
    /// traduites côté vue.
    pub fn depuis_caractere(c: char) -> Option<Evenement> {
        if let Some(d) = c.to_digit(10) {
            return Some(Evenement::Chiffre(d as u8));
        }
        match c {
            '.' | ',' => Some(Evenement::Virgule),
            '=' => Some(Evenement::Egal),
            _ => Operateur::depuis_caractere(c).map(Evenement::Operateur),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chiffres_et_virgule() {
        assert_eq!(Evenement::depuis_caractere('7'), Some(Evenement::Chiffre(7)));
        assert_eq!(Evenement::depuis_caractere(','), Some(Evenement::Virgule));
        assert_eq!(Evenement::depuis_caractere('.'), Some(Evenement::Virgule));
    }

    #[test]
    fn operateurs_et_egal() {
        assert_eq!(
            Evenement::depuis_caractere('^'),
            Some(Evenement::Operateur(Operateur::Puissance))
        );
        assert_eq!(Evenement::depuis_caractere('='), Some(Evenement::Egal));
    }

    #[test]
    fn caracteres_ignores() {
        assert_eq!(Evenement::depuis_caractere('a'), None);
        assert_eq!(Evenement::depuis_caractere(' '), None);
        // chiffres non ASCII : to_digit(10) ne les accepte pas
        assert_eq!(Evenement::depuis_caractere('٣'), None);
    }
}
