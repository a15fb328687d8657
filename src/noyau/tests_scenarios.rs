//! Scénarios de bout en bout : évènements -> moteur -> affichage + magasin.

use super::affichage::Afficheur;
use super::etat::Phase;
use super::evenement::Evenement;
use super::magasin::{Magasin, MagasinVolatile};
use super::moteur::Moteur;
use super::operateur::Operateur;

#[derive(Default)]
struct Ecran {
    valeur: String,
    apercu: String,
}

impl Afficheur for Ecran {
    fn rendre(&mut self, valeur: &str, apercu: &str) {
        self.valeur = valeur.to_string();
        self.apercu = apercu.to_string();
    }

    fn fixer_echelle_police(&mut self, _rem: f32) {}
}

fn jouer(moteur: &mut Moteur, ecran: &mut Ecran, evenements: &[Evenement]) {
    for ev in evenements {
        moteur.traiter(*ev, ecran);
    }
}

fn nouveau() -> (Moteur, Ecran) {
    (
        Moteur::ouvrir(Box::new(MagasinVolatile::default())),
        Ecran::default(),
    )
}

#[test]
fn cinq_plus_trois() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Chiffre(5),
            Evenement::Operateur(Operateur::Addition),
            Evenement::Chiffre(3),
            Evenement::Egal,
        ],
    );
    assert_eq!(ecran.valeur, "8");
    assert_eq!(ecran.apercu, "");
    assert_eq!(m.etat().historique()[0], "5 + 3 = 8");
    assert_eq!(m.magasin().lire_historique().unwrap()[0], "5 + 3 = 8");
}

#[test]
fn sept_divise_par_zero() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Chiffre(7),
            Evenement::Operateur(Operateur::Division),
            Evenement::Chiffre(0),
            Evenement::Egal,
        ],
    );
    assert_eq!(m.etat().phase(), Phase::Erreur);
    assert_eq!(ecran.valeur, "Error");
    assert_eq!(ecran.apercu, "");
    assert!(m.etat().historique().is_empty());
}

#[test]
fn zero_divise_par_zero() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Operateur(Operateur::Division),
            Evenement::Chiffre(0),
            Evenement::Egal,
        ],
    );
    assert_eq!(m.etat().phase(), Phase::Erreur);
}

#[test]
fn memoire_ajouter_puis_rappel() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Chiffre(4),
            Evenement::MemoireAjouter,
            Evenement::ToutEffacer,
            Evenement::MemoireRappel,
        ],
    );
    assert_eq!(ecran.valeur, "4");
    assert_eq!(m.etat().memoire(), 4.0);
    assert!(m.etat().attente_saisie());
    assert_eq!(m.magasin().lire_memoire().unwrap(), 4.0);
}

#[test]
fn un_plus_deux_plus() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Chiffre(1),
            Evenement::Operateur(Operateur::Addition),
            Evenement::Chiffre(2),
            Evenement::Operateur(Operateur::Addition),
        ],
    );
    assert_eq!(ecran.valeur, "3");
    assert_eq!(ecran.apercu, "3 +");
    assert_eq!(m.etat().precedent(), Some(3.0));
    assert_eq!(m.etat().operateur(), Some(Operateur::Addition));
}

#[test]
fn reprise_apres_relance() {
    let mut magasin = MagasinVolatile::default();
    {
        let mut ecran = Ecran::default();
        let mut m = Moteur::ouvrir(Box::new(magasin.clone()));
        jouer(
            &mut m,
            &mut ecran,
            &[
                Evenement::Chiffre(2),
                Evenement::Operateur(Operateur::Puissance),
                Evenement::Chiffre(8),
                Evenement::Egal,
                Evenement::MemoireAjouter,
            ],
        );
        // recopie du magasin “après session”
        for cle in [super::magasin::CLE_MEMOIRE, super::magasin::CLE_HISTORIQUE] {
            let texte = m.magasin().lire_texte(cle).unwrap().unwrap();
            magasin.ecrire_texte(cle, texte).unwrap();
        }
    }

    let m = Moteur::ouvrir(Box::new(magasin));
    assert_eq!(m.etat().memoire(), 256.0);
    assert_eq!(m.etat().historique(), ["2 ^ 8 = 256".to_string()]);
    assert_eq!(m.etat().valeur(), "0");
}

#[test]
fn pourcentage_puis_operation() {
    let (mut m, mut ecran) = nouveau();
    jouer(
        &mut m,
        &mut ecran,
        &[
            Evenement::Chiffre(2),
            Evenement::Chiffre(0),
            Evenement::Chiffre(0),
            Evenement::Operateur(Operateur::Multiplication),
            Evenement::Chiffre(1),
            Evenement::Chiffre(5),
            Evenement::Pourcentage,
            Evenement::Egal,
        ],
    );
    assert_eq!(ecran.valeur, "30");
    assert_eq!(m.etat().historique()[0], "200 × 0.15 = 30");
}
