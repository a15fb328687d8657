//! État du moteur + machine à états (saisie / opérateur en attente / erreur).
//!
//! Contrats :
//! - `valeur` vaut "Error" ou un numéral décimal valide ('-' optionnel, un seul '.', chiffres).
//! - `operateur` n’est présent que si `precedent` l’est.
//! - `historique` : au plus 10 entrées, la plus récente en tête.
//! - Aucune E/S ici : chaque opération rend les `Changements` à persister.

use super::erreur::EchecArithmetique;
use super::evenement::Evenement;
use super::format::{format_resultat, parse_nombre};
use super::operateur::Operateur;

/// Texte affiché en état d’erreur.
pub const VALEUR_ERREUR: &str = "Error";

/// Taille maximale de l’historique.
pub const HISTORIQUE_MAX: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Construction d’un opérande.
    Saisie,
    /// Opérateur choisi, second opérande attendu.
    OperateurEnAttente,
    /// Terminal jusqu’à une saisie ou un effacement.
    Erreur,
}

/// Ce qu’une opération a modifié côté persistant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changements {
    pub memoire: bool,
    pub historique: bool,
}

impl Changements {
    const MEMOIRE: Changements = Changements {
        memoire: true,
        historique: false,
    };
    const HISTORIQUE: Changements = Changements {
        memoire: false,
        historique: true,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatMoteur {
    valeur: String,
    precedent: Option<f64>,
    operateur: Option<Operateur>,
    attente_saisie: bool,
    memoire: f64,
    historique: Vec<String>,
    echec: Option<EchecArithmetique>,
}

impl Default for EtatMoteur {
    fn default() -> Self {
        Self::new(0.0, Vec::new())
    }
}

impl EtatMoteur {
    /// État initial (Saisie, "0") à partir des valeurs du magasin.
    pub fn new(memoire: f64, mut historique: Vec<String>) -> Self {
        historique.truncate(HISTORIQUE_MAX);
        Self {
            valeur: "0".to_string(),
            precedent: None,
            operateur: None,
            attente_saisie: false,
            memoire: if memoire.is_finite() { memoire } else { 0.0 },
            historique,
            echec: None,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn valeur(&self) -> &str {
        &self.valeur
    }

    pub fn precedent(&self) -> Option<f64> {
        self.precedent
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn attente_saisie(&self) -> bool {
        self.attente_saisie
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    /// Cause de l’état Erreur courant (None hors erreur).
    pub fn cause_erreur(&self) -> Option<EchecArithmetique> {
        self.echec
    }

    pub fn phase(&self) -> Phase {
        if self.valeur == VALEUR_ERREUR {
            Phase::Erreur
        } else if self.operateur.is_some() {
            Phase::OperateurEnAttente
        } else {
            Phase::Saisie
        }
    }

    /// Aperçu de l’opération en cours : "{précédent} {symbole}" ou vide.
    pub fn apercu(&self) -> String {
        match (self.precedent, self.operateur) {
            (Some(a), Some(op)) => format!("{} {}", format_resultat(a), op.symbole()),
            _ => String::new(),
        }
    }

    /* ------------------------ Aiguillage ------------------------ */

    pub fn appliquer(&mut self, evenement: Evenement) -> Changements {
        match evenement {
            Evenement::Chiffre(d) => self.saisir_chiffre(d),
            Evenement::Virgule => self.saisir_virgule(),
            Evenement::Operateur(op) => self.choisir_operateur(op),
            Evenement::Egal => return self.evaluer(),
            Evenement::ToutEffacer => self.tout_effacer(),
            Evenement::EffacerEntree => self.effacer_entree(),
            Evenement::Retour => self.effacer_dernier(),
            Evenement::ChangerSigne => self.changer_signe(),
            Evenement::Pourcentage => self.pourcentage(),
            Evenement::MemoireEffacer => return self.memoire_effacer(),
            Evenement::MemoireRappel => self.memoire_rappel(),
            Evenement::MemoireAjouter => return self.memoire_ajouter(),
            Evenement::MemoireSoustraire => return self.memoire_soustraire(),
            Evenement::EffacerHistorique => return self.effacer_historique(),
        }
        Changements::default()
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre hors 0..=9 : ignoré.
    pub fn saisir_chiffre(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        self.sortir_erreur();

        let c = char::from(b'0' + d);

        if self.attente_saisie {
            self.valeur = c.to_string();
            self.attente_saisie = false;
            return;
        }

        match self.valeur.as_str() {
            "0" => self.valeur = c.to_string(),
            "-0" => self.valeur = format!("-{c}"),
            _ => self.valeur.push(c),
        }
    }

    pub fn saisir_virgule(&mut self) {
        self.sortir_erreur();

        if self.attente_saisie {
            self.valeur = "0.".to_string();
            self.attente_saisie = false;
            return;
        }

        if !self.valeur.contains('.') {
            self.valeur.push('.');
        }
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Choisit un opérateur. Si un opérateur est déjà en attente et qu’un
    /// second opérande a été saisi, il est évalué d’abord (chaînage).
    pub fn choisir_operateur(&mut self, op: Operateur) {
        if self.phase() == Phase::Erreur {
            return;
        }

        match (self.precedent, self.operateur) {
            (Some(a), Some(en_attente)) if !self.attente_saisie => {
                let b = parse_nombre(&self.valeur);
                match en_attente.appliquer(a, b) {
                    Ok(r) => {
                        let texte = format_resultat(r);
                        self.precedent = Some(parse_nombre(&texte));
                        self.valeur = texte;
                    }
                    Err(e) => {
                        self.passer_en_erreur(e);
                        return;
                    }
                }
            }
            // opérateur remplacé sans second opérande
            (Some(_), _) => {}
            (None, _) => self.precedent = Some(parse_nombre(&self.valeur)),
        }

        self.operateur = Some(op);
        self.attente_saisie = true;
    }

    /// "=" : sans effet sans opérateur, sans précédent, ou sans second opérande.
    pub fn evaluer(&mut self) -> Changements {
        let (a, op) = match (self.precedent, self.operateur) {
            (Some(a), Some(op)) if !self.attente_saisie => (a, op),
            _ => return Changements::default(),
        };

        let b = parse_nombre(&self.valeur);
        match op.appliquer(a, b) {
            Ok(r) => {
                let resultat = format_resultat(r);
                let entree = format!(
                    "{} {} {} = {}",
                    format_resultat(a),
                    op.symbole(),
                    format_resultat(b),
                    resultat
                );
                self.historique.insert(0, entree);
                self.historique.truncate(HISTORIQUE_MAX);

                self.valeur = resultat;
                self.precedent = None;
                self.operateur = None;
                self.attente_saisie = true;
                Changements::HISTORIQUE
            }
            Err(e) => {
                self.passer_en_erreur(e);
                Changements::default()
            }
        }
    }

    /* ------------------------ Effacements / éditions ------------------------ */

    /// AC : retour à l’état initial. Mémoire et historique intacts.
    pub fn tout_effacer(&mut self) {
        self.valeur = "0".to_string();
        self.precedent = None;
        self.operateur = None;
        self.attente_saisie = false;
        self.echec = None;
    }

    /// CE : efface l’entrée seulement (précédent + opérateur conservés).
    pub fn effacer_entree(&mut self) {
        if self.phase() == Phase::Erreur {
            self.tout_effacer();
            return;
        }
        self.valeur = "0".to_string();
        self.attente_saisie = false;
    }

    /// ⌫ : retire le dernier caractère ; vide (ou "-" seul) => "0".
    pub fn effacer_dernier(&mut self) {
        if self.phase() == Phase::Erreur {
            self.tout_effacer();
            return;
        }
        self.valeur.pop();
        if self.valeur.is_empty() || self.valeur == "-" {
            self.valeur = "0".to_string();
        }
    }

    pub fn changer_signe(&mut self) {
        if self.valeur == "0" || self.phase() == Phase::Erreur {
            return;
        }
        self.valeur = match self.valeur.strip_prefix('-') {
            Some(reste) => reste.to_string(),
            None => format!("-{}", self.valeur),
        };
    }

    /// % : divise la valeur courante par 100. Ne touche pas `attente_saisie`.
    pub fn pourcentage(&mut self) {
        if self.phase() == Phase::Erreur {
            return;
        }
        self.valeur = format_resultat(parse_nombre(&self.valeur) / 100.0);
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_effacer(&mut self) -> Changements {
        self.memoire = 0.0;
        Changements::MEMOIRE
    }

    /// MR : copie la mémoire dans l’affichage (sort de l’erreur le cas échéant).
    pub fn memoire_rappel(&mut self) {
        self.echec = None;
        self.valeur = format_resultat(self.memoire);
        self.attente_saisie = true;
    }

    pub fn memoire_ajouter(&mut self) -> Changements {
        self.cumuler_memoire(1.0)
    }

    pub fn memoire_soustraire(&mut self) -> Changements {
        self.cumuler_memoire(-1.0)
    }

    fn cumuler_memoire(&mut self, signe: f64) -> Changements {
        if self.phase() == Phase::Erreur {
            return Changements::default();
        }
        let m = self.memoire + signe * parse_nombre(&self.valeur);
        if !m.is_finite() {
            return Changements::default();
        }
        self.memoire = m;
        // opérateur en attente : le second opérande reste saisi
        if self.operateur.is_none() {
            self.attente_saisie = true;
        }
        Changements::MEMOIRE
    }

    /* ------------------------ Historique ------------------------ */

    pub fn effacer_historique(&mut self) -> Changements {
        self.historique.clear();
        Changements::HISTORIQUE
    }

    /* ------------------------ Erreur ------------------------ */

    fn passer_en_erreur(&mut self, e: EchecArithmetique) {
        self.valeur = VALEUR_ERREUR.to_string();
        self.precedent = None;
        self.operateur = None;
        self.attente_saisie = true;
        self.echec = Some(e);
    }

    fn sortir_erreur(&mut self) {
        if self.phase() == Phase::Erreur {
            self.tout_effacer();
        }
    }
}
