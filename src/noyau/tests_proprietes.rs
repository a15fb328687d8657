//! Propriétés (proptest) : saisie, chaînage, division par zéro, idempotence de "=",
//! borne de l’historique, aller-retour texte -> nombre -> texte.

use proptest::prelude::*;

use super::etat::{EtatMoteur, Phase, HISTORIQUE_MAX};
use super::format::{format_resultat, parse_nombre};
use super::operateur::Operateur;

fn saisir(e: &mut EtatMoteur, texte: &str) {
    for c in texte.chars() {
        match c {
            '.' => e.saisir_virgule(),
            _ => e.saisir_chiffre(c as u8 - b'0'),
        }
    }
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop::sample::select(Operateur::TOUS.to_vec())
}

prop_compose! {
    /// Numéral minimal : pas de zéro de tête, pas de zéro final, ≤ 10 décimales.
    fn numeral_minimal()(
        entier in 0u64..100_000,
        decimales in prop::collection::vec(0u8..10, 0..=10),
        negatif in any::<bool>(),
    ) -> String {
        let mut frac: String = decimales.iter().map(|d| char::from(b'0' + d)).collect();
        while frac.ends_with('0') {
            frac.pop();
        }
        let s = if frac.is_empty() {
            entier.to_string()
        } else {
            format!("{entier}.{frac}")
        };
        if negatif && s != "0" {
            format!("-{s}")
        } else {
            s
        }
    }
}

proptest! {
    #[test]
    fn saisie_concatene(entier in "[0-9]{0,8}", frac in prop::option::of("[0-9]{0,6}")) {
        prop_assume!(!entier.is_empty() || frac.is_some());

        let mut e = EtatMoteur::default();
        let mut touches = entier.clone();
        if let Some(f) = &frac {
            touches.push('.');
            touches.push_str(f);
        }
        saisir(&mut e, &touches);

        let tete = entier.trim_start_matches('0');
        let mut attendu = if tete.is_empty() { "0".to_string() } else { tete.to_string() };
        if let Some(f) = &frac {
            attendu.push('.');
            attendu.push_str(f);
        }
        prop_assert_eq!(e.valeur(), attendu.as_str());
    }

    #[test]
    fn chainage_evalue_avant_d_empiler(
        a in 1u32..1000,
        b in 1u32..1000,
        op1 in operateur(),
        op2 in operateur(),
    ) {
        let mut e = EtatMoteur::default();
        saisir(&mut e, &a.to_string());
        e.choisir_operateur(op1);
        saisir(&mut e, &b.to_string());
        e.choisir_operateur(op2);

        match op1.appliquer(a as f64, b as f64) {
            Ok(r) => {
                let texte = format_resultat(r);
                prop_assert_eq!(e.valeur(), texte.as_str());
                prop_assert_eq!(e.precedent(), Some(parse_nombre(&texte)));
                prop_assert_eq!(e.operateur(), Some(op2));
            }
            Err(_) => prop_assert_eq!(e.phase(), Phase::Erreur),
        }
    }

    #[test]
    fn division_par_zero_toujours_en_erreur(
        a in "[0-9]{1,6}",
        modulo in any::<bool>(),
    ) {
        let mut e = EtatMoteur::default();
        saisir(&mut e, &a);
        e.choisir_operateur(if modulo { Operateur::Modulo } else { Operateur::Division });
        e.saisir_chiffre(0);
        e.evaluer();
        prop_assert_eq!(e.phase(), Phase::Erreur);
        prop_assert_eq!(e.valeur(), "Error");
        prop_assert_eq!(e.precedent(), None);
        prop_assert_eq!(e.operateur(), None);
    }

    #[test]
    fn egal_repete_sans_effet(a in 0u32..10_000, b in 0u32..10_000, op in operateur()) {
        let mut e = EtatMoteur::default();
        saisir(&mut e, &a.to_string());
        e.choisir_operateur(op);
        saisir(&mut e, &b.to_string());
        e.evaluer();
        let apres_premier = e.clone();
        e.evaluer();
        prop_assert_eq!(e, apres_premier);
    }

    #[test]
    fn historique_borne_et_ordonne(n in 1usize..25) {
        let mut e = EtatMoteur::default();
        for i in 0..n {
            e.tout_effacer();
            saisir(&mut e, &i.to_string());
            e.choisir_operateur(Operateur::Addition);
            e.saisir_chiffre(0);
            e.evaluer();
        }
        prop_assert_eq!(e.historique().len(), n.min(HISTORIQUE_MAX));
        let tete = format!("{} + 0 = {}", n - 1, n - 1);
        prop_assert_eq!(e.historique()[0].as_str(), tete.as_str());
    }

    #[test]
    fn aller_retour_texte(s in numeral_minimal()) {
        prop_assert_eq!(format_resultat(parse_nombre(&s)), s);
    }

    #[test]
    fn valeur_toujours_numerale_ou_erreur(
        touches in prop::collection::vec(0u8..20, 0..40),
    ) {
        let mut e = EtatMoteur::default();
        for t in touches {
            match t {
                0..=9 => e.saisir_chiffre(t),
                10 => e.saisir_virgule(),
                11 => e.choisir_operateur(Operateur::Division),
                12 => e.choisir_operateur(Operateur::Puissance),
                13 => { e.evaluer(); }
                14 => e.effacer_dernier(),
                15 => e.changer_signe(),
                16 => e.pourcentage(),
                17 => e.effacer_entree(),
                18 => e.memoire_rappel(),
                _ => { e.memoire_ajouter(); }
            }
            let v = e.valeur();
            if v != "Error" {
                let corps = v.strip_prefix('-').unwrap_or(v);
                prop_assert!(!corps.is_empty());
                prop_assert!(corps.chars().all(|c| c.is_ascii_digit() || c == '.'), "valeur={}", v);
                prop_assert!(corps.matches('.').count() <= 1, "valeur={}", v);
                prop_assert!(corps.chars().any(|c| c.is_ascii_digit()), "valeur={}", v);
            }
            prop_assert!(e.operateur().is_none() || e.precedent().is_some());
        }
    }
}
