// src/noyau/format.rs
//
// Frontière texte <-> nombre.
// La saisie reste du texte (source de vérité) ; on ne parse qu’aux bornes
// (opérateur, égal, pourcentage, mémoire).

/// Décimales conservées après arrondi (absorbe le bruit flottant : 0.1+0.2).
const DECIMALES: i32 = 10;

/* ------------------------ Lecture ------------------------ */

/// Texte décimal -> f64.
/// Texte illisible ("-", "Error", vide) : 0.
pub fn parse_nombre(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/* ------------------------ Écriture ------------------------ */

/// Arrondi à 10 décimales (demi vers l’extérieur).
/// Les entiers passent tels quels : x * 1e10 / 1e10 n’est pas toujours x.
pub fn arrondir(x: f64) -> f64 {
    if x.fract() == 0.0 {
        return x;
    }
    let echelle = 10f64.powi(DECIMALES);
    let r = (x * echelle).round() / echelle;
    if r.is_finite() {
        r
    } else {
        x
    }
}

/// Résultat -> texte décimal minimal (pas de zéros forcés, pas d’exposant,
/// pas de séparateur de milliers). `-0` s’affiche "0".
pub fn format_resultat(x: f64) -> String {
    let v = arrondir(x);
    if v == 0.0 {
        return "0".to_string();
    }
    // Display f64 : plus courte écriture qui relit la même valeur, sans exposant.
    format!("{v}")
}

/// Lecture de la mémoire (deux décimales fixes).
pub fn format_memoire(m: f64) -> String {
    if m == 0.0 {
        return "0.00".to_string();
    }
    format!("{m:.2}")
}

/* ------------------------ Taille d’affichage (cosmétique) ------------------------ */

const TAILLE_BASE_REM: f32 = 2.75;
const TAILLE_MIN_REM: f32 = 1.1;
const PAS_REM: f32 = 0.12;
const CARACTERES_PLEINE_TAILLE: usize = 10;

/// Taille de police (rem) pour une valeur affichée.
/// Au-delà de 10 caractères visibles (hors '-' de tête), on réduit d’un pas
/// par caractère, jusqu’au plancher.
pub fn echelle_police(valeur: &str) -> f32 {
    let longueur = valeur.strip_prefix('-').unwrap_or(valeur).chars().count();
    if longueur <= CARACTERES_PLEINE_TAILLE {
        return TAILLE_BASE_REM;
    }
    let extra = (longueur - CARACTERES_PLEINE_TAILLE) as f32;
    (TAILLE_BASE_REM - extra * PAS_REM).max(TAILLE_MIN_REM)
}
