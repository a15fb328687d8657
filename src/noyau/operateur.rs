// src/noyau/operateur.rs
//
// Opérateurs binaires : énumération fermée + application explicite.
// Pas de table “symbole -> fonction” : chaque variante a son match.

use serde::{Deserialize, Serialize};

use super::erreur::EchecArithmetique;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
}

impl Operateur {
    /// Les six opérateurs, dans l’ordre du pavé.
    pub const TOUS: [Operateur; 6] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
        Operateur::Modulo,
        Operateur::Puissance,
    ];

    /// Applique l’opérateur à (a, b).
    ///
    /// - division / modulo par zéro : échec (y compris 0/0)
    /// - tout résultat non fini (inf, NaN) : échec
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, EchecArithmetique> {
        let r = match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => {
                if b == 0.0 {
                    return Err(EchecArithmetique::DivisionParZero);
                }
                a / b
            }
            Operateur::Modulo => {
                if b == 0.0 {
                    return Err(EchecArithmetique::ModuloParZero);
                }
                // reste tronqué : signe du dividende
                a % b
            }
            Operateur::Puissance => a.powf(b),
        };

        if r.is_finite() {
            Ok(r)
        } else {
            Err(EchecArithmetique::ResultatNonFini)
        }
    }

    /// Symbole affiché (historique + aperçu).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
            Operateur::Modulo => "mod",
            Operateur::Puissance => "^",
        }
    }

    /// Clavier : + - * / ^ %  (% = modulo).
    pub fn depuis_caractere(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Addition),
            '-' => Some(Operateur::Soustraction),
            '*' => Some(Operateur::Multiplication),
            '/' => Some(Operateur::Division),
            '%' => Some(Operateur::Modulo),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }
}
