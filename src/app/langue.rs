// src/app/langue.rs
//
// Libellés EN / VN (seulement ce qui n’est pas un chiffre ou un symbole).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Langue {
    #[default]
    En,
    Vn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Libelle {
    Titre,
    Memoire,
    HistoriqueCalculs,
    EffacerHistorique,
    HistoriqueVide,
    Mc,
    Mr,
    MPlus,
    MMoins,
    Bascule,
    Theme,
}

impl Langue {
    pub fn suivante(self) -> Langue {
        match self {
            Langue::En => Langue::Vn,
            Langue::Vn => Langue::En,
        }
    }

    pub fn texte(self, l: Libelle) -> &'static str {
        use Libelle::*;

        match (self, l) {
            (Langue::En, Titre) => "Calculator",
            (Langue::Vn, Titre) => "Máy tính",

            (Langue::En, Memoire) => "Memory",
            (Langue::Vn, Memoire) => "Bộ nhớ",

            (Langue::En, HistoriqueCalculs) => "Calculation History",
            (Langue::Vn, HistoriqueCalculs) => "Lịch sử tính toán",

            (Langue::En, EffacerHistorique) => "Clear History",
            (Langue::Vn, EffacerHistorique) => "Xóa lịch sử",

            (Langue::En, HistoriqueVide) => "No calculations yet",
            (Langue::Vn, HistoriqueVide) => "Chưa có phép tính",

            (Langue::En, Mc) => "MC",
            (Langue::Vn, Mc) => "XN",

            (Langue::En, Mr) => "MR",
            (Langue::Vn, Mr) => "GN",

            (_, MPlus) => "M+",
            (_, MMoins) => "M−",

            (Langue::En, Bascule) => "EN | VN",
            (Langue::Vn, Bascule) => "VN | EN",

            (Langue::En, Theme) => "Toggle dark mode",
            (Langue::Vn, Theme) => "Chế độ tối",
        }
    }
}
