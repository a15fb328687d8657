// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : aperçu de l’opération en attente + valeur (taille de police variable)
// - Ligne mémoire : MC / MR / M+ / M− + lecture de la mémoire
// - Pavé : chiffres, virgule, six opérateurs, =, C, CE, DEL, ±, %
// - Historique (10 dernières opérations) + effacement
// - Bascule langue (EN | VN) et thème
//
// Clavier : les caractères tapés passent par Evenement::depuis_caractere ;
// les touches nommées sont traduites par `evenement_touche`.

use eframe::egui;

use super::etat::AppCalc;
use super::langue::Libelle;
use crate::noyau::{Evenement, Operateur};

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [56.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(8.0);

                self.ui_memoire(ui);
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    /// Applique les évènements clavier de la frame.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let evenements: Vec<Evenement> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|e| match e {
                    egui::Event::Text(t) => t
                        .chars()
                        .filter_map(Evenement::depuis_caractere)
                        .collect::<Vec<_>>(),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => evenement_touche(*key).into_iter().collect::<Vec<_>>(),
                    _ => Vec::new(),
                })
                .collect()
        });

        for ev in evenements {
            self.envoyer(ev);
        }
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.texte(Libelle::Titre));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icone = if self.reglages.theme_sombre { "☀" } else { "🌙" };
                if ui
                    .button(icone)
                    .on_hover_text(self.texte(Libelle::Theme))
                    .clicked()
                {
                    self.basculer_theme();
                }
                if ui.button(self.texte(Libelle::Bascule)).clicked() {
                    self.basculer_langue();
                }
            });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d’aperçu toujours présente (hauteur stable)
                    let apercu = if self.ecran.apercu.is_empty() {
                        " "
                    } else {
                        self.ecran.apercu.as_str()
                    };
                    ui.label(egui::RichText::new(apercu).monospace().weak());

                    let valeur = egui::RichText::new(&self.ecran.valeur)
                        .monospace()
                        .size(self.ecran.taille_points());
                    let resp = ui.label(valeur);
                    if let Some(cause) = self.moteur.etat().cause_erreur() {
                        resp.on_hover_text(cause.to_string());
                    }
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} : {}",
                self.texte(Libelle::Memoire),
                self.memoire_affichee()
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // ordre inversé (right_to_left)
                self.touche(ui, self.texte(Libelle::MMoins), Evenement::MemoireSoustraire);
                self.touche(ui, self.texte(Libelle::MPlus), Evenement::MemoireAjouter);
                self.touche(ui, self.texte(Libelle::Mr), Evenement::MemoireRappel);
                self.touche(ui, self.texte(Libelle::Mc), Evenement::MemoireEffacer);
            });
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Evenement::ToutEffacer);
                self.touche(ui, "CE", Evenement::EffacerEntree);
                self.touche(ui, "DEL", Evenement::Retour);
                self.touche_operateur(ui, Operateur::Division);
                ui.end_row();

                self.touche_chiffre(ui, 7);
                self.touche_chiffre(ui, 8);
                self.touche_chiffre(ui, 9);
                self.touche_operateur(ui, Operateur::Multiplication);
                ui.end_row();

                self.touche_chiffre(ui, 4);
                self.touche_chiffre(ui, 5);
                self.touche_chiffre(ui, 6);
                self.touche_operateur(ui, Operateur::Soustraction);
                ui.end_row();

                self.touche_chiffre(ui, 1);
                self.touche_chiffre(ui, 2);
                self.touche_chiffre(ui, 3);
                self.touche_operateur(ui, Operateur::Addition);
                ui.end_row();

                self.touche(ui, "±", Evenement::ChangerSigne);
                self.touche_chiffre(ui, 0);
                self.touche(ui, ".", Evenement::Virgule);
                self.touche(ui, "=", Evenement::Egal);
                ui.end_row();

                self.touche(ui, "%", Evenement::Pourcentage);
                self.touche_operateur(ui, Operateur::Modulo);
                self.touche_operateur(ui, Operateur::Puissance);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(self.texte(Libelle::HistoriqueCalculs));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let vide = self.historique().is_empty();
                let resp = ui.add_enabled(
                    !vide,
                    egui::Button::new(self.texte(Libelle::EffacerHistorique)),
                );
                if resp.clicked() {
                    self.envoyer(Evenement::EffacerHistorique);
                }
            });
        });

        ui.add_space(4.0);

        if self.historique().is_empty() {
            ui.weak(self.texte(Libelle::HistoriqueVide));
            return;
        }

        for entree in self.historique() {
            ui.monospace(entree);
        }
    }

    /* ------------------------ Touches ------------------------ */

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, evenement: Evenement) {
        if ui.add_sized(TOUCHE, egui::Button::new(label)).clicked() {
            self.envoyer(evenement);
        }
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        self.touche(ui, &d.to_string(), Evenement::Chiffre(d));
    }

    fn touche_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.touche(ui, op.symbole(), Evenement::Operateur(op));
    }
}

/// Touches nommées -> évènement.
/// Entrée = "=", Échap = C, Retour arrière = DEL, Suppr = CE.
pub fn evenement_touche(key: egui::Key) -> Option<Evenement> {
    match key {
        egui::Key::Enter => Some(Evenement::Egal),
        egui::Key::Escape => Some(Evenement::ToutEffacer),
        egui::Key::Backspace => Some(Evenement::Retour),
        egui::Key::Delete => Some(Evenement::EffacerEntree),
        _ => None,
    }
}
