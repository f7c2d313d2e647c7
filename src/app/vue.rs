// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, libellés transmis tels quels au cerveau
// - Affichage + historique en monospace
//
// Note :
// - Clavier (Enter / Escape / Backspace) géré dans app.rs

use eframe::egui;

use super::etat::{AppCalc, NOM_MEMOIRE};
use crate::noyau::jetons::format_jetons;

/// Taille d’une touche du pavé.
const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_programme(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");
        Self::champ_monospace(ui, "historique_out", &self.historique, 1);

        ui.add_space(6.0);

        ui.label("Affichage :");
        Self::champ_monospace(ui, "affichage_out", &self.affichage, 1);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "7", Touche::Chiffre);
                self.touche(ui, "8", Touche::Chiffre);
                self.touche(ui, "9", Touche::Chiffre);
                self.touche(ui, "÷", Touche::Operation);
                self.touche(ui, "√", Touche::Operation);
                ui.end_row();

                self.touche(ui, "4", Touche::Chiffre);
                self.touche(ui, "5", Touche::Chiffre);
                self.touche(ui, "6", Touche::Chiffre);
                self.touche(ui, "×", Touche::Operation);
                self.touche(ui, "sin", Touche::Operation);
                ui.end_row();

                self.touche(ui, "1", Touche::Chiffre);
                self.touche(ui, "2", Touche::Chiffre);
                self.touche(ui, "3", Touche::Chiffre);
                self.touche(ui, "-", Touche::Operation);
                self.touche(ui, "cos", Touche::Operation);
                ui.end_row();

                self.touche(ui, "0", Touche::Chiffre);
                self.touche(ui, ".", Touche::Decimale);
                self.touche(ui, "±", Touche::Operation);
                self.touche(ui, "+", Touche::Operation);
                self.touche(ui, "π", Touche::Operation);
                ui.end_row();

                self.touche(ui, "↵", Touche::Entrer);
                self.touche(ui, "⌫", Touche::RetourArriere);
                self.touche(ui, "C", Touche::EffacerTout);
                self.touche(ui, "→M", Touche::Memoriser);
                self.touche(ui, NOM_MEMOIRE, Touche::RappelMemoire);
                ui.end_row();
            });
    }

    fn ui_programme(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Programme")
            .default_open(false)
            .show(ui, |ui| {
                let courant = format_jetons(&self.cerveau.program());
                Self::champ_monospace(ui, "programme_courant", &courant, 1);

                if let Some(m) = self.cerveau.variable_values().get(NOM_MEMOIRE) {
                    ui.monospace(format!("{NOM_MEMOIRE} = {m}"));
                }

                ui.horizontal(|ui| {
                    if ui
                        .button("Sauver")
                        .on_hover_text("Garde le programme en mémoire")
                        .clicked()
                    {
                        self.sauver_programme();
                    }

                    let dispo = self.programme_sauve.is_some();
                    if ui
                        .add_enabled(dispo, egui::Button::new("Rappeler"))
                        .on_hover_text("Recharge le programme gardé")
                        .clicked()
                    {
                        self.restaurer_programme();
                    }
                });

                if let Some(sauve) = &self.programme_sauve {
                    Self::champ_monospace(ui, "programme_sauve", &format_jetons(sauve), 1);
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, kind: Touche) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            Touche::Chiffre => self.ajouter_chiffre(label),
            Touche::Decimale => self.ajouter_decimale(label),
            Touche::Operation => self.operer(label),
            Touche::Entrer => self.entrer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::EffacerTout => self.effacer_tout(),
            Touche::Memoriser => self.memoriser(),
            Touche::RappelMemoire => self.rappeler_memoire(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre,
    Decimale,
    Operation,
    Entrer,
    RetourArriere,
    EffacerTout,
    Memoriser,
    RappelMemoire,
}
