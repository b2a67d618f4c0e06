// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - rendu = lecture seule du triple d'affichage (aucun état dupliqué)
// - clavier : chiffres, + - * /, '.', '%', Enter (=), Backspace, Échap
// - tactile : gros boutons
//
// Note :
// - Pas de champ texte dans cette vue : la gestion clavier globale est
//   sûre (pas de double saisie, pas de question de focus).

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::{Affichage, Op};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_actions(ui);

        ui.add_space(6.0);

        self.ui_pave(ui);
    }

    /// Clavier physique : à appeler depuis update().
    pub fn gerer_clavier(&mut self, ctx: &egui::Context) {
        let mut touches: Vec<Touche> = Vec::new();

        ctx.input(|i| {
            for ev in &i.events {
                if let egui::Event::Text(texte) = ev {
                    for c in texte.chars() {
                        if let Some(t) = touche_depuis_char(c) {
                            touches.push(t);
                        }
                    }
                }
            }
            if i.key_pressed(egui::Key::Enter) {
                touches.push(Touche::Egal);
            }
            if i.key_pressed(egui::Key::Backspace) {
                touches.push(Touche::Retour);
            }
            // Échap = CE (et donc reset complet en état d'erreur)
            if i.key_pressed(egui::Key::Escape) {
                touches.push(Touche::EffaceSaisie);
            }
        });

        for t in touches {
            self.appuyer(t);
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let affichage = self.affichage().clone();
        let memoire = self.memoire_occupee();

        // ligne secondaire : expression engagée + indicateur mémoire
        ui.horizontal(|ui| {
            if memoire {
                ui.monospace("M");
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(&affichage.secondaire);
            });
        });

        Self::ecran_principal(ui, &affichage);
    }

    fn ecran_principal(ui: &mut egui::Ui, affichage: &Affichage) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(&affichage.principal)
                        .monospace()
                        .size(28.0);
                    if affichage.erreur {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "AC", "Remise à zéro totale", Touche::ResetTotal);
            self.bouton_action(ui, "CE", "Efface l'opérande en cours", Touche::EffaceSaisie);
            self.bouton_action(ui, "⌫", "Efface le dernier caractère", Touche::Retour);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "MC", Touche::MemoireEfface);
                self.bouton(ui, "MR", Touche::MemoireRappel);
                self.bouton(ui, "M+", Touche::MemoirePlus);
                self.bouton(ui, "M−", Touche::MemoireMoins);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "÷", Touche::Operateur(Op::Divise));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "×", Touche::Operateur(Op::Fois));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "−", Touche::Operateur(Op::Moins));
                ui.end_row();

                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "+", Touche::Operateur(Op::Plus));
                ui.end_row();

                self.bouton(ui, "%", Touche::Pourcent);
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Caractère tapé -> touche logique.
/// ',' est accepté comme point décimal (clavier FR).
fn touche_depuis_char(c: char) -> Option<Touche> {
    if c.is_ascii_digit() {
        return Some(Touche::Chiffre(c));
    }
    match c {
        '.' | ',' => Some(Touche::Point),
        '%' => Some(Touche::Pourcent),
        '=' => Some(Touche::Egal),
        _ => Op::depuis_char(c).map(Touche::Operateur),
    }
}
