// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Pavé 4 colonnes (chiffres, opérateurs, parenthèses, C, =) + DEL + AC
// - Clavier : chiffres/opérateurs tapés, Enter évalue, Backspace efface, ESC = C
// - Panneau des jetons en direct
// - Arbre en texte (une ligne par noeud), pas de SVG / zoom
//
// Note :
// - La vue ne fait AUCUN calcul : elle appelle les actions de etat.rs.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::{dessin_arbre, lignes_jetons};
use crate::noyau::jetons::{format_jetons, Op};
use crate::noyau::saisie::Touche;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_jetons(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_arbre(ui);
            });
    }

    /// Clavier physique : texte tapé -> touches, plus Enter / Backspace.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let events = ui.input(|i| i.events.clone());

        for ev in events {
            match ev {
                egui::Event::Text(t) => self.saisir(&t),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.calculer(),
                    egui::Key::Backspace => self.retour_arriere(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // "0" tant que rien n’est saisi
        let texte = if self.entree.trim().is_empty() {
            "0"
        } else {
            self.entree.trim()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(28.0));
                });
            });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, Touche::Chiffre('1'));
                self.bouton_touche(ui, Touche::Chiffre('2'));
                self.bouton_touche(ui, Touche::Chiffre('3'));
                self.bouton_touche(ui, Touche::Operateur(Op::Mul));
                ui.end_row();

                self.bouton_touche(ui, Touche::Chiffre('4'));
                self.bouton_touche(ui, Touche::Chiffre('5'));
                self.bouton_touche(ui, Touche::Chiffre('6'));
                self.bouton_touche(ui, Touche::Operateur(Op::Sub));
                ui.end_row();

                self.bouton_touche(ui, Touche::Chiffre('7'));
                self.bouton_touche(ui, Touche::Chiffre('8'));
                self.bouton_touche(ui, Touche::Chiffre('9'));
                self.bouton_touche(ui, Touche::Operateur(Op::Add));
                ui.end_row();

                self.bouton_touche(ui, Touche::Chiffre('0'));
                self.bouton_action(ui, "C", "Efface l’entrée", Action::ClearEntree);
                self.bouton_touche(ui, Touche::Operateur(Op::Div));
                self.bouton_action(ui, "=", "Calcule et réinjecte le résultat", Action::Calculer);
                ui.end_row();

                self.bouton_touche(ui, Touche::ParOuvrante);
                self.bouton_touche(ui, Touche::ParFermante);
                self.bouton_touche(ui, Touche::Point);
                self.bouton_action(ui, "DEL", "Efface la dernière touche", Action::Backspace);
                ui.end_row();
            });

        ui.add_space(6.0);
        self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
    }

    fn ui_jetons(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Jetons")
            .default_open(true)
            .show(ui, |ui| {
                if self.jetons.is_empty() {
                    ui.monospace("(aucun)");
                    return;
                }
                ui.label(format!("Forme normalisée : {}", format_jetons(&self.jetons)));
                ui.add_space(4.0);
                for ligne in lignes_jetons(&self.jetons) {
                    ui.monospace(ligne);
                }
            });
    }

    fn ui_arbre(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Arbre")
            .default_open(true)
            .show(ui, |ui| match &self.arbre {
                Some(arbre) => {
                    ui.label(format!("Postfixe : {}", self.postfixe));
                    ui.add_space(4.0);
                    Self::champ_monospace(ui, "arbre_out", &dessin_arbre(arbre));
                }
                None => {
                    ui.monospace("(pas encore de calcul)");
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(touche.texte()));
        if resp.clicked() {
            self.touche(touche);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.retour_arriere(),
                Action::Calculer => self.calculer(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
    Calculer,
}
