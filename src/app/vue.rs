// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage (valeur) + historique (pile en notation infixe)
// - Pavé RPN : chiffres, ⏎, opérations étiquetées par leur symbole exact
// - Clavier : chiffres, '.', Enter, Backspace
//
// Les touches d’opération passent leur étiquette telle quelle au moteur.

use eframe::egui;

use super::etat::AppCalc;

/// Opérations du pavé, dans l’ordre d’affichage (étiquette = symbole moteur).
const OPERATIONS: [&str; 8] = ["×", "÷", "+", "−", "√", "sin", "cos", "π"];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_clavier(ui);
        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(28.0),
                    );
                });
            });

        ui.add_space(4.0);

        // Historique : toujours une ligne, même vide
        let historique = if self.historique.is_empty() {
            " "
        } else {
            self.historique.as_str()
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.monospace(historique);
        });
    }

    /// Clavier physique (sans champ texte : on lit les évènements bruts).
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' => self.chiffre(c.encode_utf8(&mut [0u8; 4])),
                            '.' | ',' => self.virgule(),
                            '+' => self.operer("+"),
                            '-' => self.operer("−"),
                            '*' => self.operer("×"),
                            '/' => self.operer("÷"),
                            'm' | 'M' => self.push_m(),
                            _ => {}
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.entrer(),
                    egui::Key::Backspace => self.arriere(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre);
                self.bouton(ui, "8", Touche::Chiffre);
                self.bouton(ui, "9", Touche::Chiffre);
                self.bouton(ui, OPERATIONS[0], Touche::Operation);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre);
                self.bouton(ui, "5", Touche::Chiffre);
                self.bouton(ui, "6", Touche::Chiffre);
                self.bouton(ui, OPERATIONS[1], Touche::Operation);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre);
                self.bouton(ui, "2", Touche::Chiffre);
                self.bouton(ui, "3", Touche::Chiffre);
                self.bouton(ui, OPERATIONS[2], Touche::Operation);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre);
                self.bouton(ui, ".", Touche::Virgule);
                self.bouton(ui, "⏎", Touche::Entrer);
                self.bouton(ui, OPERATIONS[3], Touche::Operation);
                ui.end_row();

                for op in &OPERATIONS[4..] {
                    self.bouton(ui, op, Touche::Operation);
                }
                ui.end_row();

                self.bouton(ui, "M", Touche::PushM);
                self.bouton(ui, "→M", Touche::SetM);
                self.bouton(ui, "M⌫", Touche::ClearM);
                self.bouton(ui, "AC", Touche::Effacer);
                ui.end_row();

                self.bouton(ui, "⌫", Touche::Arriere);
                self.bouton(ui, "C", Touche::EffacerAffichage);
                self.bouton(ui, "Graphe", Touche::Graphe);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre => self.chiffre(label),
            Touche::Virgule => self.virgule(),
            Touche::Entrer => self.entrer(),
            Touche::Operation => self.operer(label),
            Touche::Arriere => self.arriere(),
            Touche::PushM => self.push_m(),
            Touche::SetM => self.set_m(),
            Touche::ClearM => self.clear_m(),
            Touche::Effacer => self.effacer(),
            Touche::EffacerAffichage => self.effacer_affichage(),
            Touche::Graphe => self.ouvrir_graphe(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre,
    Virgule,
    Entrer,
    Operation,
    Arriere,
    PushM,
    SetM,
    ClearM,
    Effacer,
    EffacerAffichage,
    Graphe,
}
