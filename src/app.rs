// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + trace.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le graphe vit dans sa propre fenêtre, avec son propre moteur.

pub mod etat;
pub mod trace;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Taille initiale de la fenêtre graphe.
const TAILLE_GRAPHE: [f32; 2] = [480.0, 360.0];

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’affichage (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer_affichage();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        let mut ouvert = self.graphe.is_some();
        if let Some(graphe) = self.graphe.as_mut() {
            let titre = match graphe.traceur.titre() {
                "" => "Graphe".to_string(),
                t => t.to_string(),
            };
            egui::Window::new(titre)
                .id(egui::Id::new("fenetre_graphe"))
                .open(&mut ouvert)
                .default_size(TAILLE_GRAPHE)
                .resizable(true)
                .show(ctx, |ui| graphe.ui(ui));
        }
        if !ouvert {
            self.fermer_graphe();
        }
    }
}
