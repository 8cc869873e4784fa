// src/app/trace.rs
//
// Dessin du graphe (egui Painter) : axes + courbe y = f(M).
// Gestes minimaux : glisser = déplacer l’origine, pincer / ctrl+molette = zoom,
// double-clic = origine au point cliqué.

use eframe::egui;

use super::etat::EtatGraphe;

impl EtatGraphe {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let (reponse, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = reponse.rect;
        let painter = painter.with_clip_rect(rect);

        /* ------------------------ Gestes ------------------------ */

        if reponse.dragged() {
            let d = reponse.drag_delta();
            self.deplacer(d.x, d.y);
        }
        if reponse.double_clicked() {
            if let Some(pos) = reponse.interact_pointer_pos() {
                let d = pos - rect.center();
                self.recentrer(d.x, d.y);
            }
        }
        if reponse.hovered() {
            let zoom = ui.input(|i| i.zoom_delta());
            if zoom != 1.0 {
                self.zoomer(zoom);
            }
        }

        /* ------------------------ Axes ------------------------ */

        let visuals = ui.visuals();
        painter.rect_filled(rect, egui::CornerRadius::ZERO, visuals.extreme_bg_color);

        let origine = rect.center() + egui::vec2(self.decalage[0], self.decalage[1]);
        let trait_axes = egui::Stroke::new(1.0, visuals.weak_text_color());

        painter.line_segment(
            [
                egui::pos2(rect.left(), origine.y),
                egui::pos2(rect.right(), origine.y),
            ],
            trait_axes,
        );
        painter.line_segment(
            [
                egui::pos2(origine.x, rect.top()),
                egui::pos2(origine.x, rect.bottom()),
            ],
            trait_axes,
        );

        /* ------------------------ Courbe ------------------------ */

        let (x_min, x_max, pas) = self.fenetre_x(rect.width());
        let echelle = self.echelle;
        let trait_courbe = egui::Stroke::new(2.0, visuals.selection.bg_fill);

        for troncon in self.traceur.troncons(x_min, x_max, pas) {
            let points: Vec<egui::Pos2> = troncon
                .into_iter()
                .map(|(x, y)| {
                    egui::pos2(
                        rect.left() + (x - x_min) as f32 * echelle,
                        origine.y - y as f32 * echelle,
                    )
                })
                .filter(|p| p.y.is_finite())
                .collect();

            match points.len() {
                0 => {}
                1 => {
                    painter.circle_filled(points[0], 1.5, trait_courbe.color);
                }
                _ => {
                    painter.add(egui::Shape::line(points, trait_courbe));
                }
            }
        }

        /* ------------------------ Légende ------------------------ */

        painter.text(
            rect.left_top() + egui::vec2(6.0, 6.0),
            egui::Align2::LEFT_TOP,
            format!("y = {}", self.traceur.titre()),
            egui::FontId::monospace(13.0),
            visuals.text_color(),
        );
    }
}
