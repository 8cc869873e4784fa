// src/noyau/graphe.rs
//
// Côté graphe : un SECOND moteur, indépendant de la calculatrice.
// Il reçoit le programme sérialisé (pas d’objet partagé), lie la variable M
// à chaque abscisse et évalue pour obtenir l’ordonnée.

use log::trace;

use super::pile::MoteurRpn;
use super::programme::Programme;

/// Variable liée à l’abscisse.
pub const VARIABLE_GRAPHE: &str = "M";

/// Garde-fou : nombre maximal d’échantillons par balayage.
pub const ECHANTILLONS_MAX: usize = 20_000;

#[derive(Clone, Debug)]
pub struct Traceur {
    moteur: MoteurRpn,
    titre: String,
}

impl Traceur {
    pub fn new(programme: &Programme, titre: impl Into<String>) -> Self {
        let mut moteur = MoteurRpn::new();
        moteur.deserialize(programme);
        Self {
            moteur,
            titre: titre.into(),
        }
    }

    /// Reçoit le programme sous sa forme texte (tableau JSON de symboles).
    pub fn depuis_json(json: &str, titre: impl Into<String>) -> Result<Self, String> {
        let programme = Programme::from_json(json)?;
        Ok(Self::new(&programme, titre))
    }

    pub fn titre(&self) -> &str {
        &self.titre
    }

    #[cfg(test)]
    pub fn programme(&self) -> Programme {
        self.moteur.serialize()
    }

    /// y = f(x), ou None si indéfini / non fini.
    pub fn y_pour_x(&mut self, x: f64) -> Option<f64> {
        self.moteur.set_variable(VARIABLE_GRAPHE, x);
        match self.moteur.evaluate() {
            Some(y) if y.is_finite() => Some(y),
            autre => {
                trace!("x={x}: pas de point ({autre:?})");
                None
            }
        }
    }

    /// Balaye [x_min, x_max] par pas fixe. Pas nul, négatif ou non fini => rien.
    pub fn echantillonner(&mut self, x_min: f64, x_max: f64, pas: f64) -> Vec<(f64, Option<f64>)> {
        if !pas.is_finite() || pas <= 0.0 || !x_min.is_finite() || !x_max.is_finite() || x_max < x_min {
            return Vec::new();
        }

        let n = (((x_max - x_min) / pas).floor() as usize).saturating_add(1);
        let n = n.min(ECHANTILLONS_MAX);

        (0..n)
            .map(|i| {
                let x = x_min + i as f64 * pas;
                (x, self.y_pour_x(x))
            })
            .collect()
    }

    /// Tronçons continus (coupés à chaque point indéfini), prêts à relier par des segments.
    pub fn troncons(&mut self, x_min: f64, x_max: f64, pas: f64) -> Vec<Vec<(f64, f64)>> {
        let mut out: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut courant: Vec<(f64, f64)> = Vec::new();

        for (x, y) in self.echantillonner(x_min, x_max, pas) {
            match y {
                Some(y) => courant.push((x, y)),
                None => {
                    if !courant.is_empty() {
                        out.push(std::mem::take(&mut courant));
                    }
                }
            }
        }
        if !courant.is_empty() {
            out.push(courant);
        }

        out
    }
}
