//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, historique, saisie en cours)
//! et traduire les touches en appels au moteur RPN.
//!
//! Contrats :
//! - Aucun dessin ici (pas d’egui).
//! - Une touche = une action déterministe.
//! - Le graphe reçoit une COPIE sérialisée du programme, jamais le moteur lui-même.

use log::{debug, warn};

use crate::noyau::jetons::format_operande;
use crate::noyau::{lire_nombre, MoteurRpn, Traceur, VARIABLE_GRAPHE};

/// Échelle par défaut du graphe (points écran par unité).
pub const ECHELLE_DEFAUT: f32 = 40.0;

/// Garde-fous du zoom.
const ECHELLE_MIN: f32 = 0.5;
const ECHELLE_MAX: f32 = 5_000.0;

/* ------------------------ Graphe ------------------------ */

/// Fenêtre graphe : traceur + cadrage (origine décalée du centre, échelle).
#[derive(Clone, Debug)]
pub struct EtatGraphe {
    pub traceur: Traceur,
    pub decalage: [f32; 2],
    pub echelle: f32,
}

impl EtatGraphe {
    pub fn new(traceur: Traceur) -> Self {
        Self {
            traceur,
            decalage: [0.0, 0.0],
            echelle: ECHELLE_DEFAUT,
        }
    }

    /// Glisser : l’origine suit le pointeur.
    pub fn deplacer(&mut self, dx: f32, dy: f32) {
        self.decalage[0] += dx;
        self.decalage[1] += dy;
    }

    /// Zoom multiplicatif, borné. Facteur nul, négatif ou non fini ignoré.
    pub fn zoomer(&mut self, facteur: f32) {
        if facteur.is_finite() && facteur > 0.0 {
            self.echelle = (self.echelle * facteur).clamp(ECHELLE_MIN, ECHELLE_MAX);
        }
    }

    /// Double-clic : l’origine vient au point cliqué (décalage depuis le centre).
    pub fn recentrer(&mut self, dx: f32, dy: f32) {
        self.decalage = [dx, dy];
    }

    /// Intervalle d’abscisses visible pour une largeur écran donnée + pas d’un point écran.
    pub fn fenetre_x(&self, largeur: f32) -> (f64, f64, f64) {
        let e = self.echelle as f64;
        let centre = largeur as f64 / 2.0 + self.decalage[0] as f64;
        let x_min = -centre / e;
        let x_max = (largeur as f64 - centre) / e;
        (x_min, x_max, 1.0 / e)
    }
}

/* ------------------------ Calculatrice ------------------------ */

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- sorties ---
    pub affichage: String,
    pub historique: String,

    // --- saisie ---
    saisie_en_cours: bool,

    // --- moteur ---
    moteur: MoteurRpn,

    // --- graphe (fenêtre séparée, moteur séparé) ---
    pub graphe: Option<EtatGraphe>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            historique: String::new(),
            saisie_en_cours: false,
            moteur: MoteurRpn::new(),
            graphe: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Affichage ------------------------ */

    /// Valeur lisible de l’affichage (None si "M", vide, etc.).
    pub fn valeur_affichee(&self) -> Option<f64> {
        lire_nombre(&self.affichage)
    }

    fn set_valeur_affichee(&mut self, valeur: Option<f64>) {
        self.affichage = match valeur {
            Some(v) => format_operande(v),
            None => "0".to_string(),
        };
        self.saisie_en_cours = false;
    }

    #[cfg(test)]
    pub fn saisie_en_cours(&self) -> bool {
        self.saisie_en_cours
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, chiffre: &str) {
        if self.saisie_en_cours {
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = chiffre.to_string();
            self.saisie_en_cours = true;
        }
    }

    /// Un seul séparateur décimal par nombre.
    pub fn virgule(&mut self) {
        if !self.saisie_en_cours {
            self.affichage = "0.".to_string();
            self.saisie_en_cours = true;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Efface le dernier caractère saisi ; en dessous d’un caractère, revient à "0".
    pub fn arriere(&mut self) {
        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = "0".to_string();
            self.saisie_en_cours = false;
        }
    }

    /// C : efface seulement l’affichage (pile intacte).
    pub fn effacer_affichage(&mut self) {
        self.affichage = "0".to_string();
        self.saisie_en_cours = false;
    }

    /* ------------------------ Actions moteur ------------------------ */

    /// Entrée : empile la valeur affichée.
    pub fn entrer(&mut self) {
        self.saisie_en_cours = false;
        let Some(v) = self.valeur_affichee() else {
            self.affichage = "0".to_string();
            return;
        };
        let r = self.moteur.push_operand(v);
        self.set_valeur_affichee(r);
        self.historique = self.moteur.describe();
    }

    /// Opération par symbole (tel qu’étiqueté sur la touche).
    pub fn operer(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            self.entrer();
        }

        // Affichage illisible (hors "M") : on refuse l’opération.
        if self.valeur_affichee().is_none() && self.affichage != VARIABLE_GRAPHE {
            debug!("opération {symbole:?} refusée: affichage {:?}", self.affichage);
            self.affichage = "0".to_string();
            return;
        }

        match self.moteur.perform_operation(symbole) {
            Some(r) => self.set_valeur_affichee(Some(r)),
            None => {
                self.affichage = " ".to_string();
                self.saisie_en_cours = false;
            }
        }
        self.historique = format!("{} =", self.moteur.describe());
    }

    /// Touche M : empile la variable.
    pub fn push_m(&mut self) {
        if self.saisie_en_cours {
            self.entrer();
        }
        self.moteur.push_variable(VARIABLE_GRAPHE);
        self.affichage = VARIABLE_GRAPHE.to_string();
        self.historique = self.moteur.describe();
    }

    /// Touche →M : lie M à la valeur affichée, puis réévalue la pile.
    pub fn set_m(&mut self) {
        match self.valeur_affichee() {
            Some(v) => {
                self.moteur.set_variable(VARIABLE_GRAPHE, v);
                let r = self.moteur.evaluate();
                self.set_valeur_affichee(r);
            }
            None => self.affichage = "0".to_string(),
        }
        self.historique = self.moteur.describe();
        self.saisie_en_cours = false;
    }

    /// Touche M⌫ : oublie la valeur de M.
    pub fn clear_m(&mut self) {
        self.moteur.clear_variable(VARIABLE_GRAPHE);
        let r = self.moteur.evaluate();
        self.set_valeur_affichee(r);
        self.historique = self.moteur.describe();
    }

    /// AC : pile + variables + affichage + historique.
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.historique.clear();
        self.saisie_en_cours = false;
        self.moteur.clear();
    }

    /* ------------------------ Graphe ------------------------ */

    /// Transfert vers le graphe : programme sérialisé (texte JSON) + titre = expression au sommet.
    /// En cas d’échec du transfert, la fenêtre reste fermée.
    pub fn ouvrir_graphe(&mut self) {
        let titre = if self.historique.is_empty() {
            ""
        } else {
            self.moteur.current_function().unwrap_or("")
        };
        let transfert = self
            .moteur
            .serialize()
            .to_json()
            .and_then(|json| {
                debug!("graphe: programme={json} titre={titre:?}");
                Traceur::depuis_json(&json, titre)
            });
        match transfert {
            Ok(traceur) => self.graphe = Some(EtatGraphe::new(traceur)),
            Err(e) => warn!("graphe: {e}"),
        }
    }

    pub fn fermer_graphe(&mut self) {
        self.graphe = None;
    }
}
