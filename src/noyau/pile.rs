// src/noyau/pile.rs
//
// Moteur RPN : pile de jetons + table des variables.
//
// Contrats :
// - La pile EST le programme (ordre d’empilement = ordre postfixe).
// - Elle ne fait que grandir ; seul clear() la vide.
// - Évaluation et rendu ne modifient jamais la pile.
// - Variables résolues à chaque évaluation (liaison tardive).
// - Aucune panique : "indéfini" = None, pile incomplète = fragment "?".
//
// Évaluation et rendu : une passe avant avec pile de travail explicite.
// Résultat identique à la descente récursive depuis la fin de la pile,
// sans limite de profondeur.

use std::collections::HashMap;

use log::debug;

use super::jetons::{format_jetons, Constante, Jeton, OpBinaire, OpUnaire, PRECEDENCE_ATOMIQUE};
use super::programme::{lire_nombre, Programme};

/// Texte d’un argument manquant.
const FRAGMENT_MANQUANT: &str = "?";

/// Précédence de "?" : toujours parenthésé sous un opérateur binaire.
const PRECEDENCE_MANQUANT: i32 = 0;

#[derive(Clone, Debug)]
pub struct MoteurRpn {
    pile: Vec<Jeton>,
    connues: HashMap<String, Jeton>,
    variables: HashMap<String, f64>,
    fonction_courante: Option<String>,
}

impl Default for MoteurRpn {
    fn default() -> Self {
        Self::new()
    }
}

impl MoteurRpn {
    pub fn new() -> Self {
        let mut moteur = Self {
            pile: Vec::new(),
            connues: HashMap::new(),
            variables: HashMap::new(),
            fonction_courante: None,
        };

        for op in OpBinaire::TOUS {
            moteur.apprendre(Jeton::Binaire(op));
        }
        for op in OpUnaire::TOUS {
            moteur.apprendre(Jeton::Unaire(op));
        }
        for c in Constante::TOUTES {
            moteur.apprendre(Jeton::Constante(c));
        }

        moteur
    }

    fn apprendre(&mut self, jeton: Jeton) {
        self.connues.insert(jeton.symbole(), jeton);
    }

    /* ------------------------ Empilement ------------------------ */

    pub fn push_operand(&mut self, valeur: f64) -> Option<f64> {
        self.empiler(Jeton::Operande(valeur))
    }

    pub fn push_variable(&mut self, nom: &str) -> Option<f64> {
        self.empiler(Jeton::Variable(nom.to_string()))
    }

    /// Symbole inconnu => None, pile intacte.
    pub fn perform_operation(&mut self, symbole: &str) -> Option<f64> {
        let Some(jeton) = self.connues.get(symbole).cloned() else {
            debug!("opération inconnue: {symbole:?}");
            return None;
        };
        self.empiler(jeton)
    }

    fn empiler(&mut self, jeton: Jeton) -> Option<f64> {
        self.pile.push(jeton);
        debug!("pile: {}", format_jetons(&self.pile));
        self.evaluate()
    }

    /* ------------------------ Variables ------------------------ */

    pub fn set_variable(&mut self, nom: &str, valeur: f64) {
        self.variables.insert(nom.to_string(), valeur);
    }

    /// Idempotent : retirer une variable absente ne fait rien.
    pub fn clear_variable(&mut self, nom: &str) {
        self.variables.remove(nom);
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn evaluate(&self) -> Option<f64> {
        reduire(&self.pile, &self.variables)
    }

    /// Expressions infixes complètes, de la plus ancienne (gauche) à la plus récente,
    /// séparées par ", ". Met à jour `current_function`.
    pub fn describe(&mut self) -> String {
        let fragments = rendre(&self.pile);

        // L’expression au sommet est celle que calcule evaluate().
        self.fonction_courante = fragments.last().map(|f| f.texte.clone());

        let textes: Vec<String> = fragments.into_iter().map(|f| f.texte).collect();
        textes.join(", ")
    }

    /// Expression au sommet lors du dernier describe().
    pub fn current_function(&self) -> Option<&str> {
        self.fonction_courante.as_deref()
    }

    /// Vide la pile ET les variables.
    pub fn clear(&mut self) {
        self.pile.clear();
        self.variables.clear();
    }

    /* ------------------------ Programme ------------------------ */

    pub fn serialize(&self) -> Programme {
        self.pile.iter().map(Jeton::symbole).collect()
    }

    /// Remplace toute la pile. Ne touche pas aux variables.
    pub fn deserialize(&mut self, programme: &Programme) {
        let pile: Vec<Jeton> = programme
            .symboles()
            .iter()
            .map(|s| self.relire(s))
            .collect();
        self.pile = pile;
        debug!("programme chargé: {}", format_jetons(&self.pile));
    }

    fn relire(&self, symbole: &str) -> Jeton {
        if let Some(jeton) = self.connues.get(symbole) {
            return jeton.clone();
        }
        match lire_nombre(symbole) {
            Some(v) => Jeton::Operande(v),
            None => Jeton::Variable(symbole.to_string()),
        }
    }
}

/* ------------------------ Évaluation ------------------------ */

/// Chaque entrée de `valeurs` = une sous-expression complète déjà réduite
/// (None = non réductible : variable libre ou argument manquant).
/// Un échec se propage à tout opérateur qui le consomme.
fn reduire(pile: &[Jeton], variables: &HashMap<String, f64>) -> Option<f64> {
    let mut valeurs: Vec<Option<f64>> = Vec::with_capacity(pile.len());

    for jeton in pile {
        let v = match jeton {
            Jeton::Operande(v) => Some(*v),
            Jeton::Constante(c) => Some(c.valeur()),
            Jeton::Variable(nom) => variables.get(nom).copied(),
            Jeton::Unaire(op) => {
                let x = valeurs.pop().flatten();
                x.map(|x| op.appliquer(x))
            }
            Jeton::Binaire(op) => {
                let premier = valeurs.pop().flatten();
                let second = valeurs.pop().flatten();
                match (premier, second) {
                    (Some(a), Some(b)) => Some(op.appliquer(a, b)),
                    _ => None,
                }
            }
        };
        valeurs.push(v);
    }

    valeurs.pop().flatten()
}

/* ------------------------ Rendu infixe ------------------------ */

#[derive(Clone, Debug)]
struct Fragment {
    texte: String,
    precedence: i32,
}

impl Fragment {
    fn manquant() -> Self {
        Self {
            texte: FRAGMENT_MANQUANT.to_string(),
            precedence: PRECEDENCE_MANQUANT,
        }
    }

    /// Parenthèses si le contexte lie plus fort que le fragment.
    fn sous(self, precedence_contexte: i32) -> String {
        if precedence_contexte > self.precedence {
            format!("({})", self.texte)
        } else {
            self.texte
        }
    }
}

/// Fragments des expressions de plus haut niveau, du bas de la pile vers le sommet.
fn rendre(pile: &[Jeton]) -> Vec<Fragment> {
    let mut fragments: Vec<Fragment> = Vec::with_capacity(pile.len());

    for jeton in pile {
        let f = match jeton {
            Jeton::Operande(_) | Jeton::Constante(_) | Jeton::Variable(_) => Fragment {
                texte: jeton.symbole(),
                precedence: jeton.precedence(),
            },

            // notation d’appel : argument toujours entre parenthèses
            Jeton::Unaire(op) => {
                let arg = fragments.pop().unwrap_or_else(Fragment::manquant);
                Fragment {
                    texte: format!("{}({})", op.symbole(), arg.texte),
                    precedence: PRECEDENCE_ATOMIQUE,
                }
            }

            Jeton::Binaire(op) => {
                let p = op.precedence();
                let droite = fragments.pop().unwrap_or_else(Fragment::manquant);
                let gauche = fragments.pop().unwrap_or_else(Fragment::manquant);
                Fragment {
                    texte: format!("{}{}{}", gauche.sous(p), op.symbole(), droite.sous(p)),
                    precedence: p,
                }
            }
        };
        fragments.push(f);
    }

    fragments
}

/// Accès en lecture pour les tests.
#[cfg(test)]
impl MoteurRpn {
    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}
