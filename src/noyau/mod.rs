//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs    : vocabulaire (opérandes, opérateurs, constantes, variables) + précédences
//! - pile.rs      : moteur (empilement, évaluation, rendu infixe, programme)
//! - programme.rs : programme sérialisé (liste de symboles) + lecture des nombres
//! - graphe.rs    : second moteur alimenté par un programme, M = abscisse

pub mod graphe;
pub mod jetons;
pub mod pile;
pub mod programme;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use graphe::{Traceur, VARIABLE_GRAPHE};
pub use pile::MoteurRpn;
pub use programme::lire_nombre;
