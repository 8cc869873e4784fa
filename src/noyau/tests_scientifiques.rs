//! Tests scientifiques : propriétés observables du moteur RPN.
//!
//! - ordre des opérandes (convention postfixe)
//! - parenthésage selon la précédence
//! - liaison tardive des variables
//! - clear() complet
//! - aller-retour programme (deux moteurs indépendants)

use pretty_assertions::assert_eq;

use super::graphe::{Traceur, VARIABLE_GRAPHE};
use super::pile::MoteurRpn;
use super::programme::Programme;

/// Empile une suite de "touches" : nombre, M, ou symbole d’opération.
fn taper(m: &mut MoteurRpn, touches: &[&str]) -> Option<f64> {
    let mut dernier = None;
    for t in touches {
        dernier = if let Ok(v) = t.parse::<f64>() {
            m.push_operand(v)
        } else if *t == VARIABLE_GRAPHE {
            m.push_variable(t)
        } else {
            m.perform_operation(t)
        };
    }
    dernier
}

fn assert_proche(a: Option<f64>, b: f64) {
    let a = a.unwrap_or_else(|| panic!("attendu {b}, obtenu None"));
    assert!((a - b).abs() < 1e-12, "attendu {b}, obtenu {a}");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn sci_pile_vide_indefinie() {
    let m = MoteurRpn::new();
    assert_eq!(m.evaluate(), None);
}

#[test]
fn sci_ordre_des_operandes() {
    let mut m = MoteurRpn::new();
    assert_eq!(taper(&mut m, &["5", "3", "−"]), Some(2.0));

    let mut m = MoteurRpn::new();
    assert_eq!(taper(&mut m, &["6", "2", "÷"]), Some(3.0));
}

#[test]
fn sci_unaire() {
    let mut m = MoteurRpn::new();
    assert_eq!(taper(&mut m, &["9", "√"]), Some(3.0));

    let mut m = MoteurRpn::new();
    assert_proche(taper(&mut m, &["π", "cos"]), -1.0);

    let mut m = MoteurRpn::new();
    assert_proche(taper(&mut m, &["π", "2", "÷", "sin"]), 1.0);
}

#[test]
fn sci_division_par_zero_reste_numerique() {
    // pas d’erreur : IEEE 754
    let mut m = MoteurRpn::new();
    assert_eq!(taper(&mut m, &["1", "0", "÷"]), Some(f64::INFINITY));
}

#[test]
fn sci_operation_inconnue_sans_effet() {
    let mut m = MoteurRpn::new();
    taper(&mut m, &["2", "3"]);
    let avant = m.len();
    assert_eq!(m.perform_operation("^"), None);
    assert_eq!(m.perform_operation("-"), None);
    assert_eq!(m.perform_operation(""), None);
    assert_eq!(m.len(), avant);
    assert_eq!(m.evaluate(), Some(3.0));
}

/* ------------------------ Rendu ------------------------ */

#[test]
fn sci_parentheses_selon_precedence() {
    let mut m = MoteurRpn::new();
    taper(&mut m, &["2", "3", "+", "4", "×"]);
    assert_eq!(m.describe(), "(2+3)×4");

    let mut m = MoteurRpn::new();
    taper(&mut m, &["2", "3", "×", "4", "+"]);
    assert_eq!(m.describe(), "2×3+4");
}

#[test]
fn sci_fonction_courante_suit_le_sommet() {
    let mut m = MoteurRpn::new();
    taper(&mut m, &["1", "2", "+", "M", "cos"]);
    assert_eq!(m.describe(), "1+2, cos(M)");
    assert_eq!(m.current_function(), Some("cos(M)"));

    taper(&mut m, &["×"]);
    assert_eq!(m.describe(), "(1+2)×cos(M)");
    assert_eq!(m.current_function(), Some("(1+2)×cos(M)"));
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_liaison_tardive() {
    let mut m = MoteurRpn::new();
    assert_eq!(m.push_variable("M"), None);
    m.set_variable("M", 5.0);
    assert_eq!(m.evaluate(), Some(5.0));
    m.set_variable("M", -1.0);
    assert_eq!(m.evaluate(), Some(-1.0));
}

#[test]
fn sci_clear_vide_tout() {
    let mut m = MoteurRpn::new();
    m.set_variable("M", 2.0);
    taper(&mut m, &["M", "3", "+"]);
    assert_eq!(m.evaluate(), Some(5.0));

    m.clear();
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.variable("M"), None);

    // M empilé de nouveau : non lié
    assert_eq!(m.push_variable("M"), None);
}

/* ------------------------ Programme (deux moteurs) ------------------------ */

#[test]
fn sci_aller_retour_meme_evaluation() {
    let mut source = MoteurRpn::new();
    taper(&mut source, &["M", "sin", "0.5", "×", "π", "+", "M", "√", "÷"]);

    let mut copie = MoteurRpn::new();
    copie.deserialize(&source.serialize());
    assert_eq!(copie.jetons(), source.jetons());

    for x in [0.1, 1.0, 2.5, 7.0, -3.0] {
        source.set_variable("M", x);
        copie.set_variable("M", x);
        let (a, b) = (source.evaluate(), copie.evaluate());
        match (a, b) {
            (Some(a), Some(b)) if a.is_nan() => assert!(b.is_nan()),
            _ => assert_eq!(a, b, "x={x}"),
        }
    }
    assert_eq!(copie.describe(), source.describe());
}

#[test]
fn sci_aller_retour_par_json() {
    let mut source = MoteurRpn::new();
    taper(&mut source, &["3.75", "M", "−", "cos"]);

    let json = source.serialize().to_json().unwrap();
    let programme = Programme::from_json(&json).unwrap();

    let mut t = Traceur::new(&programme, "cos(3.75−M)");
    source.set_variable("M", 1.25);
    assert_eq!(t.y_pour_x(1.25), source.evaluate());
}

#[test]
fn sci_deserialisation_ignore_les_liaisons() {
    let mut source = MoteurRpn::new();
    source.set_variable("M", 10.0);
    taper(&mut source, &["M", "1", "+"]);
    assert_eq!(source.evaluate(), Some(11.0));

    // le programme ne transporte pas les variables
    let mut copie = MoteurRpn::new();
    copie.deserialize(&source.serialize());
    assert_eq!(copie.evaluate(), None);
    assert_eq!(copie.variable("M"), None);
}
