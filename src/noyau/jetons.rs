// src/noyau/jetons.rs
//
// Vocabulaire de la pile RPN : opérandes, opérateurs, constantes, variables.
// Ensemble fermé : chaque opérateur porte une opération choisie dans une
// énumération fixe (pas de pointeur de fonction, pas de dyn).

use std::f64::consts::PI;

/// Précédence des éléments jamais parenthésés (opérandes, appels unaires, constantes, variables).
/// Toujours strictement supérieure à celle de n’importe quel opérateur binaire.
pub const PRECEDENCE_ATOMIQUE: i32 = 10;

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpUnaire {
    Racine,
    Sin,
    Cos,
}

impl OpUnaire {
    pub const TOUS: [OpUnaire; 3] = [OpUnaire::Racine, OpUnaire::Sin, OpUnaire::Cos];

    pub fn symbole(self) -> &'static str {
        match self {
            OpUnaire::Racine => "√",
            OpUnaire::Sin => "sin",
            OpUnaire::Cos => "cos",
        }
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            OpUnaire::Racine => x.sqrt(),
            OpUnaire::Sin => x.sin(),
            OpUnaire::Cos => x.cos(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpBinaire {
    Mul,
    Div,
    Add,
    Sub,
}

impl OpBinaire {
    pub const TOUS: [OpBinaire; 4] = [OpBinaire::Mul, OpBinaire::Div, OpBinaire::Add, OpBinaire::Sub];

    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Mul => "×",
            OpBinaire::Div => "÷",
            OpBinaire::Add => "+",
            OpBinaire::Sub => "−",
        }
    }

    /// Multiplicatif (2) > additif (1).
    pub fn precedence(self) -> i32 {
        match self {
            OpBinaire::Mul | OpBinaire::Div => 2,
            OpBinaire::Add | OpBinaire::Sub => 1,
        }
    }

    /// `premier` = opérande empilé juste avant l’opérateur (sommet),
    /// `second` = celui d’en dessous.
    ///
    /// Convention postfixe : `6 2 ÷` = 6/2, `5 3 −` = 5−3.
    pub fn appliquer(self, premier: f64, second: f64) -> f64 {
        match self {
            OpBinaire::Mul => premier * second,
            OpBinaire::Div => second / premier,
            OpBinaire::Add => premier + second,
            OpBinaire::Sub => second - premier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
}

impl Constante {
    pub const TOUTES: [Constante; 1] = [Constante::Pi];

    pub fn symbole(self) -> &'static str {
        match self {
            Constante::Pi => "π",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => PI,
        }
    }
}

/* ------------------------ Jeton ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Operande(f64),
    Unaire(OpUnaire),
    Binaire(OpBinaire),
    Constante(Constante),
    Variable(String),
}

impl Jeton {
    /// Nom textuel : sert à l’affichage ET de clé dans la table des opérations connues.
    pub fn symbole(&self) -> String {
        match self {
            Jeton::Operande(v) => format_operande(*v),
            Jeton::Unaire(op) => op.symbole().to_string(),
            Jeton::Binaire(op) => op.symbole().to_string(),
            Jeton::Constante(c) => c.symbole().to_string(),
            Jeton::Variable(nom) => nom.clone(),
        }
    }

    pub fn precedence(&self) -> i32 {
        match self {
            Jeton::Binaire(op) => op.precedence(),
            _ => PRECEDENCE_ATOMIQUE,
        }
    }
}

/// Écriture la plus courte qui se relit à l’identique (2 -> "2", 0.5 -> "0.5").
pub fn format_operande(v: f64) -> String {
    format!("{v}")
}

/// Format utilitaire (journal) : pile de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let symboles: Vec<String> = jetons.iter().map(Jeton::symbole).collect();
    format!("[{}]", symboles.join(" "))
}
