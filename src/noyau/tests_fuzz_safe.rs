//! Tests fuzz safe : programmes postfixes aléatoires, bornés, déterministes.
//!
//! - RNG déterministe (seed fixe)
//! - taille bornée + budget temps global
//! - invariants :
//!   * evaluate / describe ne paniquent jamais (même sur une pile mal formée)
//!   * aller-retour serialize -> deserialize : même évaluation, même rendu
//!   * evaluate ne modifie pas la pile

use std::time::{Duration, Instant};

use super::pile::MoteurRpn;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de programmes ------------------------ */

const OPERATIONS: [&str; 8] = ["×", "÷", "+", "−", "√", "sin", "cos", "π"];

/// Noms de variables, dont certains ressemblent à des nombres sans en être.
const VARIABLES: [&str; 8] = ["M", "M", "M", "X", "Inf", "nan", "1e5", "+5"];

fn gen_operande(rng: &mut Rng) -> f64 {
    match rng.pick(6) {
        0 => 0.0,
        1 => 0.5,
        2 => -2.0,
        3 => 1e-3,
        4 => 12345.678,
        _ => rng.pick(100) as f64,
    }
}

/// Empile `n` touches au hasard : la pile peut être bien ou mal formée.
fn gen_touches(rng: &mut Rng, m: &mut MoteurRpn, n: usize) {
    for _ in 0..n {
        match rng.pick(4) {
            0 | 1 => {
                m.push_operand(gen_operande(rng));
            }
            2 => {
                m.push_variable(VARIABLES[rng.pick(VARIABLES.len() as u32) as usize]);
            }
            _ => {
                let op = OPERATIONS[rng.pick(OPERATIONS.len() as u32) as usize];
                m.perform_operation(op);
            }
        }
    }
}

/// Programme bien formé : chaque opérateur binaire a ses deux opérandes.
fn gen_bien_forme(rng: &mut Rng, m: &mut MoteurRpn, n: usize) {
    let mut profondeur = 0usize;
    for _ in 0..n {
        if profondeur >= 2 && rng.pick(2) == 0 {
            let op = OPERATIONS[rng.pick(4) as usize];
            m.perform_operation(op);
            profondeur -= 1;
        } else if profondeur >= 1 && rng.pick(4) == 0 {
            let op = OPERATIONS[4 + rng.pick(3) as usize];
            m.perform_operation(op);
        } else {
            m.push_operand(gen_operande(rng));
            profondeur += 1;
        }
    }
    while profondeur >= 2 {
        m.perform_operation("+");
        profondeur -= 1;
    }
}

fn meme_resultat(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_aller_retour_programme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut source = MoteurRpn::new();
        let n = 1 + rng.pick(20) as usize;
        gen_touches(&mut rng, &mut source, n);

        let mut copie = MoteurRpn::new();
        copie.deserialize(&source.serialize());

        for x in [0.0, 1.5, -4.0] {
            source.set_variable("M", x);
            copie.set_variable("M", x);
            assert!(
                meme_resultat(source.evaluate(), copie.evaluate()),
                "programme={:?} x={x}",
                source.serialize()
            );
        }
        assert_eq!(copie.serialize(), source.serialize());
        assert_eq!(copie.describe(), source.describe());
    }
}

#[test]
fn fuzz_safe_bien_forme_une_seule_expression() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut m = MoteurRpn::new();
        let n = 2 + rng.pick(30) as usize;
        gen_bien_forme(&mut rng, &mut m, n);

        let texte = m.describe();
        assert!(!texte.contains('?'), "pile bien formée rendue incomplète: {texte}");
        assert!(!texte.contains(", "), "plusieurs expressions: {texte}");
        assert_eq!(m.current_function(), Some(texte.as_str()));
        assert!(m.evaluate().is_some());
    }
}

#[test]
fn fuzz_safe_evaluation_sans_effet_de_bord() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let mut m = MoteurRpn::new();
        gen_touches(&mut rng, &mut m, 15);
        let avant = m.serialize();
        let r1 = m.evaluate();
        let _ = m.describe();
        let r2 = m.evaluate();
        assert!(meme_resultat(r1, r2));
        assert_eq!(m.serialize(), avant);
    }
}
