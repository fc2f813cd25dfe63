//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression bien formée ne donne JAMAIS d’erreur
//!   (au pire inf / NaN), une chaîne quelconque ne fait jamais paniquer.

use std::time::{Duration, Instant};

use super::jetons::tokenize;
use super::rpn::to_rpn;
use super::{evaluate, ErreurEval};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    match rng.pick(3) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", rng.pick(1000)),
        _ => format!(".{}", rng.pick(10)),
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    let n = gen_nombre(rng);
    if rng.pick(5) == 0 {
        format!("-{n}")
    } else {
        n
    }
}

const FONCTIONS: [&str; 5] = ["sin", "cos", "tan", "log", "sqrt"];
const BINAIRES: [&str; 6] = ["+", "-", "*", "/", "%", "^"];

/// Expression bien formée (grammaire fermée).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(5) {
        0 => gen_atome(rng),
        1 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        2 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => {
            let op = BINAIRES[rng.pick(BINAIRES.len() as u32) as usize];
            let sep = if rng.coin() { " " } else { "" };
            format!(
                "({}){sep}{op}{sep}({})",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Chaîne quelconque tirée d’un alphabet proche de la calculatrice.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '7', '9', '.', '+', '-', '*', '/', '%', '^', '(', ')', ' ', 's', 'i',
        'n', 'q', 'r', 't', '#', 'π',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees_sans_erreur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        if let Err(e) = evaluate(&expr) {
            panic!("erreur non attendue: expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = a.clone();

    for _ in 0..200 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let va = evaluate(&ea).map(f64::to_bits);
        let vb = evaluate(&eb).map(f64::to_bits);
        assert_eq!(va, vb, "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s = gen_bruit(&mut rng, len);

        match evaluate(&s) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // une fois lexer + parser passés, seule la pile peut encore refuser
                let structure_ok = tokenize(&s).and_then(|t| to_rpn(&t)).is_ok();
                if structure_ok {
                    assert!(
                        matches!(
                            e,
                            ErreurEval::InvalidExpression | ErreurEval::InvalidNumber(_)
                        ),
                        "erreur non attendue après parse: s={s:?} err={e}"
                    );
                }
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: bruit trop “sale”");
    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}
