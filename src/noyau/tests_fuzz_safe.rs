//! Tests fuzz safe : robustesse + déterminisme + appels concurrents.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées (parenthèses équilibrées, au moins un opérateur)
//!   => toujours une valeur, ou une division par zéro, jamais de panique
//! - mêmes entrées évaluées depuis plusieurs threads => mêmes sorties

use std::thread;
use std::time::{Duration, Instant};

use super::{evaluate, EvaluationError, Options};

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => format!(".{}", 1 + rng.pick(9)),
        _ => format!("{}", 10 + rng.pick(990)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(7) {
        0 => " + ",
        1 => "-",
        2 => "*",
        3 => " / ",
        4 => "^",
        5 => "**",
        _ => "//",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(4) {
        0 => gen_atom(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => format!("[{}]", gen_expr(rng, depth - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Au moins un opérateur au sommet.
fn gen_bien_forme(rng: &mut Rng, depth: usize) -> String {
    format!(
        "{}{}{}",
        gen_expr(rng, depth),
        gen_op(rng),
        gen_expr(rng, depth)
    )
}

fn bits(r: Result<f64, EvaluationError>) -> Result<u64, EvaluationError> {
    r.map(f64::to_bits)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_termine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_bien_forme(&mut rng, 4);
        match evaluate(&expr, &Options::default()) {
            Ok(_) => seen_ok += 1,
            Err(EvaluationError::DivideByZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let ea = gen_bien_forme(&mut a, 3);
        let eb = gen_bien_forme(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(
            bits(evaluate(&ea, &Options::default())),
            bits(evaluate(&eb, &Options::default()))
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    // caractères arbitraires : seule exigence, une erreur typée ou une valeur
    const ALPHABET: &[char] = &[
        '1', '2', '.', '+', '-', '*', '/', '^', '(', ')', '[', ']', ' ', 'x',
    ];

    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        budget(t0, max);
        let len = 1 + rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();
        let _ = evaluate(&s, &Options::default());
    }
}

#[test]
fn fuzz_safe_appels_concurrents_identiques() {
    let mut rng = Rng::new(0x5EED);
    let exprs: Vec<String> = (0..60).map(|_| gen_bien_forme(&mut rng, 4)).collect();

    let reference: Vec<_> = exprs
        .iter()
        .map(|e| bits(evaluate(e, &Options::default())))
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|k| {
                let exprs = &exprs;
                s.spawn(move || {
                    let mut out = Vec::new();
                    for tour in 0..50 {
                        // ordre décalé par thread : entrelacement maximal
                        for i in 0..exprs.len() {
                            let j = (i + k * 7 + tour) % exprs.len();
                            out.push((j, bits(evaluate(&exprs[j], &Options::default()))));
                        }
                    }
                    out
                })
            })
            .collect();

        for h in handles {
            for (j, r) in h.join().expect("thread évaluateur") {
                assert_eq!(r, reference[j], "expr={:?}", exprs[j]);
            }
        }
    });
}
