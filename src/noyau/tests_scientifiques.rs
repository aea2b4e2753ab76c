//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - priorités et associativité documentées (^ à gauche)
//! - multiplication implicite, moins unaire
//! - chaque entrée malformée donne une erreur typée, jamais un arrêt
//! - politique d’arrondi

use super::{evaluate, EvaluationError, Options};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr, &Options::default()).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-12,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendu: EvaluationError) {
    assert_eq!(evaluate(expr, &Options::default()), Err(attendu), "expr={expr:?}");
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites_de_base() {
    assert_val("3 + 4 * 2", 11.0);
    assert_val("(1+2)*3", 9.0);
    assert_val("10 - 4 - 3", 3.0);
    assert_val("64 / 4 / 2", 8.0);
    assert_val("2 + 3 ^ 2 * 2", 20.0);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    // écart assumé : (2^3)^2 et non 2^(3^2)
    assert_val("2^3^2", 64.0);
    assert_val("2**3**2", 64.0);
    assert_val("2^(3^2)", 512.0);
}

/* ------------------------ Signes ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_val("-3+4", 1.0);
    assert_val("4*-2", -8.0);
    assert_val("4/(-2)", -2.0);
    assert_val("-(2+3)*2", -10.0);
    assert_val("5+-2", 3.0);
    assert_val("5-+2", 3.0);
    assert_val("5--2", 7.0);
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    assert_val("(2)(3)", 6.0);
    assert_val("2(3+1)", 8.0);
    assert_val("(3+1)2", 8.0);
    assert_val("[2][3][4]", 24.0);
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn sci_decimaux() {
    assert_val("0.1 + 0.2", 0.1 + 0.2);
    assert_val(".5 * 4", 2.0);
    assert_val("1.25 * 2", 2.5);
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn sci_erreurs_typees() {
    assert_err("5/0", EvaluationError::DivideByZero);
    assert_err("5/(2-2)", EvaluationError::DivideByZero);
    assert_err("(1+2", EvaluationError::UnbalancedParen);
    assert_err("42", EvaluationError::NoOperator);
    assert_err("", EvaluationError::NoOperator);
    assert_err("1+x", EvaluationError::NumberFormat("x".into()));
}

#[test]
fn sci_operateur_final() {
    match evaluate("1+2+", &Options::default()) {
        Err(EvaluationError::Arity) | Err(EvaluationError::IncompleteExpression) => {}
        autre => panic!("attendu Arity/IncompleteExpression, obtenu {autre:?}"),
    }
}

#[test]
fn sci_parenthese_fermante_en_tete() {
    // équilibrée en nombre, mais fermante avant ouvrante
    assert_err("1)+(2", EvaluationError::MismatchedParen);
}

/* ------------------------ Arrondi ------------------------ */

#[test]
fn sci_arrondi() {
    assert_eq!(evaluate("10/3", &Options::arrondi(1)), Ok(3.3));
    assert_eq!(evaluate("10/3", &Options::default()), Ok(10.0 / 3.0));
    assert_eq!(evaluate("2/3", &Options::arrondi(0)), Ok(1.0));
}
