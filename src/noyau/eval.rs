//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> tokenize (+ validation) -> réduction deux piles -> arrondi optionnel
//!
//! Chaque appel possède ses jetons et son cadre de piles : l’API est sûre
//! en appels concurrents, sans verrou.

use super::erreur::EvaluationError;
use super::format::arrondir;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalise;
use super::reduction::reduire;

/// Options d’évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// None = pleine précision ; Some(d) = résultat final arrondi à d décimales.
    pub rounding_digits: Option<u32>,
}

impl Options {
    pub fn arrondi(digits: u32) -> Self {
        Self {
            rounding_digits: Some(digits),
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub note: String,
}

/// API publique : une chaîne en entrée, une valeur ou une erreur typée en sortie.
pub fn evaluate(expression: &str, options: &Options) -> Result<f64, EvaluationError> {
    eval_expression(expression, options).map(|(v, _d)| v)
}

/// Comme `evaluate`, avec la démarche (forme normalisée + jetons) pour l’UI.
pub fn eval_expression(
    expression: &str,
    options: &Options,
) -> Result<(f64, DemarcheNoyau), EvaluationError> {
    // 1) Normalisation
    let normalisee = normalise(expression);

    // 2) Jetons (validés)
    let jetons = tokenize(&normalisee)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) Réduction
    let brut = reduire(&jetons)?;

    // 4) Arrondi (affichage) sur le résultat final seulement
    let valeur = match options.rounding_digits {
        Some(d) => arrondir(brut, d),
        None => brut,
    };

    log::debug!("{expression:?} -> {normalisee:?} -> {valeur}");

    let d = DemarcheNoyau {
        normalisee,
        jetons: jetons_txt,
        note: match options.rounding_digits {
            Some(digits) => format!("Pipeline: normalise → jetons → piles → arrondi ({digits} déc.)."),
            None => "Pipeline: normalise → jetons → piles (pleine précision).".into(),
        },
    };

    Ok((valeur, d))
}
