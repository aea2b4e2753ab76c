//! Noyau d’évaluation infixe
//!
//! Organisation interne :
//! - normalise.rs : réécriture du texte brut (crochets, signes, ** et //, )( )
//! - jetons.rs    : tokenisation + multiplication implicite + moins unaire + validation
//! - reduction.rs : réduction à deux piles (précédence, associativité à gauche)
//! - format.rs    : arrondi optionnel, rendu fil, sentinelle NaN
//! - erreur.rs    : taxonomie des échecs (toujours locaux à un appel)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{eval_expression, evaluate, DemarcheNoyau, Options};
