// src/noyau/erreur.rs
//
// Taxonomie des échecs d’évaluation.
// Tous locaux à un appel : le noyau classe, la frontière (serveur/UI) décide du rendu.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    // --- validation structurelle (jetons) ---
    #[error("aucun opérateur arithmétique détecté")]
    NoOperator,

    #[error("nombre d’opérateurs >= nombre d’opérandes")]
    Arity,

    #[error("parenthèses déséquilibrées")]
    UnbalancedParen,

    // --- réduction (piles) ---
    #[error("parenthèse fermante sans ouvrante correspondante")]
    MismatchedParen,

    #[error("expression incomplète")]
    IncompleteExpression,

    // --- arithmétique ---
    #[error("division par zéro")]
    DivideByZero,

    #[error("nombre invalide: '{0}'")]
    NumberFormat(String),
}
