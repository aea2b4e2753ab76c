//! Calculatrice infixe — noyau pur + frontières (UI, réseau, config, journal)
//!
//! - noyau   : normalise -> jetons -> réduction deux piles (natif + wasm)
//! - app     : UI egui (natif + wasm)
//! - reseau  : serveur / client TCP (natif)
//! - config  : défauts + JSON + environnement (natif)
//! - journal : env_logger (natif)

pub mod app;
pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod journal;
#[cfg(not(target_arch = "wasm32"))]
pub mod reseau;

// API publique minimale
pub use noyau::{evaluate, EvaluationError, Options};
