//! Frontière réseau (natif seulement)
//!
//! - protocole.rs : trame u16 big-endian + UTF-8, constantes STOP / PORT
//! - serveur.rs   : écoute TCP, une session par client, réponse ou sentinelle
//! - client.rs    : connexion persistante côté terminal

pub mod client;
pub mod protocole;
pub mod serveur;

pub use client::Client;
pub use serveur::Serveur;
