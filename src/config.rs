// src/config.rs
//
// Configuration du service (serveur + client terminal).
// Ordre d’application : défauts -> fichier JSON (optionnel) -> variables d’environnement.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::noyau::format::ARRONDI_MAX;
use crate::noyau::Options;
use crate::reseau::protocole::PORT_DEFAUT;

pub const ENV_ADRESSE: &str = "CALC_ADRESSE";
pub const ENV_PORT: &str = "CALC_PORT";
pub const ENV_ARRONDI: &str = "CALC_ARRONDI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hôte d’écoute (serveur) ou de connexion (client).
    pub adresse: String,
    pub port: u16,
    /// Décimales du résultat renvoyé ; absent = pleine précision.
    pub arrondi: Option<u32>,
    /// off / error / warn / info / debug / trace
    pub niveau_journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adresse: "127.0.0.1".to_string(),
            port: PORT_DEFAUT,
            arrondi: None,
            niveau_journal: "info".to_string(),
        }
    }
}

impl Config {
    /// Charge la configuration : fichier (si fourni) puis surcharges d’environnement.
    pub fn charger(chemin: Option<&Path>) -> Result<Self> {
        let mut config = match chemin {
            Some(p) => Self::depuis_fichier(p)?,
            None => Self::default(),
        };
        config.appliquer_env(|cle| std::env::var(cle).ok())?;
        Ok(config)
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self> {
        let contenu = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture de la configuration {}", chemin.display()))?;
        let config: Config = serde_json::from_str(&contenu)
            .with_context(|| format!("configuration invalide {}", chemin.display()))?;
        config.valider()?;
        Ok(config)
    }

    /// Surcharges d’environnement ; `lire` est injecté pour les tests.
    pub fn appliquer_env<F>(&mut self, lire: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(a) = lire(ENV_ADRESSE) {
            self.adresse = a;
        }
        if let Some(p) = lire(ENV_PORT) {
            self.port = p
                .trim()
                .parse()
                .with_context(|| format!("{ENV_PORT} invalide: {p:?}"))?;
        }
        if let Some(d) = lire(ENV_ARRONDI) {
            let d = d.trim();
            self.arrondi = if d.is_empty() {
                None
            } else {
                Some(
                    d.parse()
                        .with_context(|| format!("{ENV_ARRONDI} invalide: {d:?}"))?,
                )
            };
        }
        self.valider()
    }

    fn valider(&self) -> Result<()> {
        if self.adresse.trim().is_empty() {
            anyhow::bail!("adresse vide");
        }
        if let Some(d) = self.arrondi {
            if d > ARRONDI_MAX {
                anyhow::bail!("arrondi trop grand: {d} (max {ARRONDI_MAX})");
            }
        }
        Ok(())
    }

    /// "hôte:port"
    pub fn adresse_complete(&self) -> String {
        format!("{}:{}", self.adresse, self.port)
    }

    pub fn options(&self) -> Options {
        Options {
            rounding_digits: self.arrondi,
        }
    }
}
