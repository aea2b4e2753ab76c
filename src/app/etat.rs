//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, arrondi, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Arrondi borné (ARRONDI_MAX).

use crate::noyau::format::{format_valeur, ARRONDI_MAX};
use crate::noyau::Options;

/// Arrondi proposé quand on active l’option (une décimale).
const DIGITS_DEFAUT: u32 = 1;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,      // valeur rendue (même format que sur le fil)
    pub erreur: String,        // message d’erreur (si l’évaluation échoue)
    pub resultat_dispo: bool,  // false si erreur / vide

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub arrondi_actif: bool,
    pub digits: u32,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false,
            demarche: Demarche::default(),
            arrondi_actif: false, // pleine précision par défaut
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + arrondi par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.arrondi_actif = false;
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur : le dernier résultat n’est plus affiché, la démarche est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_valeur(valeur);
        self.resultat_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Valeur à afficher : seulement celle de la dernière évaluation réussie.
    pub fn resultat_affiche(&self) -> Option<&str> {
        self.resultat_dispo.then_some(self.resultat.as_str())
    }

    /// Garde-fou : borne l’arrondi.
    pub fn set_digits(&mut self, digits: u32) {
        self.digits = digits.min(ARRONDI_MAX);
        self.focus_entree = true;
    }

    pub fn options(&self) -> Options {
        Options {
            rounding_digits: self.arrondi_actif.then_some(self.digits),
        }
    }
}
