// src/noyau/format.rs
//
// Politique d’affichage (frontière réponse) :
// - arrondi optionnel du résultat FINAL (jamais des intermédiaires)
// - rendu texte d’un résultat pour le fil
// - sentinelle "NaN" en cas d’échec (pas d’erreur sur le fil)

use super::erreur::EvaluationError;

/// Texte renvoyé sur le fil quand l’évaluation échoue.
pub const SENTINELLE: &str = "NaN";

/// Au-delà, 10^digits n’apporte plus rien sur un f64.
pub const ARRONDI_MAX: u32 = 15;

/// Arrondi “demi loin de zéro” à `digits` décimales.
pub fn arrondir(v: f64, digits: u32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let facteur = 10f64.powi(digits.min(ARRONDI_MAX) as i32);
    let scaled = v * facteur;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / facteur
}

/// Rendu d’une valeur : écriture décimale (jamais d’exposant), plus courte
/// qui relit la même valeur, toujours au moins une décimale ("11.0").
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        SENTINELLE.to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        let mut s = format!("{v}");
        if !s.contains('.') {
            s.push_str(".0");
        }
        s
    }
}

/// Rendu d’une réponse complète (succès ou échec) pour le fil.
pub fn format_reponse(r: &Result<f64, EvaluationError>) -> String {
    match r {
        Ok(v) => format_valeur(*v),
        Err(_) => SENTINELLE.to_string(),
    }
}

/// Message lisible pour l’affichage (client / UI) : remplace la sentinelle.
pub fn message_affichage(reponse: &str) -> String {
    if reponse.trim() == SENTINELLE {
        "évaluation impossible (expression invalide ou division par zéro)".to_string()
    } else {
        reponse.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrondi_une_decimale() {
        assert_eq!(arrondir(10.0 / 3.0, 1), 3.3);
        assert_eq!(arrondir(2.25, 1), 2.3);
        assert_eq!(arrondir(-2.25, 1), -2.3);
        assert_eq!(arrondir(7.0, 0), 7.0);
    }

    #[test]
    fn arrondi_borne() {
        let v = 1.0 / 3.0;
        assert_eq!(arrondir(v, 200), arrondir(v, ARRONDI_MAX));
        assert_eq!(arrondir(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(arrondir(1e300, 15), 1e300);
    }

    #[test]
    fn rendu_valeurs() {
        assert_eq!(format_valeur(11.0), "11.0");
        assert_eq!(format_valeur(3.3), "3.3");
        assert_eq!(format_valeur(10.0 / 3.0), "3.3333333333333335");
        assert_eq!(format_valeur(-0.5), "-0.5");
        assert_eq!(format_valeur(-4.0), "-4.0");
        assert_eq!(format_valeur(1e20), "100000000000000000000.0");
        assert_eq!(format_valeur(1e-7), "0.0000001");
        assert_eq!(format_valeur(f64::INFINITY), "Infinity");
        assert_eq!(format_valeur(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_valeur(f64::NAN), "NaN");
    }

    #[test]
    fn rendu_echec_sentinelle() {
        assert_eq!(format_reponse(&Err(EvaluationError::DivideByZero)), "NaN");
        assert_eq!(format_reponse(&Ok(9.0)), "9.0");
    }

    #[test]
    fn message_lisible() {
        assert!(message_affichage("NaN").contains("impossible"));
        assert_eq!(message_affichage("64.0"), "64.0");
    }
}
