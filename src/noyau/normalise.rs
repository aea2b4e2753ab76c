// src/noyau/normalise.rs
//
// Normalisation du texte brut (réécriture pure, jamais d’erreur) :
// - espaces retirés
// - crochets [ ] -> ( )
// - signes : "+-" -> "-", "-+" -> "-", "--" -> "+"
// - "**" -> "^", "//" -> "/"
// - ")(" -> ")*(" (multiplication implicite, cas le plus courant)
// - "-(..." -> "0-(..." (soustraction binaire plutôt qu’un moins nu)
//
// L’ordre des remplacements compte : chaque règle s’applique une fois,
// sur toute la chaîne, de gauche à droite.

const REECRITURES: [(&str, &str); 8] = [
    ("[", "("),
    ("]", ")"),
    ("+-", "-"),
    ("-+", "-"),
    ("--", "+"),
    ("**", "^"),
    ("//", "/"),
    (")(", ")*("),
];

/// Forme canonique de l’entrée, prête pour `tokenize`.
pub fn normalise(brut: &str) -> String {
    let mut s: String = brut.chars().filter(|c| !c.is_whitespace()).collect();

    for (motif, remplacement) in REECRITURES {
        if s.contains(motif) {
            s = s.replace(motif, remplacement);
        }
    }

    if s.starts_with("-(") {
        s.insert(0, '0');
    }

    s
}
