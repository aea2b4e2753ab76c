// src/noyau/jetons.rs
//
// Tokenisation d’une chaîne DÉJÀ normalisée (voir normalise.rs).
// Une seule passe gauche -> droite :
// - multiplication implicite insérée à la volée : 2(3) , (2)3
// - moins unaire replié dans le littéral : -3+4 , 2*-3 , (-3)
// - validation globale en fin de scan (opérateurs / opérandes / parenthèses)

use super::erreur::EvaluationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,
}

/// Compteurs de validation (implicites inclus, signes repliés exclus).
#[derive(Default, Debug)]
struct Comptes {
    operateurs: usize,
    operandes: usize,
    ouvrantes: usize,
    fermantes: usize,
}

fn est_separateur(c: char) -> bool {
    Op::from_char(c).is_some() || c == '(' || c == ')'
}

/// Littéral accepté : `chiffres[.chiffres]` ou `.chiffres`.
fn litteral_valide(s: &str) -> bool {
    let (entier, frac) = match s.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (s, None),
    };
    let chiffres = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    match frac {
        None => !entier.is_empty() && chiffres(entier),
        Some(f) => !f.is_empty() && chiffres(f) && chiffres(entier),
    }
}

fn parse_litteral(s: &str) -> Result<f64, EvaluationError> {
    if !litteral_valide(s) {
        return Err(EvaluationError::NumberFormat(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| EvaluationError::NumberFormat(s.to_string()))
}

/// Tokenize une chaîne canonique en jetons validés.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::new();
    let mut n = Comptes::default();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Opérateurs
        if let Some(op) = Op::from_char(c) {
            n.operateurs += 1;
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            n.ouvrantes += 1;
            if matches!(out.last(), Some(Tok::Num(_)) | Some(Tok::RPar)) {
                n.operateurs += 1;
                out.push(Tok::Op(Op::Star));
            }
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            n.fermantes += 1;
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Littéral : tout jusqu’au prochain opérateur / parenthèse
        let start = i;
        while i < chars.len() && !est_separateur(chars[i]) {
            i += 1;
        }
        let litteral: String = chars[start..i].iter().collect();
        let v = parse_litteral(&litteral)?;
        n.operandes += 1;

        let len = out.len();
        let moins_seul_en_tete = len == 1 && out[0] == Tok::Op(Op::Minus);
        let moins_unaire = len >= 2
            && matches!(out[len - 2], Tok::Op(_) | Tok::LPar)
            && out[len - 1] == Tok::Op(Op::Minus);

        if moins_seul_en_tete || moins_unaire {
            // le '-' n’était pas binaire : on le replie dans le nombre
            n.operateurs -= 1;
            out[len - 1] = Tok::Num(-v);
        } else {
            // (A)B => (A)*B
            if matches!(out.last(), Some(Tok::RPar)) {
                n.operateurs += 1;
                out.push(Tok::Op(Op::Star));
            }
            out.push(Tok::Num(v));
        }
    }

    if n.operateurs == 0 {
        return Err(EvaluationError::NoOperator);
    }
    if n.operateurs >= n.operandes {
        return Err(EvaluationError::Arity);
    }
    if n.ouvrantes != n.fermantes {
        return Err(EvaluationError::UnbalancedParen);
    }

    log::trace!("jetons: {}", format_tokens(&out));
    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
