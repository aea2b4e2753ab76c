// src/noyau/reduction.rs
//
// Réduction à deux piles (shunting-yard “restreint”) :
// - pas de file de sortie : chaque opérateur est appliqué dès que possible
//   contre la pile d’opérandes
// - la parenthèse ouvrante est empilée comme marqueur
//
// Associativité : on dépile tant que prec(op) <= prec(sommet).
// Tous les opérateurs sont donc associatifs à GAUCHE, ^ compris :
//   2^3^2 = (2^3)^2 = 64
// C’est un écart assumé à la convention mathématique (^ à droite).
//
// Le cadre (les deux piles) appartient à UN appel : rien de partagé, rien de static.

use super::erreur::EvaluationError;
use super::jetons::{Op, Tok};

fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::Caret => 3,
    }
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum EnAttente {
    Ouvrante,
    Op(Op),
}

/// Cadre d’évaluation : opérandes + opérateurs en attente.
#[derive(Debug)]
struct Cadre {
    operandes: Vec<f64>,
    operateurs: Vec<EnAttente>,
}

impl Cadre {
    fn with_capacity(n: usize) -> Self {
        Self {
            operandes: Vec::with_capacity(n),
            operateurs: Vec::with_capacity(n),
        }
    }

    /// Dépile a (sommet) puis b, applique op, rempile le résultat.
    fn appliquer(&mut self, op: Op) -> Result<(), EvaluationError> {
        let a = self
            .operandes
            .pop()
            .ok_or(EvaluationError::IncompleteExpression)?;
        let b = self
            .operandes
            .pop()
            .ok_or(EvaluationError::IncompleteExpression)?;

        let r = match op {
            Op::Plus => a + b,
            Op::Minus => b - a,
            Op::Star => a * b,
            Op::Slash => {
                if a == 0.0 {
                    return Err(EvaluationError::DivideByZero);
                }
                b / a
            }
            Op::Caret => b.powf(a),
        };

        self.operandes.push(r);
        Ok(())
    }

    fn fermer(&mut self) -> Result<(), EvaluationError> {
        loop {
            match self.operateurs.pop() {
                Some(EnAttente::Ouvrante) => return Ok(()),
                Some(EnAttente::Op(op)) => self.appliquer(op)?,
                None => return Err(EvaluationError::MismatchedParen),
            }
        }
    }

    fn empiler_operateur(&mut self, op: Op) -> Result<(), EvaluationError> {
        while let Some(EnAttente::Op(sommet)) = self.operateurs.last().copied() {
            if precedence(op) > precedence(sommet) {
                break;
            }
            self.operateurs.pop();
            self.appliquer(sommet)?;
        }
        self.operateurs.push(EnAttente::Op(op));
        Ok(())
    }

    fn terminer(mut self) -> Result<f64, EvaluationError> {
        while let Some(top) = self.operateurs.pop() {
            match top {
                EnAttente::Op(op) => self.appliquer(op)?,
                EnAttente::Ouvrante => return Err(EvaluationError::MismatchedParen),
            }
        }

        match self.operandes.as_slice() {
            [v] => Ok(*v),
            _ => Err(EvaluationError::IncompleteExpression),
        }
    }
}

/// Réduit une suite de jetons à une valeur.
pub fn reduire(tokens: &[Tok]) -> Result<f64, EvaluationError> {
    let mut cadre = Cadre::with_capacity(tokens.len());

    for tok in tokens {
        match *tok {
            Tok::Num(v) => cadre.operandes.push(v),
            Tok::LPar => cadre.operateurs.push(EnAttente::Ouvrante),
            Tok::RPar => cadre.fermer()?,
            Tok::Op(op) => cadre.empiler_operateur(op)?,
        }
    }

    cadre.terminer()
}
