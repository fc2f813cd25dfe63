// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
//
// Règles:
// - Fonction: empilée, elle sort juste après la parenthèse fermante de son argument.
//   Elle DOIT être suivie immédiatement de '(' (sinon erreur dédiée, pas de report en fin).
// - Opérateur: on dépile tant que le sommet est un opérateur plus prioritaire,
//   ou de même priorité si le nouveau est associatif à gauche.
//   ^ et u- (droite) laissent donc en place leurs égaux : 2^3^2 = 2^(3^2).
// - La pile ne contient que Op / Fonction / LPar.

use super::erreur::ErreurEval;
use super::jetons::{Assoc, Op, Tok};

/// Vrai si `top` (déjà sur la pile) doit sortir avant d’empiler `op`.
fn doit_depiler(top: Op, op: Op) -> bool {
    let (p_top, p_op) = (top.precedence(), op.precedence());
    p_top > p_op || (p_top == p_op && op.associativite() == Assoc::Gauche)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Num("1"), Op(Add), Num("2"), RPar]
///   rpn:    [Num("1"), Num("2"), Op(Add), Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    let mut it = tokens.iter().peekable();

    while let Some(tok) = it.next() {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Fonction(f) => {
                if !matches!(it.peek(), Some(Tok::LPar)) {
                    return Err(ErreurEval::MissingParenthesisAfterFunction(
                        f.nom().to_string(),
                    ));
                }
                ops.push(tok.clone());
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    let top = *top;
                    if !doit_depiler(top, *op) {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(top));
                }
                ops.push(tok.clone());
            }

            Tok::LPar => ops.push(Tok::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' (jetée)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(ErreurEval::MismatchedParentheses),
                    }
                }

                // la fonction au sommet se lie au groupe qui vient de fermer
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile
    while let Some(t) = ops.pop() {
        if matches!(t, Tok::LPar | Tok::RPar) {
            return Err(ErreurEval::MismatchedParentheses);
        }
        out.push(t);
    }

    Ok(out)
}
