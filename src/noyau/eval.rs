//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de f64
//!
//! Aucune étape ne revient sur la sortie de la précédente, aucun état partagé :
//! chaque appel est indépendant (réentrant, utilisable depuis plusieurs threads).

use tracing::{debug, trace};

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::rpn::to_rpn;

/// Démarche : jetons et RPN en texte (espaces entre jetons).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

fn depiler(pile: &mut Vec<f64>) -> Result<f64, ErreurEval> {
    pile.pop().ok_or(ErreurEval::InvalidExpression)
}

/// Évalue une suite RPN avec une pile de f64.
///
/// IEEE-754 partout : 10/0 = inf, sqrt(-1) = NaN, ce ne sont pas des erreurs.
/// Erreur seulement si un littéral est illisible ou si la pile ne finit pas à 1 valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(s) => {
                let v = s
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::InvalidNumber(s.clone()))?;
                pile.push(v);
            }

            Tok::Op(op) => {
                // b = dernier empilé, a = le suivant
                let b = depiler(&mut pile)?;
                let v = match op {
                    Op::Neg => -b,
                    Op::Add => depiler(&mut pile)? + b,
                    Op::Sub => depiler(&mut pile)? - b,
                    Op::Mul => depiler(&mut pile)? * b,
                    Op::Div => depiler(&mut pile)? / b,
                    Op::Rem => depiler(&mut pile)? % b,
                    Op::Pow => depiler(&mut pile)?.powf(b),
                };
                pile.push(v);
            }

            Tok::Fonction(f) => {
                let x = depiler(&mut pile)?;
                pile.push(f.appliquer(x));
            }

            // to_rpn ne produit jamais de parenthèses
            Tok::LPar | Tok::RPar => return Err(ErreurEval::InvalidExpression),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::InvalidExpression);
    }
    pile.pop().ok_or(ErreurEval::InvalidExpression)
}

/// API publique : texte -> résultat, ou le premier type d’erreur rencontré.
pub fn evaluate(expr_str: &str) -> Result<f64, ErreurEval> {
    evaluate_detaille(expr_str).map(|(v, _d)| v)
}

/// Comme `evaluate`, avec en plus la démarche (jetons + RPN).
pub fn evaluate_detaille(expr_str: &str) -> Result<(f64, Demarche), ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(nb = jetons.len(), jetons = %jetons_txt, "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!(rpn = %rpn_txt, "rpn");

    // 3) Pile
    let v = eval_rpn(&rpn)?;
    trace!(expr = expr_str, resultat = v, "évalué");

    Ok((
        v,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}
