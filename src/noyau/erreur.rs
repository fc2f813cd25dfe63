// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du pipeline jetons -> RPN -> évaluation.
///
/// Seules les malformations STRUCTURELLES sont des erreurs :
/// division par zéro, sqrt(-1), etc. donnent inf/NaN, jamais une erreur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Suite de lettres hors de {sin, cos, tan, log, sqrt}.
    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    #[error("caractère invalide: '{0}'")]
    InvalidCharacter(char),

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    /// Une fonction doit être immédiatement suivie de '('.
    #[error("'(' attendue après la fonction {0}")]
    MissingParenthesisAfterFunction(String),

    /// Littéral accepté par le lexer mais illisible en f64 (ex: "1.2.3").
    #[error("nombre invalide: {0}")]
    InvalidNumber(String),

    /// Pile finale != 1 valeur, ou opérande manquant.
    #[error("expression invalide")]
    InvalidExpression,
}
