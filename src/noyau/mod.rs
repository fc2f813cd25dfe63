//! Noyau de la calculatrice : texte -> f64
//!
//! Organisation interne :
//! - erreur.rs  : types d’erreurs (lexer / parser / pile)
//! - jetons.rs  : tokenisation + tables opérateurs/fonctions
//! - rpn.rs     : shunting-yard (liaison des fonctions comprise)
//! - eval.rs    : pile de f64 + pipeline complet
//! - format.rs  : affichage d’un résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, evaluate_detaille, Demarche};
pub use format::format_resultat;
