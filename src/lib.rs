//! Calculatrice avancée : moteur d’expressions arithmétiques (texte -> f64).
//!
//! - `noyau` : jetons -> shunting-yard (RPN) -> pile de f64, sans état partagé
//! - `app`   : session (affichage, historique, mémoire) + vue terminal
//!
//! ```
//! use calculatrice_avancee::noyau::{evaluate, ErreurEval};
//!
//! assert_eq!(evaluate("2^3^2"), Ok(512.0));
//! assert_eq!(evaluate("2 3"), Err(ErreurEval::InvalidExpression));
//! ```

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, ErreurEval};
