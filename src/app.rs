// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter Session (pour main.rs: use calculatrice_avancee::app::Session;)
//
// Le noyau ne dépend jamais de ce module : il reste une fonction pure texte -> f64.

pub mod etat;
pub mod vue;

// Ré-export pratique
pub use etat::Session;
pub use vue::{lancer_repl, Reponse};
