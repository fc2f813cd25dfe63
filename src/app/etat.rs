//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : contenir ce qu’un front-end garde autour du noyau pur
//! (entrée, affichage, historique, mémoire) et offrir les actions des touches
//! (C, ⌫, =, MC/MS/MR/M+/M-) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : tout passe par `noyau::evaluate`.
//! - Garde-fou : historique borné (HISTORIQUE_MAX).

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::noyau::format::format_historique;
use crate::noyau::{evaluate, format_resultat, ErreurEval};

/// Garde-fou : au-delà, les plus anciennes lignes sont oubliées.
pub const HISTORIQUE_MAX: usize = 500;

/// Texte du champ d’affichage après un échec.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Message présenté à l’utilisateur, quel que soit le type d’erreur.
pub const MESSAGE_ERREUR: &str = "Invalid expression";

#[derive(Clone, Debug, Default)]
pub struct Session {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String,
    pub erreur: String,
    historique: VecDeque<String>,

    // --- registre mémoire ---
    pub memoire: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir(&mut self, texte: &str) {
        self.entree.push_str(texte);
    }

    /// C : efface l’entrée.
    pub fn effacer(&mut self) {
        self.entree.clear();
    }

    /// ⌫ : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
    }

    /* ------------------------ "=" ------------------------ */

    /// Évalue l’entrée courante.
    ///
    /// - entrée vide (après trim) : rien ne change, `None`
    /// - succès : affichage = résultat, une ligne d’historique
    /// - échec : affichage = "Error", message générique ; le type exact reste dans le `Err`
    pub fn evaluer(&mut self) -> Option<Result<f64, ErreurEval>> {
        let expr = self.entree.trim().to_string();
        if expr.is_empty() {
            return None;
        }

        let res = evaluate(&expr);
        match &res {
            Ok(v) => {
                self.affichage = format_resultat(*v);
                self.erreur.clear();
                self.pousser_historique(format_historique(&expr, *v));
                info!(expr = %expr, resultat = %self.affichage, "calcul");
            }
            Err(e) => {
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.erreur = MESSAGE_ERREUR.to_string();
                warn!(expr = %expr, erreur = %e, "expression refusée");
            }
        }
        Some(res)
    }

    /* ------------------------ Historique ------------------------ */

    fn pousser_historique(&mut self, ligne: String) {
        if self.historique.len() == HISTORIQUE_MAX {
            self.historique.pop_front();
        }
        self.historique.push_back(ligne);
    }

    pub fn historique(&self) -> impl Iterator<Item = &str> {
        self.historique.iter().map(String::as_str)
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Valeur de l’affichage, 0 si illisible ("Error", vide…).
    fn valeur_affichee(&self) -> f64 {
        self.affichage.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// MS
    pub fn memoire_stocker(&mut self) {
        self.memoire = self.valeur_affichee();
    }

    /// MR : colle la mémoire au bout de l’entrée.
    pub fn memoire_rappeler(&mut self) {
        let texte = format_resultat(self.memoire);
        self.entree.push_str(&texte);
    }

    /// M+
    pub fn memoire_ajouter(&mut self) {
        self.memoire += self.valeur_affichee();
    }

    /// M-
    pub fn memoire_soustraire(&mut self) {
        self.memoire -= self.valeur_affichee();
    }
}
