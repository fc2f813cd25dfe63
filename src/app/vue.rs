// src/app/vue.rs
//
// Vue terminal
// ------------
// - Une ligne s’ajoute à l’entrée en cours puis est évaluée comme la touche "=".
//   L’entrée n’est vide entre deux lignes que si rien n’a été rappelé (:mr).
// - Les touches mémoire / historique deviennent des commandes ":xx".
// - `traiter_ligne` est pur (testable) ; `lancer_repl` ne fait que l’E/S.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use super::etat::Session;
use crate::noyau::format_resultat;

const INVITE: &str = "calc> ";

/// Ce que la vue doit montrer après une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Rien,
    Quitter,
    Texte(Vec<String>),
    /// `affichage` sur stdout ("Error"), `detail` sur stderr.
    Erreur { affichage: String, detail: String },
}

impl Session {
    pub fn traiter_ligne(&mut self, ligne: &str) -> Reponse {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return Reponse::Rien;
        }

        if let Some(commande) = ligne.strip_prefix(':') {
            return self.commande(commande);
        }

        self.saisir(ligne);
        let res = self.evaluer();
        self.effacer();
        match res {
            None => Reponse::Rien,
            Some(Ok(_)) => Reponse::Texte(vec![self.affichage.clone()]),
            Some(Err(e)) => Reponse::Erreur {
                affichage: self.affichage.clone(),
                detail: format!("{}: {e}", self.erreur),
            },
        }
    }

    fn commande(&mut self, commande: &str) -> Reponse {
        match commande {
            "quit" | "exit" => Reponse::Quitter,
            "historique" => {
                let lignes: Vec<String> = self.historique().map(str::to_string).collect();
                if lignes.is_empty() {
                    Reponse::Texte(vec!["(historique vide)".to_string()])
                } else {
                    Reponse::Texte(lignes)
                }
            }
            "effacer" => {
                self.effacer_historique();
                Reponse::Rien
            }
            "c" => {
                self.effacer();
                Reponse::Rien
            }
            "mc" => {
                self.memoire_effacer();
                Reponse::Rien
            }
            "ms" => {
                self.memoire_stocker();
                Reponse::Texte(vec![format!("M = {}", format_resultat(self.memoire))])
            }
            // la ligne suivante complète l’entrée : ":mr" puis "+1"
            "mr" => {
                self.memoire_rappeler();
                Reponse::Texte(vec![self.entree.clone()])
            }
            "m+" => {
                self.memoire_ajouter();
                Reponse::Texte(vec![format!("M = {}", format_resultat(self.memoire))])
            }
            "m-" => {
                self.memoire_soustraire();
                Reponse::Texte(vec![format!("M = {}", format_resultat(self.memoire))])
            }
            autre => Reponse::Erreur {
                affichage: String::new(),
                detail: format!("commande inconnue: :{autre}"),
            },
        }
    }
}

/// Boucle interactive jusqu’à :quit, Ctrl-C ou Ctrl-D.
pub fn lancer_repl(session: &mut Session) -> Result<()> {
    let mut editeur = DefaultEditor::new().context("initialisation du terminal")?;

    loop {
        match editeur.readline(INVITE) {
            Ok(ligne) => {
                if !ligne.trim().is_empty() {
                    if let Err(e) = editeur.add_history_entry(ligne.trim()) {
                        debug!(erreur = %e, "historique du terminal");
                    }
                }
                match session.traiter_ligne(&ligne) {
                    Reponse::Rien => {}
                    Reponse::Quitter => break,
                    Reponse::Texte(lignes) => {
                        for l in lignes {
                            println!("{l}");
                        }
                    }
                    Reponse::Erreur { affichage, detail } => {
                        if !affichage.is_empty() {
                            println!("{affichage}");
                        }
                        eprintln!("{detail}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("lecture de la ligne"),
        }
    }

    debug!("fin de session");
    Ok(())
}
