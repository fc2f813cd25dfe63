// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Opérateurs reconnus. `Neg` = moins unaire (écrit "u-" dans la démarche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Neg => 4,
            Op::Pow => 3,
            Op::Mul | Op::Div | Op::Rem => 2,
            Op::Add | Op::Sub => 1,
        }
    }

    pub fn associativite(self) -> Assoc {
        match self {
            Op::Neg | Op::Pow => Assoc::Droite,
            _ => Assoc::Gauche,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Neg => "u-",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::Pow => "^",
        }
    }

    /// Opérateurs binaires à un caractère (le '-' est traité à part).
    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '%' => Some(Op::Rem),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }
}

/// Fonctions unaires (ensemble fermé). log = logarithme naturel, trig en radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
}

impl Fonction {
    /// Correspondance exacte (sensible à la casse) : "SIN" n’est pas reconnu.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Hors domaine => NaN (pas d’erreur).
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Log => x.ln(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral brut : validé seulement à l’évaluation
    Num(String),
    Fonction(Fonction),
    Op(Op),

    LPar,
    RPar,
}

impl Tok {
    /// Texte canonique du jeton.
    pub fn texte(&self) -> &str {
        match self {
            Tok::Num(s) => s,
            Tok::Fonction(f) => f.nom(),
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
        }
    }
}

/// Le '-' est unaire en début d’expression, après un opérateur ou après '('.
fn moins_est_unaire(precedent: Option<&Tok>) -> bool {
    matches!(precedent, None | Some(Tok::Op(_)) | Some(Tok::LPar))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres : suite maximale de chiffres ASCII et de '.' (non validée ici)
/// - fonctions sin, cos, tan, log, sqrt (suite maximale de lettres, nom exact)
/// - opérateurs + - * / % ^ (le '-' devient unaire selon le jeton précédent)
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : "1.2.3" passe ici, l’évaluation tranchera
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // Fonctions : pas de variables, pas de correspondance partielle
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();
            let f = Fonction::depuis_nom(&nom).ok_or(ErreurEval::UnknownFunction(nom))?;
            out.push(Tok::Fonction(f));
            continue;
        }

        let tok = match c {
            '-' if moins_est_unaire(out.last()) => Tok::Op(Op::Neg),
            '-' => Tok::Op(Op::Sub),
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Op::depuis_char(c) {
                Some(op) => Tok::Op(op),
                None => return Err(ErreurEval::InvalidCharacter(c)),
            },
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}
