// src/noyau/format.rs

/// Affichage d’un résultat pour le champ d’affichage.
///
/// - fini : forme décimale la plus courte qui relit la même valeur,
///   toujours avec une partie fractionnaire ("14.0", "-2.0", "0.5"),
///   jamais d’exposant : le texte doit pouvoir repasser par `tokenize`
/// - infini : "Infinity" / "-Infinity"
/// - NaN : "NaN"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        // Display n’écrit jamais "1e16", mais perd le ".0" des entiers
        let mut s = format!("{v}");
        if !s.contains('.') {
            s.push_str(".0");
        }
        s
    }
}

/// Ligne d’historique : "<expression> = <résultat>".
pub fn format_historique(expr: &str, v: f64) -> String {
    format!("{expr} = {}", format_resultat(v))
}
