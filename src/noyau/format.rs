// src/noyau/format.rs
//
// Affichage d'un résultat f64.
//
// Règles, dans cet ordre :
// - non fini                          => texte d'erreur fixe
// - zéro, ou |n| dans [1e-6, 1e12)    => décimal simple ({} de Rust :
//                                        forme la plus courte qui fait
//                                        l'aller-retour exact)
// - sinon                             => notation exponentielle,
//                                        mantisse à 8 chiffres
// - décimal simple de plus de 18 car. => reformaté à 16 chiffres
//   significatifs. Plafond de précision distinct de la règle
//   exponentielle ; les deux arrondissent la valeur affichée.

/// Texte d'erreur unique (division par zéro, expression malformée, ...).
pub const TEXTE_ERREUR: &str = "Erreur";

/// Bande d'affichage décimal simple : [1e-6, 1e12).
const BANDE_MIN: f64 = 1e-6;
const BANDE_MAX: f64 = 1e12;

/// Longueur maximale du décimal simple avant plafonnement de précision.
const LONGUEUR_MAX: usize = 18;

/// Chiffres significatifs du reformatage plafonné.
const CHIFFRES_PLAFOND: i32 = 16;

pub fn format_nombre(n: f64) -> String {
    if !n.is_finite() {
        return TEXTE_ERREUR.to_string();
    }

    let magnitude = n.abs();
    if n != 0.0 && !(BANDE_MIN..BANDE_MAX).contains(&magnitude) {
        return format!("{n:.8e}");
    }

    let simple = format!("{n}");
    if simple.len() > LONGUEUR_MAX {
        return format_significatif(n, CHIFFRES_PLAFOND);
    }
    simple
}

/// Reformate avec `chiffres` chiffres significatifs.
/// N'est appelé que dans la bande décimale simple (exposant décimal
/// dans [-6, 11]), donc jamais en notation exponentielle.
fn format_significatif(n: f64, chiffres: i32) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let exposant = n.abs().log10().floor() as i32;
    let decimales = (chiffres - 1 - exposant).max(0) as usize;
    format!("{n:.decimales$}")
}
