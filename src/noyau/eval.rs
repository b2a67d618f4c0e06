// src/noyau/eval.rs
//
// Évaluation RPN (pile de valeurs f64) + pipeline complet.
//
// Contrat : eval_rpn ne lève JAMAIS d'erreur arithmétique.
// - division par zéro        => NaN (sentinelle, pas un infini signé)
// - sous-flux / pile vide    => NaN
// C'est l'appelant (la touche "=" du moteur) qui inspecte la finitude
// du résultat et bascule en état d'erreur le cas échéant.

use super::jetons::{tokenize, Jeton, Op};
use super::rpn::vers_rpn;

/// Applique `a <op> b`.
fn applique(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Moins => a - b,
        Op::Fois => a * b,
        Op::Divise => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
    }
}

/// Évalue une suite RPN avec une seule pile de valeurs.
pub fn eval_rpn(rpn: &[Jeton]) -> f64 {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            // texte illisible (ex: "." seul) => NaN, même politique que le reste
            Jeton::Nombre(texte) => pile.push(texte.parse::<f64>().unwrap_or(f64::NAN)),

            Jeton::Operateur(op) => {
                // b au sommet, a dessous ; sous-flux => NaN
                let b = pile.pop().unwrap_or(f64::NAN);
                let a = pile.pop().unwrap_or(f64::NAN);
                pile.push(applique(*op, a, b));
            }

            // vers_rpn n'émet jamais de parenthèses
            Jeton::ParOuvrante | Jeton::ParFermante => {}
        }
    }

    pile.pop().unwrap_or(f64::NAN)
}

/// Pipeline complet : tokenize -> RPN -> évaluation.
///
/// Err uniquement pour une erreur de syntaxe (caractère inconnu) ;
/// toute faute arithmétique arrive en NaN dans le Ok.
pub fn eval_expression(s: &str) -> Result<f64, String> {
    let jetons = tokenize(s)?;
    let rpn = vers_rpn(&jetons);
    Ok(eval_rpn(&rpn))
}
