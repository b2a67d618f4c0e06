//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation + normalisation du moins unaire
//! - rpn.rs     : shunting-yard (infixe -> postfix), parenthèses tolérantes
//! - eval.rs    : évaluation RPN (pile f64) + pipeline complet
//! - format.rs  : affichage d'un résultat (bande décimale, exponentielle)
//! - moteur.rs  : machine d'édition (tampon, erreur, mémoire, touches)

pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_moteur;

// API publique minimale
pub use jetons::Op;
pub use moteur::{Affichage, Moteur};
