// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix)
//
// Règles:
// - précédence fixe (+ − = 1 ; × ÷ = 2), tout associatif à gauche :
//   précédence ÉGALE au sommet => on dépile aussi
// - parenthèses TOLÉRANTES : fermante orpheline ignorée, ouvrantes
//   restantes écartées en fin de lecture. La calculatrice doit rester
//   utilisable en cours de saisie ; ce n'est pas un oubli.

use super::jetons::Jeton;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
///
/// Ne peut pas échouer sur une suite bien formée ; les parenthèses mal
/// appariées sont tolérées (voir en-tête).
pub fn vers_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut pile: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => sortie.push(jeton),

            Jeton::Operateur(op) => {
                // dépile tant que le sommet est un opérateur de précédence
                // supérieure OU égale (associativité gauche)
                while let Some(&Jeton::Operateur(haut)) = pile.last() {
                    if haut.precedence() < op.precedence() {
                        break;
                    }
                    sortie.push(pile.pop().unwrap());
                }
                pile.push(jeton);
            }

            Jeton::ParOuvrante => pile.push(jeton),

            Jeton::ParFermante => {
                // dépile jusqu'à '(' puis l'écarte ;
                // fermante orpheline : rien à écarter, on continue
                while let Some(haut) = pile.pop() {
                    if matches!(haut, Jeton::ParOuvrante) {
                        break;
                    }
                    sortie.push(haut);
                }
            }
        }
    }

    // vide la pile ; les '(' restantes sont simplement écartées
    while let Some(haut) = pile.pop() {
        if !matches!(haut, Jeton::ParOuvrante) {
            sortie.push(haut);
        }
    }

    sortie
}
