// src/noyau/moteur.rs
//
// Moteur d'édition : le tampon d'expression + l'ensemble des touches.
//
// Contrats :
// - Chaque opération retourne le triple d'affichage (principal,
//   secondaire, erreur) ; la vue ne fait que le rendre.
// - État d'erreur : tout est verrouillé sauf CE (qui vaut alors reset
//   total) et le reset total lui-même. Seul le reset total en sort.
// - La mémoire est indépendante du tampon d'expression ; le reset total
//   n'y touche pas, seules les opérations mémoire la modifient.

use super::eval::eval_expression;
use super::format::{format_nombre, TEXTE_ERREUR};
use super::jetons::Op;

/// Plafond de chiffres saisissables dans un opérande
/// (chiffres seulement : signe et point exclus du compte).
pub const MAX_CHIFFRES: usize = 16;

/// Triple d'affichage retourné par chaque opération du moteur.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    /// Ligne principale : opérande en cours, ou texte d'erreur.
    pub principal: String,
    /// Ligne secondaire : expression déjà engagée ("12 + 4 ×").
    pub secondaire: String,
    pub erreur: bool,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    /// Expression engagée, rendue en texte ("12 + 4 ×").
    expression: String,
    /// Opérande en cours d'édition (ligne principale).
    operande: String,
    /// Levé par un échec d'évaluation seulement.
    erreur: bool,
    /// L'opérande a-t-il été édité depuis le dernier opérateur ?
    /// Sert au repli d'opérateur (changement d'avis sans nouvel opérande).
    operande_edite: bool,
    /// Registre mémoire : au plus une valeur.
    memoire: Option<f64>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            expression: String::new(),
            operande: "0".to_string(),
            erreur: false,
            operande_edite: false,
            memoire: None,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triple d'affichage courant (sans mutation).
    pub fn affichage(&self) -> Affichage {
        Affichage {
            principal: if self.erreur {
                TEXTE_ERREUR.to_string()
            } else {
                self.operande.clone()
            },
            secondaire: self.expression.clone(),
            erreur: self.erreur,
        }
    }

    /// La mémoire contient-elle une valeur ? (indicateur "M" de la vue)
    pub fn memoire_occupee(&self) -> bool {
        self.memoire.is_some()
    }

    /* ------------------------ Saisie de l'opérande ------------------------ */

    pub fn touche_chiffre(&mut self, chiffre: char) -> Affichage {
        if self.erreur || !chiffre.is_ascii_digit() {
            return self.affichage();
        }

        if self.operande == "0" || self.operande == "-0" {
            // remplace le zéro de tête en conservant le signe
            self.operande.pop();
            self.operande.push(chiffre);
        } else if self.nb_chiffres() < MAX_CHIFFRES {
            self.operande.push(chiffre);
        }

        self.operande_edite = true;
        self.affichage()
    }

    pub fn touche_point(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        if !self.operande.contains('.') {
            self.operande.push('.');
            self.operande_edite = true;
        }
        self.affichage()
    }

    /// ± : bascule le signe de tête ("0" devient "-0", toléré en saisie).
    pub fn touche_signe(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        if let Some(reste) = self.operande.strip_prefix('-') {
            self.operande = reste.to_string();
        } else {
            self.operande.insert(0, '-');
        }
        self.operande_edite = true;
        self.affichage()
    }

    /// % : divise l'opérande par 100 immédiatement (pas à l'évaluation).
    pub fn touche_pourcent(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        let v = self.valeur_operande();
        self.operande = format_nombre(v / 100.0);
        self.operande_edite = true;
        self.affichage()
    }

    /// Retour arrière : retire le dernier caractère de l'opérande ;
    /// un opérande vidé (ou réduit au signe) redevient "0".
    pub fn touche_retour(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        self.operande.pop();
        if self.operande.is_empty() || self.operande == "-" {
            self.operande = "0".to_string();
        }
        self.operande_edite = true;
        self.affichage()
    }

    /* ------------------------ Engagement + évaluation ------------------------ */

    pub fn touche_operateur(&mut self, op: Op) -> Affichage {
        if self.erreur {
            return self.affichage();
        }

        if !self.expression.is_empty() && !self.operande_edite {
            // changement d'avis : remplace l'opérateur en fin d'expression
            self.expression.pop();
            self.expression.push(op.symbole());
        } else {
            if !self.expression.is_empty() {
                self.expression.push(' ');
            }
            self.expression.push_str(&self.operande);
            self.expression.push(' ');
            self.expression.push(op.symbole());
        }

        self.operande = "0".to_string();
        self.operande_edite = false;
        self.affichage()
    }

    /// = : expression engagée + opérande, pipeline complet.
    /// Résultat fini : il devient l'opérande, l'expression est vidée.
    /// Résultat non fini OU erreur de syntaxe (inatteignable depuis les
    /// touches, traitée quand même) : état d'erreur.
    pub fn touche_egal(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }

        let complet = if self.expression.is_empty() {
            self.operande.clone()
        } else {
            format!("{} {}", self.expression, self.operande)
        };

        match eval_expression(&complet) {
            Ok(v) if v.is_finite() => {
                self.operande = format_nombre(v);
                self.operande_edite = false;
            }
            Ok(_) | Err(_) => {
                self.erreur = true;
            }
        }

        self.expression.clear();
        self.affichage()
    }

    /* ------------------------ Effacements ------------------------ */

    /// CE : efface l'opérande en cours. En état d'erreur : reset total.
    pub fn efface_saisie(&mut self) -> Affichage {
        if self.erreur {
            return self.reset_total();
        }
        self.operande = "0".to_string();
        self.operande_edite = true;
        self.affichage()
    }

    /// AC : remise à zéro totale du tampon. La mémoire est conservée.
    pub fn reset_total(&mut self) -> Affichage {
        self.expression.clear();
        self.operande = "0".to_string();
        self.erreur = false;
        self.operande_edite = false;
        self.affichage()
    }

    /* ------------------------ Mémoire ------------------------ */
    // Verrouillée en état d'erreur, comme le reste de l'édition.

    pub fn memoire_efface(&mut self) -> Affichage {
        if !self.erreur {
            self.memoire = None;
        }
        self.affichage()
    }

    /// MR : dépose la valeur mémorisée dans l'opérande.
    /// Mémoire vide : ne fait rien.
    pub fn memoire_rappel(&mut self) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        if let Some(v) = self.memoire {
            self.operande = format_nombre(v);
            self.operande_edite = true;
        }
        self.affichage()
    }

    pub fn memoire_plus(&mut self) -> Affichage {
        self.memoire_cumule(1.0)
    }

    pub fn memoire_moins(&mut self) -> Affichage {
        self.memoire_cumule(-1.0)
    }

    fn memoire_cumule(&mut self, signe: f64) -> Affichage {
        if self.erreur {
            return self.affichage();
        }
        let v = self.valeur_operande();
        self.memoire = Some(self.memoire.unwrap_or(0.0) + signe * v);
        self.affichage()
    }

    /* ------------------------ Internes ------------------------ */

    /// Valeur numérique de l'opérande. L'opérande est toujours un nombre
    /// lisible ("0", "-0", "12.", ".5", résultat formaté) ; le repli 0
    /// est purement défensif.
    fn valeur_operande(&self) -> f64 {
        self.operande.parse::<f64>().unwrap_or(0.0)
    }

    fn nb_chiffres(&self) -> usize {
        self.operande.chars().filter(|c| c.is_ascii_digit()).count()
    }
}
