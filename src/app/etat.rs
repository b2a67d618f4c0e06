//! src/app/etat.rs
//!
//! État UI : un moteur + le dernier triple d'affichage.
//!
//! Rôle : faire le pont entre les touches (boutons/clavier) et le moteur.
//! Aucune logique d'affichage ni d'évaluation ici : chaque touche est
//! transmise au moteur, et la vue ne lit QUE le triple retourné.

use crate::noyau::{Affichage, Moteur, Op};

/// Touche logique de la calculatrice (pavé + clavier confondus).
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Op),
    Egal,
    Pourcent,
    Signe,
    Retour,
    EffaceSaisie,
    ResetTotal,
    MemoireEfface,
    MemoireRappel,
    MemoirePlus,
    MemoireMoins,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,
    affichage: Affichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        let moteur = Moteur::new();
        let affichage = moteur.affichage();
        Self { moteur, affichage }
    }
}

impl AppCalc {
    /// Applique une touche au moteur et conserve le triple retourné.
    pub fn appuyer(&mut self, touche: Touche) {
        self.affichage = match touche {
            Touche::Chiffre(c) => self.moteur.touche_chiffre(c),
            Touche::Point => self.moteur.touche_point(),
            Touche::Operateur(op) => self.moteur.touche_operateur(op),
            Touche::Egal => self.moteur.touche_egal(),
            Touche::Pourcent => self.moteur.touche_pourcent(),
            Touche::Signe => self.moteur.touche_signe(),
            Touche::Retour => self.moteur.touche_retour(),
            Touche::EffaceSaisie => self.moteur.efface_saisie(),
            Touche::ResetTotal => self.moteur.reset_total(),
            Touche::MemoireEfface => self.moteur.memoire_efface(),
            Touche::MemoireRappel => self.moteur.memoire_rappel(),
            Touche::MemoirePlus => self.moteur.memoire_plus(),
            Touche::MemoireMoins => self.moteur.memoire_moins(),
        };
    }

    /// Dernier triple d'affichage (lecture seule pour la vue).
    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    /// Indicateur "M" de la vue.
    pub fn memoire_occupee(&self) -> bool {
        self.moteur.memoire_occupee()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, Touche};

    #[test]
    fn triple_suit_le_moteur() {
        let mut app = AppCalc::default();
        assert_eq!(app.affichage().principal, "0");

        app.appuyer(Touche::Chiffre('4'));
        app.appuyer(Touche::Chiffre('2'));
        assert_eq!(app.affichage().principal, "42");

        app.appuyer(Touche::ResetTotal);
        assert_eq!(app.affichage().principal, "0");
        assert!(!app.affichage().erreur);
    }
}
