//! Tests moteur (campagne) : machine d'édition de bout en bout.
//!
//! Invariants visés :
//! - saisie de chiffres (zéro de tête, plafond de 16 chiffres)
//! - priorité des opérateurs à travers la touche "="
//! - division par zéro => état d'erreur verrouillé, sortie par AC seul
//! - repli d'opérateur (changement d'avis sans nouvel opérande)
//! - mémoire indépendante du tampon (AC la conserve)

use super::jetons::Op;
use super::moteur::{Affichage, Moteur};

/* ------------------------ Helpers ------------------------ */

/// Mini-langage de scénario : chiffres, '.', opérateurs (+ - * /),
/// '=' (égal), '%' (pourcent), 's' (±), '<' (retour arrière).
/// Les espaces sont décoratifs.
fn tape(m: &mut Moteur, scenario: &str) -> Affichage {
    let mut aff = m.affichage();
    for c in scenario.chars() {
        aff = match c {
            '0'..='9' => m.touche_chiffre(c),
            '.' => m.touche_point(),
            '=' => m.touche_egal(),
            '%' => m.touche_pourcent(),
            's' => m.touche_signe(),
            '<' => m.touche_retour(),
            ' ' => continue,
            _ => match Op::depuis_char(c) {
                Some(op) => m.touche_operateur(op),
                None => panic!("touche inconnue dans le scénario : {c:?}"),
            },
        };
    }
    aff
}

fn principal(scenario: &str) -> String {
    tape(&mut Moteur::new(), scenario).principal
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_simple() {
    assert_eq!(principal("123"), "123");
    assert_eq!(principal("12.5"), "12.5");
}

#[test]
fn zero_de_tete_remplace() {
    assert_eq!(principal("007"), "7");
    assert_eq!(principal("0.5"), "0.5");
}

#[test]
fn point_unique() {
    assert_eq!(principal("1.2.3"), "1.23");
}

#[test]
fn plafond_de_chiffres() {
    // 20 chiffres tapés, 16 retenus ; signe et point hors compte
    assert_eq!(principal("12345678901234567890"), "1234567890123456");
    assert_eq!(principal("s1234567890.1234567890"), "-1234567890.123456");
}

#[test]
fn signe_bascule() {
    assert_eq!(principal("5s"), "-5");
    assert_eq!(principal("5ss"), "5");
    assert_eq!(principal("s"), "-0");
}

#[test]
fn retour_arriere() {
    assert_eq!(principal("123<<"), "1");
    assert_eq!(principal("1<"), "0");
    // le signe seul retombe sur "0"
    assert_eq!(principal("5s<"), "0");
}

#[test]
fn pourcent_immediat() {
    assert_eq!(principal("50%"), "0.5");
    assert_eq!(principal("5%%"), "0.0005");
}

/* ------------------------ Expression engagée ------------------------ */

#[test]
fn expression_secondaire() {
    let mut m = Moteur::new();
    let aff = tape(&mut m, "12+4*");
    assert_eq!(aff.secondaire, "12 + 4 ×");
    assert_eq!(aff.principal, "0");
}

#[test]
fn repli_d_operateur() {
    // changement d'avis sans nouvel opérande : l'opérateur est remplacé
    let mut m = Moteur::new();
    let aff = tape(&mut m, "12+*");
    assert_eq!(aff.secondaire, "12 ×");
    assert_eq!(tape(&mut m, "3=").principal, "36");
}

#[test]
fn priorite_via_egal() {
    assert_eq!(principal("2+3*4="), "14");
    assert_eq!(principal("2*3+4="), "10");
}

#[test]
fn moins_unaire_via_signe() {
    assert_eq!(principal("5s+3="), "-2");
}

#[test]
fn chainage_apres_egal() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "2+3=").principal, "5");
    // le résultat devient l'opérande du calcul suivant
    assert_eq!(tape(&mut m, "+2=").principal, "7");
}

#[test]
fn egal_sans_expression() {
    assert_eq!(principal("7="), "7");
    assert_eq!(principal("="), "0");
}

/* ------------------------ État d'erreur ------------------------ */

#[test]
fn division_par_zero_verrouille() {
    let mut m = Moteur::new();
    let aff = tape(&mut m, "5/0=");
    assert_eq!(aff.principal, "Erreur");
    assert!(aff.erreur);
    assert_eq!(aff.secondaire, "");

    // tout est verrouillé : chiffres, opérateurs, %, ±, retour, point
    assert_eq!(tape(&mut m, "7+2=%s<.").principal, "Erreur");

    // seule sortie : reset total
    let aff = m.reset_total();
    assert_eq!(
        aff,
        Affichage {
            principal: "0".to_string(),
            secondaire: String::new(),
            erreur: false,
        }
    );
}

#[test]
fn efface_saisie_vaut_reset_en_erreur() {
    let mut m = Moteur::new();
    tape(&mut m, "1/0=");
    let aff = m.efface_saisie();
    assert!(!aff.erreur);
    assert_eq!(aff.principal, "0");
}

#[test]
fn efface_saisie_hors_erreur() {
    let mut m = Moteur::new();
    tape(&mut m, "12+34");
    let aff = m.efface_saisie();
    assert_eq!(aff.principal, "0");
    // l'expression engagée reste en place
    assert_eq!(aff.secondaire, "12 +");
}

#[test]
fn reset_idempotent() {
    let attendu = Affichage {
        principal: "0".to_string(),
        secondaire: String::new(),
        erreur: false,
    };

    for scenario in ["", "123.4", "12+4*", "5/0=", "2+3="] {
        let mut m = Moteur::new();
        tape(&mut m, scenario);
        assert_eq!(m.reset_total(), attendu, "scenario={scenario:?}");
        assert_eq!(m.reset_total(), attendu, "scenario={scenario:?}");
    }
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_cumul_et_rappel() {
    let mut m = Moteur::new();
    tape(&mut m, "5");
    m.memoire_plus();
    tape(&mut m, "+3");
    m.memoire_plus();

    assert!(m.memoire_occupee());
    assert_eq!(m.memoire_rappel().principal, "8");
}

#[test]
fn memoire_soustrait() {
    let mut m = Moteur::new();
    tape(&mut m, "10");
    m.memoire_plus();
    m.efface_saisie();
    tape(&mut m, "3");
    m.memoire_moins();
    assert_eq!(m.memoire_rappel().principal, "7");
}

#[test]
fn memoire_survit_au_reset() {
    let mut m = Moteur::new();
    tape(&mut m, "42");
    m.memoire_plus();
    m.reset_total();

    assert!(m.memoire_occupee());
    assert_eq!(m.memoire_rappel().principal, "42");
}

#[test]
fn memoire_vide_rappel_neutre() {
    let mut m = Moteur::new();
    tape(&mut m, "9");
    assert!(!m.memoire_occupee());
    assert_eq!(m.memoire_rappel().principal, "9");
}

#[test]
fn memoire_efface() {
    let mut m = Moteur::new();
    tape(&mut m, "5");
    m.memoire_plus();
    m.memoire_efface();
    assert!(!m.memoire_occupee());
}

#[test]
fn memoire_verrouillee_en_erreur() {
    let mut m = Moteur::new();
    tape(&mut m, "5/0=");
    m.memoire_plus();
    assert!(!m.memoire_occupee());
    assert_eq!(m.memoire_rappel().principal, "Erreur");
}

#[test]
fn rappel_puis_calcul() {
    let mut m = Moteur::new();
    tape(&mut m, "25");
    m.memoire_plus();
    m.reset_total();

    tape(&mut m, "100-");
    m.memoire_rappel();
    assert_eq!(tape(&mut m, "=").principal, "75");
}
