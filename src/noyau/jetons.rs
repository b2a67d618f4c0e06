// src/noyau/jetons.rs

/// Opérateur binaire canonique.
///
/// Le scanner normalise les formes ASCII (`*`, `/`, `-`) vers ce type :
/// le noyau n'a qu'UN symbole interne par opération (+ − × ÷).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    /// Précédence entière fixe : `+` `−` = 1 ; `×` `÷` = 2.
    /// Les quatre opérateurs sont associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    /// Symbole canonique (celui de l'affichage et du rendu de jetons).
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '−',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }

    /// Reconnaissance à la lecture : formes ASCII + formes canoniques.
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' | '−' => Some(Op::Moins),
            '*' | '×' => Some(Op::Fois),
            '/' | '÷' => Some(Op::Divise),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Sous-chaîne littérale `[0-9]*\.?[0-9]*` telle que lue (au plus un
    /// point), pas encore convertie en nombre.
    Nombre(String),
    Operateur(Op),
    ParOuvrante,
    ParFermante,
}

/// Tokenize une chaîne en jetons, moins unaire déjà normalisé.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / et leurs formes canoniques − × ÷
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Échoue (erreur de syntaxe) sur tout autre caractère.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    let brut = scanner(s)?;
    Ok(normalise_moins_unaire(brut))
}

/// Scan brut, gauche à droite, sans traitement du moins unaire.
fn scanner(s: &str) -> Result<Vec<Jeton>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParOuvrante);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParFermante);
            i += 1;
            continue;
        }

        // Opérateurs (normalisés dès la lecture)
        if let Some(op) = Op::depuis_char(c) {
            out.push(Jeton::Operateur(op));
            i += 1;
            continue;
        }

        // Nombre : suite maximale de [0-9.], arrêt AVANT un second point.
        // Le point restant démarre une nouvelle tentative de jeton
        // (politique volontaire, pas un plantage).
        if c.is_ascii_digit() || c == '.' {
            let mut texte = String::new();
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    texte.push(d);
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    texte.push(d);
                } else {
                    break;
                }
                i += 1;
            }
            out.push(Jeton::Nombre(texte));
            continue;
        }

        return Err(format!("caractère inattendu : '{c}'"));
    }

    Ok(out)
}

/// Passe de normalisation du moins unaire (APRÈS le scan brut).
///
/// Un `−` en première position, ou juste après un opérateur ou une
/// parenthèse ouvrante, est précédé de `0` : toute position d'opérateur
/// devient ainsi binaire ("-x" => "0 − x").
///
/// La règle regarde le dernier jeton ÉMIS, pas le caractère précédent,
/// d'où la passe séparée du scanner.
pub fn normalise_moins_unaire(jetons: Vec<Jeton>) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());

    for jeton in jetons {
        let unaire = matches!(jeton, Jeton::Operateur(Op::Moins))
            && matches!(
                out.last(),
                None | Some(Jeton::Operateur(_)) | Some(Jeton::ParOuvrante)
            );

        if unaire {
            out.push(Jeton::Nombre("0".to_string()));
        }
        out.push(jeton);
    }

    out
}

/// Format utilitaire (debug/tests) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for jeton in jetons {
        let s = match jeton {
            Jeton::Nombre(texte) => texte.clone(),
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::ParOuvrante => "(".to_string(),
            Jeton::ParFermante => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
