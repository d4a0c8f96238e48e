// src/noyau/jetons.rs
//
// Tokenisation des saisies enseignant (expressions et membres d'équation).
//
// Supporte :
// - entiers (ex: 12), décimaux (ex: 0.5), fractions littérales collées (2/5)
// - opérateurs + - ; x X * × (multiplication) ; ÷ : et / espacé (division)
// - parenthèses ( ) avec multiplication implicite après une valeur
// - l'inconnue, saisie comme le glyphe □
// - signe unaire : collé à un chiffre il entre dans le littéral, sinon il
//   est réécrit "0 +" / "0 -" (ainsi "-(□-1)" se lit "0-(□-1)")
//
// Le filtrage des opérateurs autorisés n'est PAS fait ici : un opérateur
// connu mais interdit passe la tokenisation et c'est le contrôle (controle.rs)
// qui le rejette, avec un message distinct du "caractère non pris en charge".

use num_bigint::BigInt;
use num_traits::Zero;

use super::rationnel::{entier, normaliser, texte_decimal, Rationnel};

/// Opérateur binaire canonique (les synonymes sont résolus à la tokenisation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }
}

/// Forme de saisie d'un nombre (indice d'affichage, pas de valeur).
/// Sert uniquement aux contraintes de format : 0.5 et 1/2 ont la même valeur
/// mais pas la même forme.
///
/// `Mixte` n'est jamais produit par `tokenize` (pas de syntaxe littérale pour
/// les nombres mixtes) : seul le montage direct de jetons peut le fournir.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forme {
    Entiere,
    Decimale,
    Fraction,
    Mixte,
}

/// Jeton : plus petite unité lexicale d'une saisie.
/// Le montage structuré côté interface construit directement des Vec<Jeton>
/// et les fait passer par le même contrôle/évaluation que le texte.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre { valeur: Rationnel, forme: Forme },
    Inconnue,
    Operateur(Op),
    Ouvrante,
    Fermante,
}

/// Glyphe de l'inconnue tel qu'affiché aux élèves.
/// Reconnu directement par le tokenizer (pas de pré-substitution) :
/// "x" reste l'opérateur de multiplication.
pub const GLYPHE_INCONNUE: char = '□';

/// Le dernier jeton émis vaut-il "valeur fermée" ?
/// (décide multiplication implicite et signe unaire/binaire)
fn termine_une_valeur(dernier: Option<&Jeton>) -> bool {
    matches!(
        dernier,
        Some(Jeton::Nombre { .. }) | Some(Jeton::Inconnue) | Some(Jeton::Fermante)
    )
}

/// Tokenize une chaîne en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<Jeton> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses (multiplication implicite avant '(' après une valeur)
        if c == '(' {
            if termine_une_valeur(out.last()) {
                out.push(Jeton::Operateur(Op::Fois));
            }
            out.push(Jeton::Ouvrante);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::Fermante);
            i += 1;
            continue;
        }

        // Signe + / - : binaire après une valeur, unaire sinon.
        if c == '+' || c == '-' {
            if termine_une_valeur(out.last()) {
                out.push(Jeton::Operateur(if c == '+' { Op::Plus } else { Op::Moins }));
                i += 1;
                continue;
            }
            // unaire collé à un chiffre => littéral signé
            if i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
                i += 1;
                let nombre = lire_nombre(&chars, &mut i, c == '-')?;
                out.push(nombre);
                continue;
            }
            // unaire devant autre chose ("-(", "-□") => réécriture 0 ∘ …
            out.push(Jeton::Nombre {
                valeur: entier(0),
                forme: Forme::Entiere,
            });
            out.push(Jeton::Operateur(if c == '+' { Op::Plus } else { Op::Moins }));
            i += 1;
            continue;
        }

        // Synonymes de multiplication / division
        if matches!(c, 'x' | 'X' | '*' | '×') {
            out.push(Jeton::Operateur(Op::Fois));
            i += 1;
            continue;
        }
        if matches!(c, '÷' | ':') {
            out.push(Jeton::Operateur(Op::Divise));
            i += 1;
            continue;
        }

        // '/' isolé (non collé entre chiffres) : division
        if c == '/' {
            out.push(Jeton::Operateur(Op::Divise));
            i += 1;
            continue;
        }

        // L'inconnue
        if c == GLYPHE_INCONNUE {
            out.push(Jeton::Inconnue);
            i += 1;
            continue;
        }

        // Nombre : entier, décimal, ou fraction littérale collée
        if c.is_ascii_digit() {
            let nombre = lire_nombre(&chars, &mut i, false)?;
            out.push(nombre);
            continue;
        }

        return Err(format!(
            "caractère non pris en charge : '{c}' (position {})",
            i + 1
        ));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de chars[i] (un chiffre).
///
/// - suite de chiffres => entier
/// - chiffres '.' chiffres => décimal (valeur n/10^k, forme Decimale)
/// - chiffres '/' chiffres, sans espaces => fraction littérale ;
///   '/' non suivi d'un chiffre => on recule, c'est une division
///
/// Un dénominateur littéral nul ("3/0" collé) est une erreur de saisie dure.
fn lire_nombre(chars: &[char], i: &mut usize, negatif: bool) -> Result<Jeton, String> {
    let debut = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    let partie_entiere: String = chars[debut..*i].iter().collect();
    let mut n = BigInt::parse_bytes(partie_entiere.as_bytes(), 10).ok_or("nombre invalide")?;
    if negatif {
        n = -n;
    }

    // décimal : 3.25 => 325/100 (normalisé ensuite)
    if *i + 1 < chars.len() && chars[*i] == '.' && chars[*i + 1].is_ascii_digit() {
        *i += 1;
        let debut_dec = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        let decimales: String = chars[debut_dec..*i].iter().collect();
        let brut = BigInt::parse_bytes(decimales.as_bytes(), 10).ok_or("nombre invalide")?;
        let echelle = num_traits::pow(BigInt::from(10), decimales.len());

        let signe: BigInt = if negatif { (-1).into() } else { 1.into() };
        let numerateur = n * &echelle + signe * brut;
        return Ok(Jeton::Nombre {
            valeur: normaliser(numerateur, echelle),
            forme: Forme::Decimale,
        });
    }

    // fraction littérale collée : 12/34
    if *i < chars.len() && chars[*i] == '/' {
        let sauvegarde = *i;
        *i += 1;
        if *i < chars.len() && chars[*i].is_ascii_digit() {
            let debut_d = *i;
            while *i < chars.len() && chars[*i].is_ascii_digit() {
                *i += 1;
            }
            let texte_d: String = chars[debut_d..*i].iter().collect();
            let d = BigInt::parse_bytes(texte_d.as_bytes(), 10).ok_or("dénominateur invalide")?;
            if d.is_zero() {
                return Err(format!(
                    "division par zéro dans une fraction (position {})",
                    debut_d + 1
                ));
            }
            return Ok(Jeton::Nombre {
                valeur: normaliser(n, d),
                forme: Forme::Fraction,
            });
        }
        // pas un chiffre après '/' : on remet sur '/' (division)
        *i = sauvegarde;
    }

    Ok(Jeton::Nombre {
        valeur: Rationnel::from_integer(n),
        forme: Forme::Entiere,
    })
}

/// Liste de jetons en texte (debug / "démarche" / messages).
/// Les nombres saisis en décimal se réaffichent en décimal.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    use num_traits::One;

    fn format_nombre(valeur: &Rationnel, forme: Forme) -> String {
        if forme == Forme::Decimale {
            if let Some(txt) = texte_decimal(valeur) {
                return txt;
            }
        }
        let n = valeur.numer();
        let d = valeur.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut morceaux = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre { valeur, forme } => format_nombre(valeur, *forme),
            Jeton::Inconnue => GLYPHE_INCONNUE.to_string(),
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::Ouvrante => "(".to_string(),
            Jeton::Fermante => ")".to_string(),
        };
        morceaux.push(s);
    }
    morceaux.join(" ")
}
