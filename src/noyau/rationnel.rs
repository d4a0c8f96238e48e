// src/noyau/rationnel.rs
//
// Valeur exacte : fraction n/d en forme réduite, dénominateur > 0.
// On s'appuie sur BigRational (num-rational) pour la normalisation et les
// opérateurs + - * ; ce module ajoute ce que le noyau pédagogique exige en
// plus : division vérifiée, clef canonique, comparaison croisée, tests de
// forme décimale.
//
// Règle d'erreur (deux niveaux) :
// - dénominateur nul passé à `normaliser` => panique (bug d'appelant,
//   la saisie utilisateur doit être filtrée en amont par le tokenizer)
// - division par zéro issue d'une saisie structurellement valide ("3÷0")
//   => Err("division par zéro"), jamais une panique

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use std::cmp::Ordering;

/// Rationnel exact, toujours normalisé (pgcd réduit, signe au numérateur).
pub type Rationnel = BigRational;

/// Construit un rationnel normalisé à partir d'un couple (n, d).
///
/// PANIQUE si d == 0 : invariant violé côté appelant.
/// Idempotent : re-normaliser un rationnel déjà réduit ne change rien.
pub fn normaliser(n: BigInt, d: BigInt) -> Rationnel {
    assert!(!d.is_zero(), "rationnel invalide : dénominateur nul");
    BigRational::new(n, d)
}

/// Rationnel entier n/1.
pub fn entier(n: i64) -> Rationnel {
    BigRational::from_integer(BigInt::from(n))
}

/// Raccourci n/d sur petits entiers (tests, candidats de distracteurs).
pub fn rat(n: i64, d: i64) -> Rationnel {
    normaliser(BigInt::from(n), BigInt::from(d))
}

/// Division vérifiée.
///
/// La division par zéro peut venir d'une saisie valide pour le validateur
/// (qui ne regarde que la structure), donc on la signale en erreur.
pub fn diviser(a: &Rationnel, b: &Rationnel) -> Result<Rationnel, String> {
    if b.is_zero() {
        return Err("division par zéro".into());
    }
    Ok(a / b)
}

/// Clef canonique "n/d" : deux rationnels sont égaux ssi leurs clefs le sont.
/// Sert au dédoublonnage des choix de QCM.
pub fn cle(r: &Rationnel) -> String {
    format!("{}/{}", r.numer(), r.denom())
}

/// Comparaison exacte par produits croisés (aucun flottant).
/// Les dénominateurs sont > 0 après normalisation, le sens est donc préservé.
pub fn comparer(a: &Rationnel, b: &Rationnel) -> Ordering {
    (a.numer() * b.denom()).cmp(&(b.numer() * a.denom()))
}

pub fn valeur_absolue(r: &Rationnel) -> Rationnel {
    r.abs()
}

/// La valeur admet-elle une écriture décimale d'au plus max_decimales
/// chiffres après la virgule ?
///
/// Après normalisation, "0.5" vaut 1/2 : le critère porte donc sur le
/// dénominateur réduit (facteurs premiers 2 et 5 seulement), et le nombre de
/// décimales nécessaires est max(a, b) pour d = 2^a * 5^b.
/// Un entier (d == 1) est un décimal valide à 0 décimale.
pub fn est_decimale(r: &Rationnel, max_decimales: u32) -> bool {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut d = r.denom().clone();
    let mut a = 0u32;
    let mut b = 0u32;

    while (&d % &deux).is_zero() {
        d /= &deux;
        a += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        b += 1;
    }

    d.is_one() && a.max(b) <= max_decimales
}

/// Écriture décimale finie, si elle existe (dénominateur 2^a * 5^b).
/// Retourne None sinon : on n'approxime jamais.
pub fn texte_decimal(r: &Rationnel) -> Option<String> {
    let dix = BigInt::from(10);

    // cherche k tel que d | 10^k (borne large, les saisies sont courtes)
    let mut puissance = BigInt::one();
    let mut k = 0u32;
    while !(&puissance % r.denom()).is_zero() {
        if k >= 32 {
            return None;
        }
        puissance *= &dix;
        k += 1;
    }

    let agrandi = r.numer() * (&puissance / r.denom());
    if k == 0 {
        return Some(agrandi.to_string());
    }

    let negatif = agrandi.is_negative();
    let chiffres = agrandi.magnitude().to_string();
    let chiffres = if chiffres.len() <= k as usize {
        format!("{}{}", "0".repeat(k as usize + 1 - chiffres.len()), chiffres)
    } else {
        chiffres
    };
    let coupe = chiffres.len() - k as usize;
    Some(format!(
        "{}{}.{}",
        if negatif { "-" } else { "" },
        &chiffres[..coupe],
        &chiffres[coupe..]
    ))
}
