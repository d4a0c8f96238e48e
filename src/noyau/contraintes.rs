// src/noyau/contraintes.rs
//
// Contraintes de format configurées par l'enseignant : signe, bornes,
// écriture (fraction ou décimale), nombre d'étapes d'une équation, forme
// exigée de la réponse.
//
// Chaque contrôle rend la liste des messages d'échec (vide = conforme) ;
// l'appelant choisit d'afficher le premier ou tous.
//
// Le "nombre d'étapes" est une règle pédagogique, pas une preuve algébrique :
// on compte opérateurs et parenthèses du membre qui porte l'inconnue.

use num_bigint::BigInt;
use num_traits::{One, Signed};

use super::jetons::{Forme, Jeton};
use super::rationnel::{comparer, entier, est_decimale, valeur_absolue, Rationnel};

use std::cmp::Ordering;

/// Écriture attendue des nombres saisis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeNombre {
    Fraction,
    Decimale,
}

/// Forme exigée de la réponse d'une équation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormeReponse {
    Quelconque,
    Entiere,
    FractionPropre,
    Decimale,
}

/// Configuration enseignant, lecture seule pour le noyau.
#[derive(Clone, Debug)]
pub struct Contraintes {
    pub mode: ModeNombre,
    pub negatifs_permis: bool,
    pub valeur_min: Rationnel,
    pub valeur_max: Rationnel,
    /// Dénominateur maximal en mode fraction (les entiers sont exemptés).
    pub denominateur_max: u32,
    /// Nombre de chiffres après la virgule en mode décimal.
    pub decimales_max: u32,
    /// 1 ou 2 (règle du programme scolaire).
    pub etapes: u8,
    pub forme_reponse: FormeReponse,
}

impl Default for Contraintes {
    fn default() -> Self {
        Self {
            mode: ModeNombre::Fraction,
            negatifs_permis: false,
            valeur_min: entier(0),
            valeur_max: entier(100),
            denominateur_max: 12,
            decimales_max: 2,
            etapes: 1,
            forme_reponse: FormeReponse::Quelconque,
        }
    }
}

/// Signe et bornes d'une valeur.
pub fn valider_valeur(valeur: &Rationnel, contraintes: &Contraintes) -> Vec<String> {
    let mut fautes = Vec::new();

    if !contraintes.negatifs_permis && valeur.is_negative() {
        fautes.push(format!("valeur négative interdite : {valeur}"));
    }
    if comparer(valeur, &contraintes.valeur_min) == Ordering::Less {
        fautes.push(format!(
            "valeur {valeur} sous le minimum {}",
            contraintes.valeur_min
        ));
    }
    if comparer(valeur, &contraintes.valeur_max) == Ordering::Greater {
        fautes.push(format!(
            "valeur {valeur} au-delà du maximum {}",
            contraintes.valeur_max
        ));
    }

    fautes
}

/// Accord entre la valeur d'un nombre, sa forme de saisie et le mode exigé.
fn verifier_forme_nombre(
    valeur: &Rationnel,
    forme: Forme,
    contraintes: &Contraintes,
) -> Vec<String> {
    let mut fautes = Vec::new();

    match contraintes.mode {
        ModeNombre::Decimale => {
            if !est_decimale(valeur, contraintes.decimales_max) {
                fautes.push(format!(
                    "le nombre {valeur} n'est pas décimal ({} décimales max)",
                    contraintes.decimales_max
                ));
            }
            // même valeur, mauvaise écriture : 1/2 saisi au lieu de 0.5
            if matches!(forme, Forme::Fraction | Forme::Mixte) {
                fautes.push(format!(
                    "saisie attendue en écriture décimale, pas en fraction : {valeur}"
                ));
            }
        }
        ModeNombre::Fraction => {
            if forme == Forme::Decimale {
                fautes.push(format!(
                    "saisie attendue en fraction, pas en écriture décimale : {valeur}"
                ));
            }
            if !valeur.denom().is_one()
                && valeur.denom() > &BigInt::from(contraintes.denominateur_max)
            {
                fautes.push(format!(
                    "dénominateur {} au-delà de la limite {}",
                    valeur.denom(),
                    contraintes.denominateur_max
                ));
            }
        }
    }

    fautes
}

/// Tous les nombres d'une suite de jetons : signe, bornes, écriture.
pub fn valider_jetons(jetons: &[Jeton], contraintes: &Contraintes) -> Vec<String> {
    let mut fautes = Vec::new();
    for jeton in jetons {
        if let Jeton::Nombre { valeur, forme } = jeton {
            fautes.extend(valider_valeur(valeur, contraintes));
            fautes.extend(verifier_forme_nombre(valeur, *forme, contraintes));
        }
    }
    fautes
}

/// Règle du nombre d'étapes, comptée sur le membre qui porte l'inconnue :
/// - 1 étape : exactement un opérateur, pas de parenthèses
/// - 2 étapes : au moins deux opérateurs
pub fn valider_etapes(
    jetons_gauche: &[Jeton],
    jetons_droite: &[Jeton],
    contraintes: &Contraintes,
) -> Vec<String> {
    let porte_inconnue = |jetons: &[Jeton]| jetons.iter().any(|j| matches!(j, Jeton::Inconnue));

    let membre = if porte_inconnue(jetons_gauche) {
        jetons_gauche
    } else if porte_inconnue(jetons_droite) {
        jetons_droite
    } else {
        return vec!["aucune inconnue trouvée dans l'équation".into()];
    };

    let operateurs = membre
        .iter()
        .filter(|j| matches!(j, Jeton::Operateur(_)))
        .count();
    let parentheses = membre
        .iter()
        .filter(|j| matches!(j, Jeton::Ouvrante | Jeton::Fermante))
        .count();

    match contraintes.etapes {
        1 => {
            if operateurs != 1 || parentheses != 0 {
                return vec![
                    "une équation à une étape doit comporter exactement une opération, sans parenthèses"
                        .into(),
                ];
            }
        }
        2 => {
            if operateurs < 2 {
                return vec![
                    "une équation à deux étapes doit comporter au moins deux opérations".into(),
                ];
            }
        }
        _ => {}
    }

    Vec::new()
}

/// Forme exigée de la réponse.
pub fn valider_forme_reponse(reponse: &Rationnel, contraintes: &Contraintes) -> Vec<String> {
    match contraintes.forme_reponse {
        FormeReponse::Quelconque => Vec::new(),

        FormeReponse::Entiere => {
            if reponse.denom().is_one() {
                Vec::new()
            } else {
                vec![format!("la réponse doit être un entier : {reponse}")]
            }
        }

        FormeReponse::FractionPropre => {
            let propre = !reponse.denom().is_one()
                && valeur_absolue(reponse).numer() < reponse.denom();
            if propre {
                Vec::new()
            } else {
                vec![format!("la réponse doit être une fraction propre : {reponse}")]
            }
        }

        FormeReponse::Decimale => {
            if est_decimale(reponse, contraintes.decimales_max) {
                Vec::new()
            } else {
                vec![format!(
                    "la réponse doit être un nombre décimal ({} décimales max) : {reponse}",
                    contraintes.decimales_max
                )]
            }
        }
    }
}
