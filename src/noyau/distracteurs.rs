// src/noyau/distracteurs.rs
//
// Génération des mauvaises réponses "plausibles" d'un QCM à 4 choix.
//
// Démarche :
// 1. la bonne réponse ensemence l'ensemble (dédoublonné par clef canonique)
// 2. une échelle FIXE de candidats voisins, selon que la réponse est entière
//    ou fractionnaire
// 3. si l'échelle ne suffit pas, repêchage aléatoire BORNÉ (200 essais max)
// 4. mélange final + repérage de l'indice de la bonne réponse
//
// Politique de repli (cas pathologique, jamais vu sur des réponses réelles) :
// si le budget d'essais s'épuise sous 3 distracteurs uniques, on rend
// l'ensemble dédoublonné tel quel (moins de 4 valeurs) plutôt que des
// doublons ou un échec ; l'appelant le voit sur valeurs.len().

use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::seq::SliceRandom;
use rand::Rng;

use std::collections::HashSet;

use super::rationnel::{cle, entier, normaliser, Rationnel};

/// Nombre d'essais de perturbation aléatoire avant d'abandonner le repêchage.
const BUDGET_REPECHAGE: usize = 200;

/// Les 4 choix d'une question, mélangés, et l'indice de la bonne réponse.
#[derive(Clone, Debug)]
pub struct ChoixQcm {
    pub valeurs: Vec<Rationnel>,
    pub indice_correct: usize,
}

/// Produit 4 valeurs deux à deux distinctes (la bonne + 3 distracteurs).
pub fn generer_choix(reponse: &Rationnel) -> ChoixQcm {
    let mut vues: HashSet<String> = HashSet::new();
    vues.insert(cle(reponse));

    let mut distracteurs: Vec<Rationnel> = Vec::new();
    let mut retenir = |candidat: Rationnel, distracteurs: &mut Vec<Rationnel>| {
        if distracteurs.len() < 3 && vues.insert(cle(&candidat)) {
            distracteurs.push(candidat);
        }
    };

    let candidats = if reponse.denom().is_one() {
        candidats_entier(reponse)
    } else {
        candidats_fraction(reponse)
    };
    for c in candidats {
        retenir(c, &mut distracteurs);
    }

    // repêchage aléatoire borné
    let mut rng = rand::thread_rng();
    let mut essais = 0;
    while distracteurs.len() < 3 && essais < BUDGET_REPECHAGE {
        essais += 1;

        let decalage_n: i64 = rng.gen_range(-9..=9);
        let n = reponse.numer() + BigInt::from(decalage_n);
        let d = if reponse.denom().is_one() {
            BigInt::one()
        } else {
            // petit décalage de dénominateur aussi, plancher à 1
            let decalage_d: i64 = rng.gen_range(-3..=3);
            plancher_un(reponse.denom() + BigInt::from(decalage_d))
        };
        retenir(normaliser(n, d), &mut distracteurs);
    }

    let mut valeurs = Vec::with_capacity(4);
    valeurs.push(reponse.clone());
    valeurs.extend(distracteurs);
    valeurs.shuffle(&mut rng);

    let clef_correcte = cle(reponse);
    let indice_correct = valeurs
        .iter()
        .position(|v| cle(v) == clef_correcte)
        .unwrap_or(0);

    ChoixQcm {
        valeurs,
        indice_correct,
    }
}

/// Voisins d'une réponse entière : ±1, ±2, ±3, le double, la moitié tronquée
/// (remplacée par 1 quand la réponse est 0).
fn candidats_entier(reponse: &Rationnel) -> Vec<Rationnel> {
    let mut out = Vec::new();
    for ecart in [1i64, 2, 3] {
        out.push(reponse + entier(ecart));
        out.push(reponse - entier(ecart));
    }
    out.push(reponse * entier(2));
    if reponse.is_zero() {
        out.push(entier(1));
    } else {
        out.push((reponse / entier(2)).trunc());
    }
    out
}

/// Voisins d'une réponse fractionnaire n/d : numérateur et dénominateur
/// décalés de {1, 2, -1, -2} (dénominateur plancher 1), plus (n±d)/d.
fn candidats_fraction(reponse: &Rationnel) -> Vec<Rationnel> {
    let n = reponse.numer();
    let d = reponse.denom();

    let mut out = Vec::new();
    for ecart in [1i64, 2, -1, -2] {
        let e = BigInt::from(ecart);
        out.push(normaliser(n + &e, d.clone()));
        out.push(normaliser(n.clone(), plancher_un(d + &e)));
    }
    out.push(normaliser(n + d, d.clone()));
    out.push(normaliser(n - d, d.clone()));
    out
}

fn plancher_un(x: BigInt) -> BigInt {
    if x < BigInt::one() {
        BigInt::one()
    } else {
        x
    }
}
