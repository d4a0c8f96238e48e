//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées, budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, caractère
//!   non pris en charge, etc.) : le domaine est volontairement limité
//! - invariant clé : jamais de panique sur une saisie, propre ou sale
//!
//! Les équations fuzzées sont construites avec leur réponse connue d'avance :
//! le solveur doit la retrouver exactement.

use std::time::{Duration, Instant};

use num_traits::Zero;

use super::controle::ReglesSaisie;
use super::distracteurs::generer_choix;
use super::equation::resoudre_equation;
use super::eval::evaluer_expression;
use super::jetons::tokenize;
use super::rationnel::{cle, entier, rat, Rationnel};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz sur ce domaine.
    msg.contains("division par zéro")
        || msg.contains("caractère non pris en charge")
        || msg.contains("entrée vide")
        || msg.contains("expression")
        || msg.contains("jeton")
        || msg.contains("parenthèse")
        || msg.contains("inconnue")
        || msg.contains("signe égal")
        || msg.contains("membre")
}

/// Rationnel borné : entier dans [-9, 9] ou fraction de dénominateur <= 9.
fn gen_rationnel(rng: &mut Rng) -> Rationnel {
    let n = rng.pick(19) as i64 - 9;
    if rng.coin() {
        entier(n)
    } else {
        rat(n, rng.pick(8) as i64 + 2)
    }
}

fn gen_rationnel_non_nul(rng: &mut Rng) -> Rationnel {
    let r = gen_rationnel(rng);
    if r.is_zero() {
        entier(1)
    } else {
        r
    }
}

/// Écrit un rationnel comme le tokenizer le relit : "n" ou "n/d" collé.
fn texte_rationnel(r: &Rationnel) -> String {
    use num_traits::One;
    if r.denom().is_one() {
        r.numer().to_string()
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/* ------------------------ Expressions bien formées ------------------------ */

/// Petite grammaire bornée : atome, binaire, parenthèses, signe.
fn gen_expression(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(4) == 0 {
        return texte_rationnel(&gen_rationnel(rng));
    }

    let a = gen_expression(rng, profondeur - 1);
    let b = gen_expression(rng, profondeur - 1);
    let op = match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "×",
        _ => "÷",
    };

    if rng.coin() {
        format!("({a}) {op} ({b})")
    } else {
        format!("{a} {op} {b}")
    }
}

#[test]
fn fuzz_expressions_generees() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let regles = ReglesSaisie::default();
    let mut rng = Rng::new(0xEC0C1E);

    for _ in 0..400 {
        budget(start, max);
        let texte = gen_expression(&mut rng, 3);

        match evaluer_expression(&texte, &regles) {
            Ok(_) => {}
            Err(e) => assert!(est_erreur_attendue(&e), "texte={texte:?} erreur={e:?}"),
        }

        // déterminisme : deux évaluations, même verdict
        assert_eq!(
            evaluer_expression(&texte, &regles),
            evaluer_expression(&texte, &regles),
            "texte={texte:?}"
        );
    }
}

/* ------------------------ Saisies sales ------------------------ */

#[test]
fn fuzz_saisies_sales() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let regles = ReglesSaisie::default();
    let mut rng = Rng::new(0xBAD5EED);

    let alphabet: Vec<char> = "0123456789+-×÷*/:xX()□=＝. abc!?".chars().collect();

    for _ in 0..2000 {
        budget(start, max);

        let longueur = rng.pick(16) as usize;
        let texte: String = (0..longueur)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // aucune panique admise, quel que soit le verdict
        let _ = tokenize(&texte);
        if let Err(e) = evaluer_expression(&texte, &regles) {
            assert!(est_erreur_attendue(&e), "texte={texte:?} erreur={e:?}");
        }
        let _ = resoudre_equation(&texte, &regles);
    }
}

/* ------------------------ Équations à réponse connue ------------------------ */

#[test]
fn fuzz_equations_construites() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let regles = ReglesSaisie::default();
    let mut rng = Rng::new(0x51D0);

    for _ in 0..300 {
        budget(start, max);

        let reponse = gen_rationnel(&mut rng);
        let k = gen_rationnel_non_nul(&mut rng);
        let tk = texte_rationnel(&k);

        // une étape, toutes les positions de l'inconnue
        let (gauche, rhs): (String, Rationnel) = match rng.pick(6) {
            0 => (format!("□ + {tk}"), &reponse + &k),
            1 => (format!("□ - {tk}"), &reponse - &k),
            2 => (format!("□ × {tk}"), &reponse * &k),
            3 => (format!("□ ÷ {tk}"), &reponse / &k),
            4 => (format!("{tk} - □"), &k - &reponse),
            _ => {
                // k ÷ □ : il faut une réponse non nulle
                let reponse = if reponse.is_zero() { entier(1) } else { reponse.clone() };
                let equation = format!("{tk} ÷ □ = {}", texte_rationnel(&(&k / &reponse)));
                let resolu = resoudre_equation(&equation, &regles)
                    .unwrap_or_else(|e| panic!("équation {equation:?} : {e}"));
                assert_eq!(resolu.reponse, reponse, "équation={equation:?}");
                continue;
            }
        };

        let equation = format!("{gauche} = {}", texte_rationnel(&rhs));
        let resolu = resoudre_equation(&equation, &regles)
            .unwrap_or_else(|e| panic!("équation {equation:?} : {e}"));
        assert_eq!(resolu.reponse, reponse, "équation={equation:?}");
    }
}

#[test]
fn fuzz_equations_deux_etapes() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let regles = ReglesSaisie::default();
    let mut rng = Rng::new(0xD0D0);

    for _ in 0..200 {
        budget(start, max);

        let reponse = gen_rationnel(&mut rng);
        let k1 = gen_rationnel_non_nul(&mut rng);
        let k2 = gen_rationnel_non_nul(&mut rng);

        // (□ ∘ k1) ∘ k2 = rhs, opérations inversibles garanties
        let (interieur, v1): (String, Rationnel) = if rng.coin() {
            (format!("□ + {}", texte_rationnel(&k1)), &reponse + &k1)
        } else {
            (format!("□ × {}", texte_rationnel(&k1)), &reponse * &k1)
        };
        let (gauche, rhs): (String, Rationnel) = if rng.coin() {
            (format!("({interieur}) - {}", texte_rationnel(&k2)), &v1 - &k2)
        } else {
            (format!("({interieur}) ÷ {}", texte_rationnel(&k2)), &v1 / &k2)
        };

        let equation = format!("{gauche} = {}", texte_rationnel(&rhs));
        let resolu = resoudre_equation(&equation, &regles)
            .unwrap_or_else(|e| panic!("équation {equation:?} : {e}"));
        assert_eq!(resolu.reponse, reponse, "équation={equation:?}");
    }
}

/* ------------------------ Distracteurs ------------------------ */

#[test]
fn fuzz_distracteurs_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xD15C);

    for _ in 0..300 {
        budget(start, max);

        let reponse = gen_rationnel(&mut rng);
        let choix = generer_choix(&reponse);

        assert_eq!(choix.valeurs.len(), 4, "réponse={reponse}");

        let mut clefs: Vec<String> = choix.valeurs.iter().map(cle).collect();
        clefs.sort();
        clefs.dedup();
        assert_eq!(clefs.len(), 4, "choix en doublon pour {reponse}");

        assert_eq!(
            cle(&choix.valeurs[choix.indice_correct]),
            cle(&reponse),
            "indice_correct faux pour {reponse}"
        );
    }
}
