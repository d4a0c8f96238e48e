// src/noyau/controle.rs
//
// Contrôle syntaxique d'une suite de jetons, avant toute évaluation.
//
// Un seul balayage gauche-droite avec :
// - un compteur d'équilibre de parenthèses
// - la classe du jeton précédent (aucun / valeur / opérateur / ouvrante / fermante)
//
// Le contrôle ne regarde QUE la structure : un diviseur nul ("3÷0") passe ici
// et échoue à l'évaluation (division par zéro).
//
// Chaque refus donne un message lisible, avec l'indice du jeton fautif
// (1-based) quand il y en a un.

use super::jetons::{Jeton, Op};

/// Politique de saisie configurée par l'enseignant : opérateurs permis et
/// droit aux parenthèses. Lecture seule pour le noyau.
#[derive(Clone, Debug)]
pub struct ReglesSaisie {
    pub ops_autorises: Vec<Op>,
    pub parentheses_permises: bool,
}

impl Default for ReglesSaisie {
    fn default() -> Self {
        Self {
            ops_autorises: vec![Op::Plus, Op::Moins, Op::Fois, Op::Divise],
            parentheses_permises: true,
        }
    }
}

impl ReglesSaisie {
    pub fn sans_parentheses(ops: &[Op]) -> Self {
        Self {
            ops_autorises: ops.to_vec(),
            parentheses_permises: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Classe {
    Aucun,
    Valeur,
    Operateur,
    Ouvrante,
    Fermante,
}

/// Vérifie la bonne formation d'une suite de jetons.
pub fn valider(jetons: &[Jeton], regles: &ReglesSaisie) -> Result<(), String> {
    if jetons.is_empty() {
        return Err("expression vide".into());
    }

    let mut equilibre: i64 = 0;
    let mut precedent = Classe::Aucun;

    for (indice, jeton) in jetons.iter().enumerate() {
        let position = indice + 1;

        match jeton {
            Jeton::Nombre { .. } | Jeton::Inconnue => {
                // deux opérandes sans opérateur entre eux
                if matches!(precedent, Classe::Valeur | Classe::Fermante) {
                    return Err(format!("jeton {position} : opérateur manquant avant l'opérande"));
                }
                precedent = Classe::Valeur;
            }

            Jeton::Operateur(op) => {
                if !matches!(precedent, Classe::Valeur | Classe::Fermante) {
                    return Err(format!("jeton {position} : opérateur mal placé"));
                }
                if !regles.ops_autorises.contains(op) {
                    return Err(format!(
                        "jeton {position} : opérateur '{}' non autorisé",
                        op.symbole()
                    ));
                }
                precedent = Classe::Operateur;
            }

            Jeton::Ouvrante => {
                if !regles.parentheses_permises {
                    return Err(format!("jeton {position} : parenthèses non autorisées"));
                }
                // la multiplication implicite doit déjà avoir été insérée
                if matches!(precedent, Classe::Valeur | Classe::Fermante) {
                    return Err(format!("jeton {position} : parenthèse ouvrante mal placée"));
                }
                equilibre += 1;
                precedent = Classe::Ouvrante;
            }

            Jeton::Fermante => {
                if !regles.parentheses_permises {
                    return Err(format!("jeton {position} : parenthèses non autorisées"));
                }
                if !matches!(precedent, Classe::Valeur | Classe::Fermante) {
                    return Err(format!("jeton {position} : parenthèse fermante mal placée"));
                }
                if equilibre == 0 {
                    return Err(format!(
                        "jeton {position} : parenthèse fermante sans ouvrante"
                    ));
                }
                equilibre -= 1;
                precedent = Classe::Fermante;
            }
        }
    }

    if equilibre != 0 {
        return Err("parenthèses non équilibrées".into());
    }
    if matches!(precedent, Classe::Operateur | Classe::Ouvrante) {
        return Err("expression incomplète".into());
    }

    Ok(())
}
