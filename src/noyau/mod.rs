//! Noyau exact de l'exerciseur
//!
//! Organisation interne :
//! - rationnel.rs    : valeur exacte n/d + clef canonique + formes décimales
//! - jetons.rs       : tokenisation (nombres, inconnue □, synonymes d'opérateurs)
//! - controle.rs     : bonne formation d'une suite de jetons + politique de saisie
//! - rpn.rs          : shunting-yard ; réduction en valeur OU en arbre
//! - expr.rs         : AST d'un membre d'équation
//! - equation.rs     : découpe sur =, comptage de l'inconnue, isolation récursive
//! - distracteurs.rs : mauvaises réponses plausibles d'un QCM
//! - contraintes.rs  : règles de format configurées par l'enseignant
//! - eval.rs         : pipeline expressions

pub mod contraintes;
pub mod controle;
pub mod distracteurs;
pub mod equation;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod rationnel;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use contraintes::{
    valider_etapes, valider_forme_reponse, valider_jetons, Contraintes, FormeReponse, ModeNombre,
};
pub use controle::{valider, ReglesSaisie};
pub use distracteurs::{generer_choix, ChoixQcm};
pub use equation::{resoudre_equation, Resolution};
pub use eval::{analyser_expression, evaluer_expression};
pub use jetons::{format_jetons, tokenize, Forme, Jeton, Op, GLYPHE_INCONNUE};
pub use rationnel::{normaliser, Rationnel};
