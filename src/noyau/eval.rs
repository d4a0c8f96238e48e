// src/noyau/eval.rs
//
// Pipeline complet côté expressions :
//   texte -> jetons -> contrôle -> RPN -> Rationnel
//
// Les équations ont leur propre pipeline dans equation.rs (même tête de
// chaîne, puis arbre + isolation).

use super::controle::{valider, ReglesSaisie};
use super::jetons::{tokenize, Jeton};
use super::rationnel::Rationnel;
use super::rpn::evaluer;

/// Tokenise et contrôle une saisie : les jetons prêts à évaluer/afficher.
/// C'est aussi le point d'entrée du montage côté interface quand la saisie
/// arrive en texte.
pub fn analyser_expression(texte: &str, regles: &ReglesSaisie) -> Result<Vec<Jeton>, String> {
    let s = texte.trim();
    if s.is_empty() {
        return Err("entrée vide".into());
    }

    let jetons = tokenize(s)?;
    valider(&jetons, regles)?;
    Ok(jetons)
}

/// Évalue une expression entièrement numérique en un rationnel exact.
pub fn evaluer_expression(texte: &str, regles: &ReglesSaisie) -> Result<Rationnel, String> {
    let jetons = analyser_expression(texte, regles)?;
    evaluer(&jetons)
}
