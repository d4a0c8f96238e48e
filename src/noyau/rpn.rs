// src/noyau/rpn.rs
//
// Shunting-yard -> RPN, puis deux réductions de la même RPN :
// - eval_rpn : pile de valeurs  -> un Rationnel (expressions numériques)
// - from_rpn : pile de noeuds   -> un arbre Expr (membres d'équation)
//
// Précédences : × ÷ = 2, + - = 1, associativité gauche, parenthèses.
// Le signe unaire n'existe plus ici : le tokenizer l'a déjà abaissé en
// littéral signé ou en "0 ∘ …".

use super::expr::Expr;
use super::jetons::{Jeton, Op};
use super::rationnel::{diviser, Rationnel};

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Divise => 2,
    }
}

/// Convertit une suite de jetons (contrôlée) en notation polonaise inversée.
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, String> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre { .. } | Jeton::Inconnue => out.push(jeton),

            Jeton::Ouvrante => ops.push(jeton),

            Jeton::Fermante => {
                // dépile jusqu'à '('
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::Ouvrante) {
                        break;
                    }
                    out.push(haut);
                }
            }

            Jeton::Operateur(op) => {
                while let Some(haut) = ops.last() {
                    match haut {
                        Jeton::Ouvrante => break,
                        Jeton::Operateur(haut_op) if precedence(*haut_op) >= precedence(op) => {
                            let depile = ops.pop().ok_or("pile d'opérateurs vide")?;
                            out.push(depile);
                        }
                        _ => break,
                    }
                }
                ops.push(Jeton::Operateur(op));
            }
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::Ouvrante) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Réduit une RPN entièrement numérique en un Rationnel.
///
/// L'inconnue dans le flux est une erreur (ce chemin est réservé aux
/// expressions) ; un diviseur littéral nul ressort ici en
/// "division par zéro", jamais au contrôle.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<Rationnel, String> {
    let mut pile: Vec<Rationnel> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre { valeur, .. } => pile.push(valeur.clone()),

            Jeton::Inconnue => {
                return Err("expression non numérique : l'inconnue est présente".into())
            }

            Jeton::Operateur(op) => {
                let b = pile.pop().ok_or("expression mal formée")?;
                let a = pile.pop().ok_or("expression mal formée")?;
                let v = match op {
                    Op::Plus => a + b,
                    Op::Moins => a - b,
                    Op::Fois => a * b,
                    Op::Divise => diviser(&a, &b)?,
                };
                pile.push(v);
            }

            Jeton::Ouvrante | Jeton::Fermante => {
                return Err("parenthèse inattendue en RPN".into())
            }
        }
    }

    if pile.len() != 1 {
        return Err("expression mal formée".into());
    }
    Ok(pile.pop().ok_or("expression mal formée")?)
}

/// Même réduction, mais en construisant un arbre Expr
/// (un appel par membre d'équation).
pub fn from_rpn(rpn: &[Jeton]) -> Result<Expr, String> {
    let mut pile: Vec<Expr> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre { valeur, .. } => pile.push(Expr::Rat(valeur.clone())),

            Jeton::Inconnue => pile.push(Expr::Inconnue),

            Jeton::Operateur(op) => {
                let b = pile.pop().ok_or("expression mal formée")?;
                let a = pile.pop().ok_or("expression mal formée")?;
                pile.push(Expr::Op(*op, Box::new(a), Box::new(b)));
            }

            Jeton::Ouvrante | Jeton::Fermante => {
                return Err("parenthèse inattendue en RPN".into())
            }
        }
    }

    if pile.len() != 1 {
        return Err("expression mal formée".into());
    }
    Ok(pile.pop().ok_or("expression mal formée")?)
}

/// Évaluation directe d'une suite de jetons numériques contrôlée.
pub fn evaluer(jetons: &[Jeton]) -> Result<Rationnel, String> {
    eval_rpn(&to_rpn(jetons)?)
}
