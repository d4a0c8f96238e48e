// src/noyau/expr.rs
//
// AST d'un membre d'équation : nombres, l'inconnue, opérations binaires.
// Chaque noeud possède ses deux enfants (Box) ; l'arbre est petit (borné par
// la longueur de la saisie) et vit le temps d'une résolution.

use num_traits::One;

use std::fmt;

use super::jetons::{Op, GLYPHE_INCONNUE};
use super::rationnel::Rationnel;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Rat(Rationnel),
    Inconnue,
    Op(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Nombre d'occurrences de l'inconnue dans l'arbre.
    /// Le solveur exige un total de 1 sur les deux membres réunis.
    pub fn compter_inconnues(&self) -> usize {
        match self {
            Expr::Rat(_) => 0,
            Expr::Inconnue => 1,
            Expr::Op(_, a, b) => a.compter_inconnues() + b.compter_inconnues(),
        }
    }

    /// Réduction d'un arbre entièrement constant en un rationnel.
    /// Erreur si l'inconnue est présente (membre non constant) ou si une
    /// division par zéro apparaît en cours de pliage.
    pub fn evaluer_constante(&self) -> Result<Rationnel, String> {
        match self {
            Expr::Rat(r) => Ok(r.clone()),
            Expr::Inconnue => Err("le membre n'est pas constant : l'inconnue est présente".into()),
            Expr::Op(op, a, b) => {
                let x = a.evaluer_constante()?;
                let y = b.evaluer_constante()?;
                match op {
                    Op::Plus => Ok(x + y),
                    Op::Moins => Ok(x - y),
                    Op::Fois => Ok(x * y),
                    Op::Divise => super::rationnel::diviser(&x, &y),
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Rat(r) => {
                let n = r.numer();
                let d = r.denom();
                if d.is_one() {
                    write!(f, "{n}")
                } else {
                    write!(f, "{n}/{d}")
                }
            }
            Expr::Inconnue => write!(f, "{GLYPHE_INCONNUE}"),
            Expr::Op(op, a, b) => write!(f, "({a}{}{b})", op.symbole()),
        }
    }
}
