// src/noyau/equation.rs
//
// Équations linéaires à une inconnue, apparaissant UNE seule fois :
//   "□+3=5", "(□-1)×2=10", "10÷□=4" …
//
// Démarche :
// 1. découpe sur le signe égal (= ou ＝, exactement un)
// 2. tokenisation + contrôle de chaque membre
// 3. un arbre Expr par membre, comptage des inconnues (total == 1 exigé)
// 4. pliage du membre constant, puis isolation récursive : à chaque noeud,
//    on inverse l'opération englobante en tenant compte de la position de
//    l'inconnue (− et ÷ ne sont pas commutatifs)
//
// Le solveur ne réécrit jamais la saisie : il rend les jetons d'origine des
// deux membres et la seule valeur dérivée, la réponse.
//
// Hors périmètre (refus propre, jamais d'approximation) : inconnue répétée,
// inconnue dans les deux membres, équations non linéaires.

use super::controle::{valider, ReglesSaisie};
use super::expr::Expr;
use super::jetons::{tokenize, Jeton};
use super::rationnel::{diviser, Rationnel};
use super::rpn::{from_rpn, to_rpn};

/// Résultat d'une résolution : les jetons d'origine + la réponse.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub jetons_gauche: Vec<Jeton>,
    pub jetons_droite: Vec<Jeton>,
    pub reponse: Rationnel,
}

/// Découpe "gauche = droite" : exactement un signe égal (= ou ＝),
/// deux membres non vides. Contrôlé AVANT toute tokenisation.
pub fn decouper(texte: &str) -> Result<(&str, &str), String> {
    let positions: Vec<usize> = texte
        .char_indices()
        .filter(|(_, c)| *c == '=' || *c == '＝')
        .map(|(i, _)| i)
        .collect();

    match positions.len() {
        0 => Err("l'équation doit contenir un signe égal".into()),
        1 => {
            let i = positions[0];
            let separateur = texte[i..].chars().next().ok_or("équation illisible")?;
            let gauche = texte[..i].trim();
            let droite = texte[i + separateur.len_utf8()..].trim();
            if gauche.is_empty() || droite.is_empty() {
                return Err("un membre de l'équation est vide".into());
            }
            Ok((gauche, droite))
        }
        _ => Err("l'équation doit contenir un seul signe égal".into()),
    }
}

/// Analyse puis résout une équation saisie en texte.
pub fn resoudre_equation(texte: &str, regles: &ReglesSaisie) -> Result<Resolution, String> {
    let (gauche, droite) = decouper(texte)?;

    let jetons_gauche = tokenize(gauche)?;
    valider(&jetons_gauche, regles)?;
    let jetons_droite = tokenize(droite)?;
    valider(&jetons_droite, regles)?;

    let arbre_gauche = from_rpn(&to_rpn(&jetons_gauche)?)?;
    let arbre_droite = from_rpn(&to_rpn(&jetons_droite)?)?;

    let a_gauche = arbre_gauche.compter_inconnues();
    let a_droite = arbre_droite.compter_inconnues();

    match a_gauche + a_droite {
        0 => return Err("aucune inconnue trouvée dans l'équation".into()),
        1 => {}
        _ => {
            return Err(
                "inconnue répétée ou présente dans les deux membres (non pris en charge)".into(),
            )
        }
    }

    let (arbre_inconnue, arbre_constant) = if a_gauche == 1 {
        (&arbre_gauche, &arbre_droite)
    } else {
        (&arbre_droite, &arbre_gauche)
    };

    let cible = arbre_constant.evaluer_constante()?;
    let reponse = isoler_inconnue(arbre_inconnue, cible)?;

    Ok(Resolution {
        jetons_gauche,
        jetons_droite,
        reponse,
    })
}

/// Isolation récursive : "cible" est la valeur que doit prendre le sous-arbre
/// courant. À chaque noeud binaire, exactement une branche contient l'inconnue
/// (garanti par le comptage) ; on plie l'autre branche en constante et on
/// inverse l'opération, selon la position de l'inconnue :
///
/// ```text
///   op      inconnue à gauche      inconnue à droite
///   +       cible - connue         cible - connue
///   -       cible + connue         connue - cible
///   ×       cible ÷ connue         cible ÷ connue
///   ÷       cible × connue         connue ÷ cible
/// ```
///
/// Une constante "connue" nulle sous × (ou une cible nulle sous ÷ à droite)
/// ressort en "division par zéro".
fn isoler_inconnue(expr: &Expr, cible: Rationnel) -> Result<Rationnel, String> {
    use super::jetons::Op;

    match expr {
        Expr::Inconnue => Ok(cible),

        // le comptage interdit d'arriver sur une feuille constante
        Expr::Rat(_) => unreachable!("isolation sur une feuille constante"),

        Expr::Op(op, a, b) => {
            let inconnue_a_gauche = a.compter_inconnues() == 1;
            let (branche_inconnue, branche_connue): (&Expr, &Expr) =
                if inconnue_a_gauche { (a, b) } else { (b, a) };

            let connue = branche_connue.evaluer_constante()?;
            let prochaine_cible = match (op, inconnue_a_gauche) {
                (Op::Plus, _) => cible - connue,
                (Op::Moins, true) => cible + connue,
                (Op::Moins, false) => connue - cible,
                (Op::Fois, _) => diviser(&cible, &connue)?,
                (Op::Divise, true) => cible * connue,
                (Op::Divise, false) => diviser(&connue, &cible)?,
            };

            isoler_inconnue(branche_inconnue, prochaine_cible)
        }
    }
}
