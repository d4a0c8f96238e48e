// src/lib.rs
//
// Exerciseur Q-exact — noyau symbolique pour exercices d'arithmétique
// -------------------------------------------------------------------
// But :
// - lire des expressions et des équations linéaires à une inconnue saisies
//   par l'enseignant (texte ou montage direct de jetons)
// - tout représenter en rationnels EXACTS (jamais de flottants)
// - évaluer, résoudre symboliquement, proposer des distracteurs de QCM,
//   vérifier les contraintes de format du programme
//
// Tout est fonction pure sur entrées immuables : pas d'état, pas d'E/S,
// appel concurrent sans synchronisation. Le reste de l'application
// (interfaces, banques de questions) consomme uniquement cette API.

pub mod noyau;

pub use noyau::{
    analyser_expression, evaluer_expression, format_jetons, generer_choix, normaliser,
    resoudre_equation, tokenize, valider, valider_etapes, valider_forme_reponse, valider_jetons,
    ChoixQcm, Contraintes, Forme, FormeReponse, Jeton, ModeNombre, Op, Rationnel, ReglesSaisie,
    Resolution, GLYPHE_INCONNUE,
};
