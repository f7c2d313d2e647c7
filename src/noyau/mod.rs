//! Noyau RPN (le “cerveau”)
//!
//! Organisation interne :
//! - op.rs       : Op (opérande, variable, constante, unaire, binaire) + table connue
//! - erreur.rs   : pourquoi il n’y a pas de résultat (pile insuffisante, variable)
//! - eval.rs     : évaluation récursive depuis la fin du programme
//! - format.rs   : historique infix (parenthèses minimales)
//! - jetons.rs   : programme <-> transcription symbolique
//! - cerveau.rs  : API publique (push/perform/undo/clear/evaluate/description)

pub mod cerveau;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod op;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use cerveau::Cerveau;
