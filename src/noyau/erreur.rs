// src/noyau/erreur.rs
//
// Absence de résultat (cas normaux, jamais un crash).

pub type ResultatEval<T> = Result<T, ErreurEval>;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Un opérateur manque d’opérandes (ou programme vide).
    #[error("opérandes insuffisants")]
    Insuffisant,

    /// Variable absente de la table des valeurs.
    #[error("variable non définie : {0}")]
    VariableInconnue(String),
}
