// src/noyau/op.rs
//
// Opérations du programme RPN + table des opérations connues.
//
// Règles:
// - Binaire: précédence explicite (+ - => 1 ; × ÷ => 2)
// - Tout le reste (opérande, variable, constante, unaire) => PRECEDENCE_MAX
// - Binaire: la fonction reçoit (a, b) où `a` est dépilé EN PREMIER
//   (donc le second opérande mathématique). D’où ÷ = b / a et - = b - a.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

/// Précédence “jamais entre parenthèses”.
pub const PRECEDENCE_MAX: i32 = i32::MAX;

#[derive(Clone, Debug)]
pub enum Op {
    Operande(f64),
    Variable(String),
    Constante(String, fn() -> f64),
    Unaire(String, fn(f64) -> f64),
    Binaire(String, i32, fn(f64, f64) -> f64),
}

impl Op {
    /// Texte du jeton : littéral pour un opérande, symbole/nom sinon.
    pub fn symbole(&self) -> String {
        match self {
            Op::Operande(v) => format!("{v}"),
            Op::Variable(nom) | Op::Constante(nom, _) => nom.clone(),
            Op::Unaire(s, _) | Op::Binaire(s, _, _) => s.clone(),
        }
    }

    /// Précédence (sert uniquement au rendu de l’historique).
    pub fn precedence(&self) -> i32 {
        match self {
            Op::Binaire(_, p, _) => *p,
            _ => PRECEDENCE_MAX,
        }
    }

    /// Vrai pour une feuille (opérande, variable, constante).
    pub fn est_feuille(&self) -> bool {
        matches!(self, Op::Operande(_) | Op::Variable(_) | Op::Constante(..))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbole())
    }
}

/// Construit la table des opérations connues (symbole -> Op).
pub fn operations_connues() -> HashMap<String, Op> {
    let ops = [
        Op::Binaire("×".into(), 2, |a, b| a * b),
        Op::Binaire("÷".into(), 2, |a, b| b / a),
        Op::Binaire("+".into(), 1, |a, b| a + b),
        Op::Binaire("-".into(), 1, |a, b| b - a),
        Op::Unaire("√".into(), f64::sqrt),
        Op::Unaire("sin".into(), f64::sin),
        Op::Unaire("cos".into(), f64::cos),
        Op::Unaire("±".into(), |x| -x),
        Op::Constante("π".into(), || PI),
    ];

    ops.into_iter().map(|op| (op.symbole(), op)).collect()
}
